//! Builder for constructing Settings.

use super::Settings;
use super::core::{
    DEFAULT_ASSETS, DEFAULT_COMPILER, DEFAULT_OUT_DIR, DEFAULT_SOURCE_DIR, DEFAULT_TARGET,
};
use crate::bundler::error::Context;
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// Every field has a default matching the fixed bundle layout, so
/// `SettingsBuilder::new().build()` is what the command-line tool uses.
/// Overrides exist for library callers and tests.
///
/// # Examples
///
/// ```no_run
/// use web_bundle::bundler::SettingsBuilder;
///
/// # fn example() -> web_bundle::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .working_dir("/tmp/site")
///     .compiler("/opt/tools/wasm-pack")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    working_dir: Option<PathBuf>,
    compiler: Option<String>,
    target: Option<String>,
    out_dir_name: Option<String>,
    source_dir_name: Option<String>,
    assets: Option<Vec<String>>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the working directory.
    ///
    /// Default: the process's current directory, as the relative path `.`.
    pub fn working_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.working_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the compiler program.
    ///
    /// Default: `wasm-pack`
    pub fn compiler(mut self, program: impl Into<String>) -> Self {
        self.compiler = Some(program.into());
        self
    }

    /// Sets the compiler deployment target.
    ///
    /// Default: `web`
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Sets the output directory name.
    ///
    /// Default: `dist`
    pub fn out_dir_name(mut self, name: impl Into<String>) -> Self {
        self.out_dir_name = Some(name.into());
        self
    }

    /// Sets the directory holding the static assets.
    ///
    /// Default: `src`
    pub fn source_dir_name(mut self, name: impl Into<String>) -> Self {
        self.source_dir_name = Some(name.into());
        self
    }

    /// Sets the static assets to copy.
    ///
    /// Default: `index.html`, `style.css`
    pub fn assets<I, S>(mut self, assets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.assets = Some(assets.into_iter().map(Into::into).collect());
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the compiler, target or output directory name is
    /// empty, or if an asset name is not a plain file name.
    pub fn build(self) -> crate::bundler::Result<Settings> {
        let compiler = non_empty(self.compiler, DEFAULT_COMPILER).context("compiler is empty")?;
        let target = non_empty(self.target, DEFAULT_TARGET).context("target is empty")?;
        let out_dir_name =
            non_empty(self.out_dir_name, DEFAULT_OUT_DIR).context("output directory is empty")?;
        let source_dir_name = self
            .source_dir_name
            .unwrap_or_else(|| DEFAULT_SOURCE_DIR.to_string());

        let assets = self
            .assets
            .unwrap_or_else(|| DEFAULT_ASSETS.iter().map(|s| s.to_string()).collect());
        for asset in &assets {
            let mut components = Path::new(asset).components();
            let plain = matches!(
                (components.next(), components.next()),
                (Some(std::path::Component::Normal(_)), None)
            );
            if !plain {
                crate::bail!("asset {asset:?} is not a plain file name");
            }
        }

        Ok(Settings::new(
            self.working_dir.unwrap_or_else(|| PathBuf::from(".")),
            compiler,
            target,
            out_dir_name,
            source_dir_name,
            assets,
        ))
    }
}

fn non_empty(value: Option<String>, default: &str) -> Option<String> {
    let value = value.unwrap_or_else(|| default.to_string());
    (!value.is_empty()).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_layout() {
        let settings = SettingsBuilder::new().build().unwrap();
        assert_eq!(settings.compiler(), "wasm-pack");
        assert_eq!(settings.target(), "web");
        assert_eq!(settings.out_dir(), Path::new("./dist"));
        assert_eq!(
            settings.asset_copies(),
            vec![
                (PathBuf::from("./src/index.html"), PathBuf::from("./dist/index.html")),
                (PathBuf::from("./src/style.css"), PathBuf::from("./dist/style.css")),
            ]
        );
    }

    #[test]
    fn working_dir_anchors_every_path() {
        let settings = SettingsBuilder::new().working_dir("/srv/site").build().unwrap();
        assert_eq!(settings.out_dir(), Path::new("/srv/site/dist"));
        assert_eq!(settings.source_dir(), Path::new("/srv/site/src"));
    }

    #[test]
    fn empty_compiler_is_rejected() {
        let err = SettingsBuilder::new().compiler("").build().unwrap_err();
        assert_eq!(err.to_string(), "compiler is empty");
    }

    #[test]
    fn asset_names_must_stay_inside_source_dir() {
        assert!(SettingsBuilder::new().assets(["../secret"]).build().is_err());
        assert!(SettingsBuilder::new().assets(["a/b.css"]).build().is_err());
        assert!(SettingsBuilder::new().assets(["favicon.ico"]).build().is_ok());
    }
}
