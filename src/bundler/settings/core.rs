//! Core Settings struct and implementations.

use std::path::{Path, PathBuf};

/// Compiler invoked to build the WebAssembly module.
pub const DEFAULT_COMPILER: &str = "wasm-pack";

/// Deployment target passed to the compiler.
pub const DEFAULT_TARGET: &str = "web";

/// Distribution directory, relative to the working directory.
pub const DEFAULT_OUT_DIR: &str = "dist";

/// Directory holding the static assets, relative to the working directory.
pub const DEFAULT_SOURCE_DIR: &str = "src";

/// Static assets copied into the distribution directory, in copy order.
pub const DEFAULT_ASSETS: [&str; 2] = ["index.html", "style.css"];

/// Settings for a bundle run.
///
/// Constructed via [`SettingsBuilder`](super::SettingsBuilder). The defaults
/// reproduce the fixed layout: `wasm-pack build --target web --out-dir dist`
/// followed by copying `src/index.html` and `src/style.css` into `dist/`.
///
/// # Examples
///
/// ```no_run
/// use web_bundle::bundler::SettingsBuilder;
///
/// # fn example() -> web_bundle::bundler::Result<()> {
/// let settings = SettingsBuilder::new().working_dir("site").build()?;
/// assert!(settings.out_dir().ends_with("dist"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    /// Directory the compiler runs in and all other paths are relative to.
    working_dir: PathBuf,

    /// Compiler program, looked up on `PATH` unless it contains a separator.
    compiler: String,

    /// Value for the compiler's `--target`.
    target: String,

    /// Output directory name handed to the compiler's `--out-dir`.
    out_dir_name: String,

    /// Directory holding the static assets.
    source_dir_name: String,

    /// Static asset file names, copied in this order.
    assets: Vec<String>,
}

impl Settings {
    /// Returns the working directory.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Returns the compiler program.
    pub fn compiler(&self) -> &str {
        &self.compiler
    }

    /// Returns the compiler deployment target.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Returns the output directory name as passed to the compiler.
    pub fn out_dir_name(&self) -> &str {
        &self.out_dir_name
    }

    /// Returns the output directory resolved against the working directory.
    pub fn out_dir(&self) -> PathBuf {
        self.working_dir.join(&self.out_dir_name)
    }

    /// Returns the source directory resolved against the working directory.
    pub fn source_dir(&self) -> PathBuf {
        self.working_dir.join(&self.source_dir_name)
    }

    /// Returns the static asset names.
    pub fn assets(&self) -> &[String] {
        &self.assets
    }

    /// Source and destination path for each static asset, in copy order.
    pub fn asset_copies(&self) -> Vec<(PathBuf, PathBuf)> {
        let source_dir = self.source_dir();
        let out_dir = self.out_dir();
        self.assets
            .iter()
            .map(|name| (source_dir.join(name), out_dir.join(name)))
            .collect()
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    pub(super) fn new(
        working_dir: PathBuf,
        compiler: String,
        target: String,
        out_dir_name: String,
        source_dir_name: String,
        assets: Vec<String>,
    ) -> Self {
        Self {
            working_dir,
            compiler,
            target,
            out_dir_name,
            source_dir_name,
            assets,
        }
    }
}
