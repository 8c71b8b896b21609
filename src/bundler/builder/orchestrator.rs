//! Main bundler orchestration.
//!
//! This module provides the [`Bundler`] that builds the module and then
//! assembles the static assets next to it.

use crate::bundler::{
    BundleOutput, Result, Settings,
    artifact::discover_artifacts,
    compiler::run_compiler,
    utils::fs::copy_file,
};

use super::tool_detection::resolve_compiler;

/// Main bundler orchestrator.
///
/// A run has two strictly ordered steps:
///
/// 1. run the compiler, which writes the module and its glue code into the
///    output directory;
/// 2. copy each static asset from the source directory into the output
///    directory, overwriting what is there.
///
/// The first failure ends the run. Nothing is rolled back: a failed copy
/// leaves the compiler output in place.
///
/// # Examples
///
/// ```no_run
/// use web_bundle::bundler::{Bundler, SettingsBuilder};
///
/// # async fn example() -> web_bundle::bundler::Result<()> {
/// let bundler = Bundler::new(SettingsBuilder::new().build()?);
/// let output = bundler.bundle().await?;
///
/// for artifact in &output.artifacts {
///     println!("{} {} ({} bytes)", artifact.kind, artifact.path.display(), artifact.size);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Bundler {
    settings: Settings,
}

impl Bundler {
    /// Creates a new bundler with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Runs both steps and describes the resulting output directory.
    ///
    /// Only the two steps can fail; the artifact listing is best effort.
    pub async fn bundle(&self) -> Result<BundleOutput> {
        self.compile().await?;
        self.copy_assets().await?;

        let artifacts = discover_artifacts(&self.settings).await;
        log::info!(
            "Bundled {} files into {}",
            artifacts.len(),
            self.settings.out_dir().display()
        );

        Ok(BundleOutput {
            out_dir: self.settings.out_dir(),
            artifacts,
        })
    }

    /// Step 1: builds the module into the output directory.
    pub async fn compile(&self) -> Result<()> {
        let compiler = resolve_compiler(self.settings.compiler(), self.settings.working_dir())?;
        run_compiler(&compiler, &self.settings).await
    }

    /// Step 2: copies the static assets, in order, stopping at the first failure.
    pub async fn copy_assets(&self) -> Result<()> {
        for (from, to) in self.settings.asset_copies() {
            log::info!("Copying {} -> {}", from.display(), to.display());
            copy_file(&from, &to).await?;
        }
        Ok(())
    }
}
