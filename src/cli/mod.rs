//! Command line interface for the web bundler.

mod args;

pub use args::Args;

use crate::bundler::{Bundler, SettingsBuilder};
use crate::error::Result;

/// Main CLI entry point
///
/// Bundles the project in the current directory with the fixed layout.
/// Returns the exit code for a successful run.
pub async fn run() -> Result<i32> {
    let _args = Args::parse_args();

    if let Ok(cwd) = std::env::current_dir() {
        log::debug!("Bundling project in {}", cwd.display());
    }

    let settings = SettingsBuilder::new().build()?;
    Bundler::new(settings).bundle().await?;

    Ok(0)
}
