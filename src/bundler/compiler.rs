//! WebAssembly module compilation.
//!
//! Runs the external compiler (`wasm-pack` by default) to build the module
//! and its JavaScript glue into the output directory.

use crate::bundler::{Error, Result, Settings};
use std::path::Path;

/// Arguments passed to the compiler for the given settings.
///
/// For the defaults this is `build --target web --out-dir dist`.
pub fn compiler_args(settings: &Settings) -> Vec<String> {
    vec![
        "build".to_string(),
        "--target".to_string(),
        settings.target().to_string(),
        "--out-dir".to_string(),
        settings.out_dir_name().to_string(),
    ]
}

/// Runs the compiler and waits for it to exit.
///
/// Standard streams are inherited so the compiler's own progress and
/// diagnostics reach the user untouched. Returns once the process has
/// terminated; a non-zero exit becomes [`Error::CompilerFailed`] carrying
/// the original status.
pub async fn run_compiler(compiler: &Path, settings: &Settings) -> Result<()> {
    let args = compiler_args(settings);
    log::info!("Running {} {}...", settings.compiler(), args.join(" "));

    let status = tokio::process::Command::new(compiler)
        .args(&args)
        .current_dir(settings.working_dir())
        .status()
        .await
        .map_err(|error| Error::CommandFailed {
            command: settings.compiler().to_string(),
            error,
        })?;

    if !status.success() {
        log::debug!("{} exited with {}", settings.compiler(), status);
        return Err(Error::CompilerFailed {
            command: settings.compiler().to_string(),
            status,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::SettingsBuilder;

    #[test]
    fn default_arguments_target_the_browser() {
        let settings = SettingsBuilder::new().build().unwrap();
        assert_eq!(
            compiler_args(&settings),
            ["build", "--target", "web", "--out-dir", "dist"]
        );
    }

    #[test]
    fn arguments_follow_settings() {
        let settings = SettingsBuilder::new()
            .target("bundler")
            .out_dir_name("pkg")
            .build()
            .unwrap();
        assert_eq!(
            compiler_args(&settings),
            ["build", "--target", "bundler", "--out-dir", "pkg"]
        );
    }
}
