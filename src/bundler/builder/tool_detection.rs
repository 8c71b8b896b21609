//! External tool detection.
//!
//! Resolves the compiler program to an absolute executable path before it
//! is run, so a missing toolchain is reported as such instead of as a spawn
//! error.

use crate::bundler::{Error, Result, error::ErrorExt};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Resolves `program` to an absolute executable path.
///
/// Names without a path separator are looked up on `PATH`. Anything else is
/// resolved relative to `working_dir`, matching how the shell would run it
/// from there. When no executable matches but a non-executable file does,
/// the error is [`Error::CompilerNotExecutable`], as a shell would report.
pub fn resolve_compiler(program: &str, working_dir: &Path) -> Result<PathBuf> {
    let has_separator = Path::new(program).components().count() > 1;
    let resolved = if has_separator {
        which::which_in(program, None::<&str>, working_dir)
    } else {
        which::which(program)
    };

    match resolved {
        Ok(path) => {
            let path = path
                .absolutize()
                .fs_context("resolving compiler path", &path)?
                .into_owned();
            log::debug!("Found {} at: {}", program, path.display());
            Ok(path)
        }
        Err(source) => {
            log::debug!("{} not found: {}", program, source);
            match non_executable_candidate(program, has_separator, working_dir) {
                Some(path) => Err(Error::CompilerNotExecutable { path }),
                None => Err(Error::CompilerNotFound {
                    program: program.to_string(),
                    source,
                }),
            }
        }
    }
}

/// First regular file `program` would name, executable or not.
fn non_executable_candidate(
    program: &str,
    has_separator: bool,
    working_dir: &Path,
) -> Option<PathBuf> {
    if has_separator {
        let candidate = working_dir.join(program);
        return candidate.is_file().then_some(candidate);
    }

    let paths = std::env::var_os("PATH")?;
    std::env::split_paths(&paths)
        .map(|dir| dir.join(program))
        .find(|candidate| candidate.is_file())
}
