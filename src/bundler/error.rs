//! Error types for bundling operations.

use std::{
    fmt::Display,
    io,
    path::PathBuf,
    process::ExitStatus,
};
use thiserror::Error;

/// Result type for bundler operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while building and assembling the bundle.
#[derive(Debug, Error)]
pub enum Error {
    /// The compiler ran and exited unsuccessfully.
    #[error("{command} failed with {status}")]
    CompilerFailed {
        /// Program that was run
        command: String,
        /// Exit status reported by the process
        status: ExitStatus,
    },

    /// The compiler could not be found on `PATH`.
    #[error("{program} not found: {source}")]
    CompilerNotFound {
        /// Program that was looked up
        program: String,
        /// Lookup failure
        #[source]
        source: which::Error,
    },

    /// A file with the compiler's name exists but is not executable.
    #[error("{}: Permission denied", path.display())]
    CompilerNotExecutable {
        /// File that was found
        path: PathBuf,
    },

    /// The compiler was found but could not be started.
    #[error("failed to run {command}: {error}")]
    CommandFailed {
        /// Program that was run
        command: String,
        /// Spawn failure
        error: io::Error,
    },

    /// A static asset could not be copied into the output directory.
    #[error("cannot copy '{}' to '{}': {source}", from.display(), to.display())]
    AssetCopy {
        /// Source file
        from: PathBuf,
        /// Destination file
        to: PathBuf,
        /// Underlying failure
        #[source]
        source: io::Error,
    },

    /// Filesystem error with the operation and path that caused it.
    #[error("{context} {}: {error}", path.display())]
    Fs {
        /// What was being done
        context: &'static str,
        /// Path involved
        path: PathBuf,
        /// Underlying failure
        error: io::Error,
    },

    /// Directory traversal error.
    #[error(transparent)]
    WalkDir(#[from] walkdir::Error),

    /// Anything else.
    #[error("{0}")]
    GenericError(String),
}

/// Attaches filesystem context to I/O results.
pub trait ErrorExt<T> {
    /// Wraps the error with a description of the operation and the path.
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.into(),
            error,
        })
    }
}

/// Turns an `Option` into a [`Result`] with a message.
pub trait Context<T> {
    /// Returns `Err(Error::GenericError(msg))` on `None`.
    fn context<C: Display>(self, msg: C) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context<C: Display>(self, msg: C) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(msg.to_string()))
    }
}

/// Returns early with a [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::bundler::Error::GenericError(format!($($arg)*)))
    };
}

impl Error {
    /// Process exit status a shell would report for this failure.
    ///
    /// A failed compiler hands its own status through unchanged. A compiler
    /// killed by a signal maps to `128 + signal`, a missing compiler to 127
    /// and one that cannot be executed to 126. Everything else is 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::CompilerFailed { status, .. } => status_code(status),
            Error::CompilerNotFound { .. } => 127,
            Error::CompilerNotExecutable { .. } => 126,
            Error::CommandFailed { error, .. } => match error.kind() {
                io::ErrorKind::NotFound => 127,
                io::ErrorKind::PermissionDenied => 126,
                _ => 1,
            },
            _ => 1,
        }
    }

    /// Whether the failing tool already reported this error to the user.
    pub fn is_reported(&self) -> bool {
        matches!(self, Error::CompilerFailed { .. })
    }
}

fn status_code(status: &ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        // A zero status never reaches here, but keep failure non-zero regardless.
        return if code == 0 { 1 } else { code };
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
