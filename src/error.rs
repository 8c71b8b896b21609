//! Top-level error types for the command-line tool.
//!
//! Every error maps to the process exit status the tool finishes with.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, BundlerError>;

/// Error type of the command-line tool
#[derive(Error, Debug)]
pub enum BundlerError {
    /// Bundler errors
    #[error("{0}")]
    Bundler(#[from] crate::bundler::Error),
}

impl BundlerError {
    /// Exit status for this error.
    ///
    /// Bundler errors carry their own: the compiler's status, 126/127 for a
    /// compiler that cannot be run, 1 for copy failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            BundlerError::Bundler(e) => e.exit_code(),
        }
    }

    /// Whether the message should be printed.
    ///
    /// A failing compiler has already written its diagnostics to the
    /// inherited stderr, so nothing is added on top.
    pub fn should_report(&self) -> bool {
        !matches!(self, BundlerError::Bundler(e) if e.is_reported())
    }
}
