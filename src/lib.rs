//! Web bundle builder library
//!
//! Builds a browser-targeted WebAssembly module with `wasm-pack` and
//! copies the static HTML entry point and stylesheet next to it, producing
//! a directory that can be served as a static website.
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;

// Re-export commonly used types
pub use error::{BundlerError, Result};
