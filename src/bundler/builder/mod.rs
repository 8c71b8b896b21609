//! Bundle orchestration.
//!
//! - [`checksum`] - SHA256 checksums for files and directory trees
//! - [`orchestrator`] - the [`Bundler`] and its two steps
//! - [`tool_detection`] - resolving the compiler on `PATH`

mod checksum;
mod orchestrator;
mod tool_detection;

pub use checksum::calculate_sha256;
pub use orchestrator::Bundler;
pub use tool_detection::resolve_compiler;
