//! Configuration for a bundle run.
//!
//! The layout is fixed; these types exist so the values live in one place
//! and library callers can point the bundler somewhere else.

mod builder;
mod core;

pub use builder::SettingsBuilder;
pub use self::core::{
    DEFAULT_ASSETS, DEFAULT_COMPILER, DEFAULT_OUT_DIR, DEFAULT_SOURCE_DIR, DEFAULT_TARGET, Settings,
};
