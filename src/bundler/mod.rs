//! Building and assembling the web bundle.
//!
//! A bundle is the output directory of the WebAssembly compiler plus the
//! static assets (`index.html`, `style.css`) copied next to it, ready to be
//! served as a static site.
//!
//! # Example
//!
//! ```no_run
//! use web_bundle::bundler::{Bundler, SettingsBuilder};
//!
//! # async fn example() -> web_bundle::bundler::Result<()> {
//! let output = Bundler::new(SettingsBuilder::new().build()?).bundle().await?;
//! println!("bundle ready in {}", output.out_dir.display());
//! # Ok(())
//! # }
//! ```

pub mod artifact;
pub mod builder;
pub mod compiler;
pub mod error;
pub mod settings;
pub mod utils;

pub use artifact::{ArtifactKind, BundleOutput, BundledArtifact};
pub use builder::Bundler;
pub use error::{Error, Result};
pub use settings::{Settings, SettingsBuilder};
