//! Command line argument parsing.
//!
//! The tool takes no options; clap still provides `--help` and `--version`
//! and rejects anything else.

use clap::Parser;

/// Builds the WebAssembly module and assembles the static bundle
#[derive(Parser, Debug)]
#[command(
    name = "web_bundle",
    version,
    about = "Builds the WebAssembly module and assembles the static bundle",
    long_about = "Runs `wasm-pack build --target web --out-dir dist` in the current directory,
then copies src/index.html and src/style.css into dist/.

The resulting dist/ directory can be served as a static website.

Exit code 0 = dist/ holds the module, its glue code and both assets.
On compiler failure the compiler's own exit code is returned and nothing is copied."
)]
pub struct Args {}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
