//! web_bundle - builds the WebAssembly module and assembles the static bundle.
//!
//! Runs the compiler, copies the static assets into its output directory,
//! and exits with the status of the first failing step.

use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Quiet by default; RUST_LOG=info shows the steps.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let exit_code = match web_bundle::cli::run().await {
        Ok(code) => code,
        Err(e) => {
            if e.should_report() {
                eprintln!("Error: {}", e);
            }
            e.exit_code()
        }
    };

    process::exit(exit_code);
}
