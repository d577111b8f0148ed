//! glyphcheck CLI binary entry point
//!
//! Installs logging and calls the library's `run_cli()` function.
//!
//! ```bash
//! # With debug logging
//! RUST_LOG=debug glyphcheck test
//! ```

use anyhow::Result;
use glyphcheck_cli::run_cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    run_cli()
}
