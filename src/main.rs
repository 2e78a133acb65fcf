//! IoSleuth — categorises Chrome disk I/O captured by Process Monitor.
//!
//! Thin binary entry point. All logic lives in the `iosleuth-core`
//! and `iosleuth-cli` crates.

use clap::Parser;
use iosleuth_cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so the report on stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("IoSleuth starting");

    iosleuth_cli::run(&cli, std::io::stdout().lock())
}
