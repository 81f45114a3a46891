//! GroupMix: balanced student grouping by branch.
//!
//! Thin binary entry point. All logic lives in the `groupmix-core`
//! and `groupmix-cli` crates.

use clap::Parser;
use groupmix_cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialise structured logging on stderr so stdout stays clean for
    // `stats` / `report --json` output.
    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .init();

    tracing::info!("GroupMix starting");

    groupmix_cli::run(cli)
}
