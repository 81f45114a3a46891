/// GroupMix CLI: command line frontend.
///
/// This crate contains argument parsing, path configuration, and pipeline
/// orchestration. Business logic lives in `groupmix-core`.
pub mod archive;
pub mod args;
pub mod config;
pub mod pipeline;

pub use args::{Cli, Commands};
pub use config::PipelineConfig;
pub use pipeline::{run_pipeline, RunSummary};

use anyhow::Result;
use groupmix_core::allocate::Strategy;
use groupmix_core::io;
use std::io::Write;

/// Execute one parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run {
            input,
            groups,
            out,
            no_archive,
        } => {
            let mut config = PipelineConfig::new(input, out, groups);
            if no_archive {
                config.archive_path = None;
            }
            let summary = run_pipeline(&config)?;
            println!("{summary}");
        }
        Commands::Split { input, out } => {
            let buckets = pipeline::split(&input, &out)?;
            println!(
                "Split {} students into {} branch files in {}",
                buckets.total(),
                buckets.len(),
                out.display()
            );
        }
        Commands::Allocate {
            strategy,
            branches,
            out,
            groups,
        } => {
            let strategy: Strategy = strategy.into();
            let out = out.unwrap_or_else(|| config::default_group_dir(strategy).into());
            let allocated = pipeline::allocate(&branches, &out, strategy, groups)?;
            for group in &allocated {
                println!("{}: {} students", group.name, group.len());
            }
        }
        Commands::Stats { dir, json } => {
            let table = pipeline::stats(&dir)?;
            let mut stdout = std::io::stdout().lock();
            if json {
                serde_json::to_writer_pretty(&mut stdout, &table)?;
                writeln!(stdout)?;
            } else {
                let mut rows = vec![table.header()];
                rows.extend(table.records());
                io::write_rows(&mut stdout, &rows)?;
            }
        }
        Commands::Report {
            mix,
            uniform,
            output,
            json,
        } => {
            let report = pipeline::report(&mix, &uniform, &output)?;
            if json {
                let mut stdout = std::io::stdout().lock();
                serde_json::to_writer_pretty(&mut stdout, &report)?;
                writeln!(stdout)?;
            } else {
                println!("Report written to {}", output.display());
            }
        }
    }
    Ok(())
}
