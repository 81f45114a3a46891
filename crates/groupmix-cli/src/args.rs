/// Command line definition.
use crate::config::{
    DEFAULT_BRANCH_DIR, DEFAULT_GROUPS, DEFAULT_MIX_DIR, DEFAULT_REPORT_FILE,
    DEFAULT_UNIFORM_DIR,
};
use clap::{Parser, Subcommand, ValueEnum};
use groupmix_core::allocate::Strategy;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "groupmix")]
#[command(version, about = "Split a student roster into balanced groups by branch", long_about = None)]
pub struct Cli {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the whole pipeline: split, allocate both ways, stats, report, archive
    Run {
        /// Roster CSV with a Roll column (Name and Email optional)
        #[arg(short, long)]
        input: PathBuf,

        /// Number of groups to form
        #[arg(short = 'n', long, env = "GROUPMIX_GROUPS", default_value_t = DEFAULT_GROUPS)]
        groups: usize,

        /// Directory that receives every output folder and file
        #[arg(short, long, env = "GROUPMIX_OUT", default_value = ".")]
        out: PathBuf,

        /// Skip writing the zip archive of group files
        #[arg(long)]
        no_archive: bool,
    },

    /// Split a roster into one CSV per branch
    Split {
        /// Roster CSV with a Roll column
        #[arg(short, long)]
        input: PathBuf,

        /// Output folder for branch files
        #[arg(short, long, default_value = DEFAULT_BRANCH_DIR)]
        out: PathBuf,
    },

    /// Allocate branch files into groups with one strategy
    Allocate {
        /// Allocation strategy
        #[arg(short, long, value_enum)]
        strategy: StrategyArg,

        /// Folder of branch CSVs produced by `split`
        #[arg(short, long, default_value = DEFAULT_BRANCH_DIR)]
        branches: PathBuf,

        /// Output folder for group files (default depends on strategy)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Number of groups to form
        #[arg(short = 'n', long, env = "GROUPMIX_GROUPS", default_value_t = DEFAULT_GROUPS)]
        groups: usize,
    },

    /// Print per-branch counts for a folder of group files
    Stats {
        /// Folder of group CSVs
        dir: PathBuf,

        /// Print JSON instead of CSV
        #[arg(long)]
        json: bool,
    },

    /// Compose the Mix vs Uniform comparison report
    Report {
        /// Folder of mixed group CSVs
        #[arg(long, default_value = DEFAULT_MIX_DIR)]
        mix: PathBuf,

        /// Folder of uniform group CSVs
        #[arg(long, default_value = DEFAULT_UNIFORM_DIR)]
        uniform: PathBuf,

        /// Report file to write
        #[arg(short, long, default_value = DEFAULT_REPORT_FILE)]
        output: PathBuf,

        /// Also print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrategyArg {
    /// Round-robin across branches
    Mix,
    /// Contiguous blocks, largest branch first
    Uniform,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Mix => Strategy::Mixed,
            StrategyArg::Uniform => Strategy::Uniform,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn run_defaults() {
        let cli = Cli::try_parse_from(["groupmix", "run", "-i", "students.csv"]).unwrap();
        match cli.command {
            Commands::Run {
                input,
                groups,
                out,
                no_archive,
            } => {
                assert_eq!(input, PathBuf::from("students.csv"));
                assert_eq!(groups, DEFAULT_GROUPS);
                assert_eq!(out, PathBuf::from("."));
                assert!(!no_archive);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn allocate_parses_strategy() {
        let cli = Cli::try_parse_from(["groupmix", "allocate", "-s", "uniform", "-n", "5"]).unwrap();
        match cli.command {
            Commands::Allocate {
                strategy, groups, ..
            } => {
                assert_eq!(Strategy::from(strategy), Strategy::Uniform);
                assert_eq!(groups, 5);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn negative_group_count_is_rejected() {
        assert!(Cli::try_parse_from(["groupmix", "run", "-i", "x.csv", "-n", "-2"]).is_err());
    }
}
