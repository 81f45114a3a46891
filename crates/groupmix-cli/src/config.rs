/// Pipeline configuration: every path the run reads or writes.
///
/// There is no config file; the CLI fills this from flags and the
/// defaults below, which match the folder layout users already expect.
use groupmix_core::allocate::Strategy;
use std::path::{Path, PathBuf};

pub const DEFAULT_GROUPS: usize = 3;
pub const DEFAULT_BRANCH_DIR: &str = "full_branch_wise";
pub const DEFAULT_MIX_DIR: &str = "group_branch_wise_mix";
pub const DEFAULT_UNIFORM_DIR: &str = "group_uniform_mix";
pub const DEFAULT_REPORT_FILE: &str = "output.csv";
pub const DEFAULT_ARCHIVE_FILE: &str = "student_groups.zip";
pub const MIX_STATS_FILE: &str = "mix_stats.csv";
pub const UNIFORM_STATS_FILE: &str = "uniform_stats.csv";

/// Default output folder for a strategy's group files.
pub fn default_group_dir(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::Mixed => DEFAULT_MIX_DIR,
        Strategy::Uniform => DEFAULT_UNIFORM_DIR,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Roster CSV.
    pub input: PathBuf,
    pub num_groups: usize,
    /// Root that every output below lives under.
    pub out_dir: PathBuf,
    pub branch_dir: PathBuf,
    pub mix_dir: PathBuf,
    pub uniform_dir: PathBuf,
    pub mix_stats_path: PathBuf,
    pub uniform_stats_path: PathBuf,
    pub report_path: PathBuf,
    /// `None` skips packaging.
    pub archive_path: Option<PathBuf>,
}

impl PipelineConfig {
    /// Default layout rooted at `out_dir`.
    pub fn new(input: impl Into<PathBuf>, out_dir: impl Into<PathBuf>, num_groups: usize) -> Self {
        let out_dir = out_dir.into();
        let under = |name: &str| out_dir.join(name);
        Self {
            input: input.into(),
            num_groups,
            branch_dir: under(DEFAULT_BRANCH_DIR),
            mix_dir: under(DEFAULT_MIX_DIR),
            uniform_dir: under(DEFAULT_UNIFORM_DIR),
            mix_stats_path: under(MIX_STATS_FILE),
            uniform_stats_path: under(UNIFORM_STATS_FILE),
            report_path: under(DEFAULT_REPORT_FILE),
            archive_path: Some(under(DEFAULT_ARCHIVE_FILE)),
            out_dir,
        }
    }

    pub fn group_dir(&self, strategy: Strategy) -> &Path {
        match strategy {
            Strategy::Mixed => &self.mix_dir,
            Strategy::Uniform => &self.uniform_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_rooted_at_out_dir() {
        let cfg = PipelineConfig::new("students.csv", "/tmp/run", 4);
        assert_eq!(cfg.num_groups, 4);
        assert_eq!(cfg.branch_dir, Path::new("/tmp/run/full_branch_wise"));
        assert_eq!(cfg.group_dir(Strategy::Mixed), Path::new("/tmp/run/group_branch_wise_mix"));
        assert_eq!(cfg.group_dir(Strategy::Uniform), Path::new("/tmp/run/group_uniform_mix"));
        assert_eq!(cfg.report_path, Path::new("/tmp/run/output.csv"));
        assert_eq!(
            cfg.archive_path.as_deref(),
            Some(Path::new("/tmp/run/student_groups.zip"))
        );
    }
}
