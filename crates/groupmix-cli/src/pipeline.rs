/// Pipeline orchestration.
///
/// `run_pipeline` computes every stage in memory first, so a bad roster or
/// group count writes nothing. A filesystem error during the write phase
/// can still leave the folders written so far.
/// The single-stage helpers back the `split`, `allocate`, `stats` and
/// `report` subcommands and read/write the same on-disk layout.
use crate::archive::bundle_archive;
use crate::config::PipelineConfig;
use anyhow::{ensure, Context, Result};
use groupmix_core::allocate::Strategy;
use groupmix_core::extract::extract_categories;
use groupmix_core::io;
use groupmix_core::model::{CategoryBuckets, Group};
use groupmix_core::report::{compose, Report};
use groupmix_core::stats::StatsTable;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::info;

/// What a full run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub students: usize,
    pub branches: usize,
    pub mix_sizes: Vec<usize>,
    pub uniform_sizes: Vec<usize>,
    pub report_path: PathBuf,
    pub archive_path: Option<PathBuf>,
    pub duration: Duration,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Grouped {} students from {} branches into {} groups in {:.2?}",
            self.students,
            self.branches,
            self.mix_sizes.len(),
            self.duration
        )?;
        writeln!(f, "  Mix sizes:     {:?}", self.mix_sizes)?;
        writeln!(f, "  Uniform sizes: {:?}", self.uniform_sizes)?;
        write!(f, "  Report:        {}", self.report_path.display())?;
        if let Some(archive) = &self.archive_path {
            write!(f, "\n  Archive:       {}", archive.display())?;
        }
        Ok(())
    }
}

/// Run every stage for `config`, writing outputs only after all succeed.
pub fn run_pipeline(config: &PipelineConfig) -> Result<RunSummary> {
    let started = Instant::now();
    info!(
        input = %config.input.display(),
        groups = config.num_groups,
        out = %config.out_dir.display(),
        "Starting pipeline"
    );

    // ── Compute ──────────────────────────────────────────────────────────
    let roster = io::read_roster(&config.input)
        .with_context(|| format!("failed to read roster {}", config.input.display()))?;
    let buckets = extract_categories(&roster)?;
    let mix = Strategy::Mixed.allocate(&buckets, config.num_groups)?;
    let uniform = Strategy::Uniform.allocate(&buckets, config.num_groups)?;
    let mix_stats = StatsTable::from_groups(&mix)?;
    let uniform_stats = StatsTable::from_groups(&uniform)?;
    let report = compose(&mix_stats, &uniform_stats);

    // ── Write ────────────────────────────────────────────────────────────
    io::write_bucket_dir(&config.branch_dir, &buckets)?;
    io::write_group_dir(&config.mix_dir, &mix)?;
    io::write_group_dir(&config.uniform_dir, &uniform)?;
    io::write_stats(&config.mix_stats_path, &mix_stats)?;
    io::write_stats(&config.uniform_stats_path, &uniform_stats)?;
    io::write_report(&config.report_path, &report)?;

    if let Some(archive_path) = &config.archive_path {
        bundle_archive(
            archive_path,
            &config.out_dir,
            &[
                config.branch_dir.as_path(),
                config.mix_dir.as_path(),
                config.uniform_dir.as_path(),
            ],
        )?;
    }

    let summary = RunSummary {
        students: buckets.total(),
        branches: buckets.len(),
        mix_sizes: mix.iter().map(Group::len).collect(),
        uniform_sizes: uniform.iter().map(Group::len).collect(),
        report_path: config.report_path.clone(),
        archive_path: config.archive_path.clone(),
        duration: started.elapsed(),
    };
    info!(
        students = summary.students,
        duration_ms = summary.duration.as_millis() as u64,
        "Pipeline completed"
    );
    Ok(summary)
}

/// Split a roster into one CSV per branch.
pub fn split(input: &Path, out_dir: &Path) -> Result<CategoryBuckets> {
    let roster = io::read_roster(input)
        .with_context(|| format!("failed to read roster {}", input.display()))?;
    let buckets = extract_categories(&roster)?;
    io::write_bucket_dir(out_dir, &buckets)?;
    Ok(buckets)
}

/// Allocate the students of a branch folder into a separate group folder.
pub fn allocate(
    branch_dir: &Path,
    out_dir: &Path,
    strategy: Strategy,
    num_groups: usize,
) -> Result<Vec<Group>> {
    ensure!(
        !same_dir(branch_dir, out_dir),
        "group folder {} must differ from the branch folder",
        out_dir.display()
    );
    let buckets = io::read_bucket_dir(branch_dir)
        .with_context(|| format!("failed to load branch files from {}", branch_dir.display()))?;
    let groups = strategy.allocate(&buckets, num_groups)?;
    io::write_group_dir(out_dir, &groups)?;
    info!(strategy = %strategy, groups = groups.len(), "Allocation saved");
    Ok(groups)
}

/// Load a group folder and count its branches.
pub fn stats(group_dir: &Path) -> Result<StatsTable> {
    let groups = io::read_group_dir(group_dir)
        .with_context(|| format!("failed to load groups from {}", group_dir.display()))?;
    Ok(StatsTable::from_groups(&groups)?)
}

/// Compare the Mix and Uniform group folders and write the report.
pub fn report(mix_dir: &Path, uniform_dir: &Path, output: &Path) -> Result<Report> {
    let mix = stats(mix_dir)?;
    let uniform = stats(uniform_dir)?;
    let report = compose(&mix, &uniform);
    io::write_report(output, &report)?;
    Ok(report)
}

/// Both paths name the same directory, resolving symlinks and `..` when
/// they exist.
fn same_dir(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
