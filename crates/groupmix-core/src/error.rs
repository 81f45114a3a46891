/// Error type shared by every stage of the grouping pipeline.
///
/// All failures are deterministic: re-running with the same input fails the
/// same way, so callers surface them rather than retry.
use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the core crate.
pub type Result<T> = std::result::Result<T, GroupError>;

#[derive(Debug, Error)]
pub enum GroupError {
    /// A required input column is missing.
    #[error("input is missing required column '{column}'")]
    Schema { column: &'static str },

    /// The requested number of groups is unusable.
    #[error("number of groups must be at least 1 (got {requested})")]
    Config { requested: usize },

    /// There is nothing to allocate.
    #[error("no student data found in {origin}")]
    EmptySource { origin: String },

    /// The uniform allocator ran past its last group. Only reachable when the
    /// capacity plan and the bucket totals disagree.
    #[error("group capacity exhausted: {remaining} student(s) left after filling {groups} group(s)")]
    Overflow { remaining: usize, groups: usize },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl GroupError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }
}
