/// Group allocation: distributes bucketed students into `N` groups.
///
/// Two strategies share the same capacity plan (see
/// [`group_capacities`](crate::model::group_capacities)) and differ only in
/// how they draw students from the buckets:
///
/// - [`Strategy::Mixed`]: round-robin across branches, so every group is a
///   blend of all branches.
/// - [`Strategy::Uniform`]: contiguous blocks, largest branch first, so
///   groups are dominated by one or two branches.
pub mod mixed;
pub mod uniform;

pub use mixed::allocate_mixed;
pub use uniform::allocate_uniform;

use crate::error::{GroupError, Result};
use crate::model::{group_capacities, CategoryBuckets, Group};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Strategy {
    Mixed,
    Uniform,
}

impl Strategy {
    /// Label used as the section header in the comparison report.
    pub fn label(self) -> &'static str {
        match self {
            Self::Mixed => "Mix",
            Self::Uniform => "Uniform",
        }
    }

    pub fn allocate(self, buckets: &CategoryBuckets, num_groups: usize) -> Result<Vec<Group>> {
        match self {
            Self::Mixed => allocate_mixed(buckets, num_groups),
            Self::Uniform => allocate_uniform(buckets, num_groups),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validate inputs shared by both allocators and return the capacity plan.
///
/// Order matters: a bad group count is reported before an empty source.
fn plan(buckets: &CategoryBuckets, num_groups: usize) -> Result<Vec<usize>> {
    if num_groups == 0 {
        return Err(GroupError::Config {
            requested: num_groups,
        });
    }
    if buckets.is_empty() {
        return Err(GroupError::EmptySource {
            origin: "category buckets".into(),
        });
    }
    group_capacities(buckets.total(), num_groups)
}
