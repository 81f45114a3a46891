/// Data model for a grouping run.
///
/// Re-exports the student record, category buckets, groups, and the
/// capacity planner shared by both allocators.
pub mod bucket;
pub mod capacity;
pub mod group;
pub mod student;

pub use bucket::CategoryBuckets;
pub use capacity::group_capacities;
pub use group::{group_name, group_ordinal, is_group_name, Group};
pub use student::{Category, Student};
