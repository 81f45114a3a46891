/// GroupMix Core: category extraction, group allocation, and statistics.
///
/// This crate contains all business logic with zero CLI dependencies.
/// It is designed to be reusable across different frontends (CLI, GUI, service).
///
/// # Modules
///
/// - [`model`]: Students, category buckets, groups, and capacity planning.
/// - [`extract`]: Derives branch codes from roll numbers and buckets students.
/// - [`allocate`]: Mixed (round-robin) and Uniform (contiguous block) allocators.
/// - [`stats`]: Per-group, per-branch count matrices.
/// - [`report`]: Side-by-side Mix/Uniform comparison sheet.
/// - [`io`]: CSV persistence for rosters, buckets, groups, and reports.
pub mod allocate;
pub mod error;
pub mod extract;
pub mod io;
pub mod model;
pub mod report;
pub mod stats;

pub use error::{GroupError, Result};
