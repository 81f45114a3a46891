/// CSV persistence for every pipeline stage.
///
/// The core algorithms never touch the filesystem; these helpers read the
/// roster and write (and re-read) the intermediate branch files, the group
/// files, and the final tables.
pub mod roster;
pub mod students;
pub mod tables;

pub use roster::{read_roster, read_roster_from};
pub use students::{
    bucket_file_name, bucket_file_stem, read_bucket_dir, read_group_dir, read_students,
    write_bucket_dir, write_group_dir, write_students,
};
pub use tables::{write_report, write_rows, write_stats, write_table};

use crate::error::{GroupError, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const CSV_EXTENSION: &str = "csv";

/// Every `*.csv` file directly inside `dir`, sorted by file name.
pub fn csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| GroupError::io(dir, e))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| GroupError::io(dir, e))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == CSV_EXTENSION) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Create `dir` if needed and remove the `*.csv` files a previous run left
/// there, so a rerun with fewer groups does not leave stale `g<N>.csv`
/// files behind.
///
/// Only files for which `owned` returns true are removed; anything else in
/// the folder (an input roster, another stage's files) is left alone.
pub fn prepare_output_dir(dir: &Path, owned: impl Fn(&Path) -> bool) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| GroupError::io(dir, e))?;
    for stale in csv_files(dir)? {
        if !owned(&stale) {
            tracing::debug!(path = %stale.display(), "Keeping file not written by this stage");
            continue;
        }
        tracing::debug!(path = %stale.display(), "Removing stale output");
        fs::remove_file(&stale).map_err(|e| GroupError::io(&stale, e))?;
    }
    Ok(())
}

/// File stem as a string; lossy for non-UTF-8 names.
pub(crate) fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
