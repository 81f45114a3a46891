/// Student files: branch-wise splits and allocated groups.
///
/// Both use the same four columns, `Roll, Name, Email, Branch`, so the
/// branch code travels with every row and downstream stages never need to
/// re-derive it from the roll number.
use super::{csv_files, file_stem, prepare_output_dir, CSV_EXTENSION};
use crate::error::{GroupError, Result};
use crate::model::{is_group_name, Category, CategoryBuckets, Group, Student};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const STUDENT_COLUMNS: [&str; 4] = ["Roll", "Name", "Email", "Branch"];
const BRANCH_COLUMN: &str = "Branch";

/// File stem used for the bucket of rolls too short to carry any code.
pub const BLANK_BUCKET_STEM: &str = "_blank";

/// File stem for a branch bucket, e.g. `CS`.
///
/// Anything other than a letter, digit, `-` or `_` becomes `_`, so a code
/// such as `/Q`, `C:` or `..` can never name a path outside the folder.
/// The real code is kept in each row's `Branch` column.
pub fn bucket_file_stem(code: &str) -> String {
    if code.is_empty() {
        return BLANK_BUCKET_STEM.to_string();
    }
    code.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// File name for a branch bucket, e.g. `CS.csv`.
pub fn bucket_file_name(code: &str) -> String {
    format!("{}.{CSV_EXTENSION}", bucket_file_stem(code))
}

/// One file name per code, distinct even on case-insensitive filesystems.
///
/// A stem that matches an earlier one ignoring case gets a `-2`, `-3`, …
/// suffix. Codes arrive in sorted order, so the names are stable.
fn bucket_file_names<'a>(codes: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut taken = HashSet::new();
    codes
        .into_iter()
        .map(|code| {
            let stem = bucket_file_stem(code);
            let mut candidate = stem.clone();
            let mut n = 1;
            while !taken.insert(candidate.to_lowercase()) {
                n += 1;
                candidate = format!("{stem}-{n}");
            }
            format!("{candidate}.{CSV_EXTENSION}")
        })
        .collect()
}

/// Whether `path` starts with exactly the `Roll, Name, Email, Branch`
/// header this module writes.
fn has_student_header(path: &Path) -> bool {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_path(path)
        .and_then(|mut rdr| rdr.headers().map(|h| h.iter().eq(STUDENT_COLUMNS)))
        .unwrap_or(false)
}

/// A branch file from an earlier split: student header, not a group name.
fn is_bucket_file(path: &Path) -> bool {
    !is_group_name(&file_stem(path)) && has_student_header(path)
}

/// A group file from an earlier allocation: `g<N>.csv` with a student header.
fn is_group_file(path: &Path) -> bool {
    is_group_name(&file_stem(path)) && has_student_header(path)
}

/// Write students with a header row, even when `students` is empty.
pub fn write_students(path: &Path, students: &[Student]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| GroupError::csv(path, e))?;
    wtr.write_record(STUDENT_COLUMNS)
        .map_err(|e| GroupError::csv(path, e))?;
    for student in students {
        wtr.serialize(student).map_err(|e| GroupError::csv(path, e))?;
    }
    wtr.flush().map_err(|e| GroupError::io(path, e))?;
    Ok(())
}

/// Read a student file. Returns the students and whether the file carried
/// a `Branch` column.
pub fn read_students(path: &Path) -> Result<(Vec<Student>, bool)> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_path(path)
        .map_err(|e| GroupError::csv(path, e))?;

    let headers = rdr.headers().map_err(|e| GroupError::csv(path, e))?;
    if !headers.iter().any(|h| h == "Roll") {
        return Err(GroupError::Schema { column: "Roll" });
    }
    let has_branch = headers.iter().any(|h| h == BRANCH_COLUMN);

    let mut students = Vec::new();
    for row in rdr.deserialize::<Student>() {
        students.push(row.map_err(|e| GroupError::csv(path, e))?);
    }
    Ok((students, has_branch))
}

/// Write one `<code>.csv` per branch into `dir`.
///
/// Branch files from an earlier split are replaced; other CSV files in
/// `dir` are left untouched.
pub fn write_bucket_dir(dir: &Path, buckets: &CategoryBuckets) -> Result<Vec<PathBuf>> {
    prepare_output_dir(dir, is_bucket_file)?;
    let names = bucket_file_names(buckets.codes().map(|code| code.as_str()));
    let mut written = Vec::with_capacity(buckets.len());
    for ((_, students), name) in buckets.iter().zip(names) {
        let path = dir.join(name);
        write_students(&path, students)?;
        debug!(path = %path.display(), students = students.len(), "Saved branch file");
        written.push(path);
    }
    info!(dir = %dir.display(), files = written.len(), "Wrote branch-wise split");
    Ok(written)
}

/// Load every branch file in `dir` back into buckets.
///
/// Rows are keyed by their `Branch` column; files written without one are
/// keyed by file stem instead. No files at all is
/// [`GroupError::EmptySource`].
pub fn read_bucket_dir(dir: &Path) -> Result<CategoryBuckets> {
    let files = csv_files(dir)?;
    if files.is_empty() {
        return Err(GroupError::EmptySource {
            origin: dir.display().to_string(),
        });
    }

    let mut buckets = CategoryBuckets::new();
    for path in &files {
        let (students, has_branch) = read_students(path)?;
        let fallback: Category = file_stem(path).into();
        if !has_branch {
            warn!(path = %path.display(), branch = %fallback, "No Branch column; using file name");
        }
        for mut student in students {
            if !has_branch {
                student.category = fallback.clone();
            }
            buckets.push(student);
        }
    }
    info!(
        dir = %dir.display(),
        students = buckets.total(),
        branches = buckets.len(),
        "Loaded branch files"
    );
    Ok(buckets)
}

/// Write `g<i>.csv` for every group, including empty ones.
///
/// Only `g<N>.csv` files from an earlier allocation are removed first.
pub fn write_group_dir(dir: &Path, groups: &[Group]) -> Result<Vec<PathBuf>> {
    prepare_output_dir(dir, is_group_file)?;
    let mut written = Vec::with_capacity(groups.len());
    for group in groups {
        let path = dir.join(format!("{}.csv", group.name));
        write_students(&path, &group.members)?;
        debug!(path = %path.display(), total = group.len(), "Saved group file");
        written.push(path);
    }
    info!(dir = %dir.display(), groups = written.len(), "Wrote group files");
    Ok(written)
}

/// Load every group file in `dir`, named by file stem.
///
/// Group files must carry a `Branch` column; rows are counted by it.
pub fn read_group_dir(dir: &Path) -> Result<Vec<Group>> {
    let files = csv_files(dir)?;
    if files.is_empty() {
        return Err(GroupError::EmptySource {
            origin: dir.display().to_string(),
        });
    }

    let mut groups = Vec::with_capacity(files.len());
    for path in &files {
        let (members, has_branch) = read_students(path)?;
        if !has_branch {
            return Err(GroupError::Schema {
                column: BRANCH_COLUMN,
            });
        }
        groups.push(Group {
            name: file_stem(path),
            members,
        });
    }
    Ok(groups)
}
