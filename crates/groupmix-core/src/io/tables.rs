/// Writers for the statistics table and the comparison report.
use crate::error::{GroupError, Result};
use crate::report::Report;
use crate::stats::StatsTable;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Write raw string rows to a file with no implicit header, creating the
/// parent directory if needed.
pub fn write_table(path: &Path, rows: &[Vec<String>]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| GroupError::io(parent, e))?;
    }
    let file = fs::File::create(path).map_err(|e| GroupError::io(path, e))?;
    write_rows(file, rows).map_err(|e| match e {
        GroupError::Csv { source, .. } => GroupError::csv(path, source),
        GroupError::Io { source, .. } => GroupError::io(path, source),
        other => other,
    })
}

/// Write raw string rows to any writer (stdout for the CLI).
pub fn write_rows<W: Write>(writer: W, rows: &[Vec<String>]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    for row in rows {
        wtr.write_record(row)
            .map_err(|e| GroupError::csv("<output>", e))?;
    }
    wtr.flush().map_err(|e| GroupError::io("<output>", e))?;
    Ok(())
}

/// `Group, <branches…>, Total` followed by one row per group.
pub fn write_stats(path: &Path, table: &StatsTable) -> Result<()> {
    let mut rows = Vec::with_capacity(table.rows.len() + 1);
    rows.push(table.header());
    rows.extend(table.records());
    write_table(path, &rows)?;
    info!(path = %path.display(), groups = table.rows.len(), "Saved stats table");
    Ok(())
}

/// The composed Mix/Uniform sheet. Section labels sit in the first column;
/// there is no outer header row.
pub fn write_report(path: &Path, report: &Report) -> Result<()> {
    write_table(path, &report.sheet())?;
    info!(path = %path.display(), "Saved comparison report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Group, Student};
    use crate::report::compose;
    use tempfile::TempDir;

    fn table() -> StatsTable {
        let mut g = Group::new("g1");
        g.members.push(Student::new("2101CS01", "A", "a@x"));
        g.members.push(Student::new("2101ME01", "B", "b@x"));
        StatsTable::from_groups(&[g]).unwrap()
    }

    #[test]
    fn stats_file_layout() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("stats.csv");
        write_stats(&path, &table()).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Group,CS,ME,Total\ng1,1,1,2\n"
        );
    }

    #[test]
    fn report_file_layout() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("output.csv");
        let t = table();
        write_report(&path, &compose(&t, &t)).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Mix,CS,ME,Total\ng1,1,1,2\n,,,\n,,,\nUniform,CS,ME,Total\ng1,1,1,2\n"
        );
    }
}
