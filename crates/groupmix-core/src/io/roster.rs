/// Roster reader: the untyped source sheet.
use crate::error::{GroupError, Result};
use crate::extract::RawRoster;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Read a roster CSV (header row required) from disk.
pub fn read_roster(path: &Path) -> Result<RawRoster> {
    let file = std::fs::File::open(path).map_err(|e| GroupError::io(path, e))?;
    let roster = read_roster_from(file).map_err(|e| match e {
        GroupError::Csv { source, .. } => GroupError::csv(path, source),
        other => other,
    })?;
    info!(
        path = %path.display(),
        rows = roster.rows.len(),
        columns = roster.columns.len(),
        "Read roster"
    );
    Ok(roster)
}

/// Read a roster from any reader. Ragged rows are accepted; short rows
/// simply have fewer cells.
pub fn read_roster_from<R: Read>(reader: R) -> Result<RawRoster> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let columns: Vec<String> = rdr
        .headers()
        .map_err(|e| GroupError::csv("<roster>", e))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(|e| GroupError::csv("<roster>", e))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(RawRoster::new(columns, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_header_and_rows() {
        let data = "Roll,Name,Email\n2101CS01,Ann,ann@x\n2101ME02,Bob,bob@x\n";
        let roster = read_roster_from(data.as_bytes()).unwrap();
        assert_eq!(roster.columns, ["Roll", "Name", "Email"]);
        assert_eq!(roster.rows.len(), 2);
        assert_eq!(roster.rows[1], ["2101ME02", "Bob", "bob@x"]);
    }

    /// Padding around header names is ignored so ` Roll ` still matches.
    #[test]
    fn header_whitespace_is_trimmed() {
        let roster = read_roster_from(" Roll , Name\n2101CS01,Ann\n".as_bytes()).unwrap();
        assert_eq!(roster.columns, ["Roll", "Name"]);
    }

    #[test]
    fn ragged_rows_are_accepted() {
        let data = "Roll,Name,Email\n2101CS01\n2101ME02,Bob,bob@x,extra\n";
        let roster = read_roster_from(data.as_bytes()).unwrap();
        assert_eq!(roster.rows[0], ["2101CS01"]);
        assert_eq!(roster.rows[1].len(), 4);
    }

    #[test]
    fn header_only_roster_has_no_rows() {
        let roster = read_roster_from("Roll,Name,Email\n".as_bytes()).unwrap();
        assert!(roster.rows.is_empty());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_roster(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, GroupError::Io { .. }));
    }
}
