/// Branch extraction: turns raw roster rows into category buckets.
///
/// The roster arrives as untyped string columns (whatever the source sheet
/// had). Only `Roll` is required; `Name` and `Email` are carried through
/// when present and left empty otherwise. Any other columns are ignored.
use crate::error::{GroupError, Result};
use crate::model::student::is_short_roll;
use crate::model::{CategoryBuckets, Student};
use tracing::{info, warn};

pub const ROLL_COLUMN: &str = "Roll";
pub const NAME_COLUMN: &str = "Name";
pub const EMAIL_COLUMN: &str = "Email";

/// Untyped roster as read from the source file: a header row plus data
/// rows in source order. Rows may be shorter than the header.
#[derive(Debug, Default, Clone)]
pub struct RawRoster {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawRoster {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

/// Derive each student's branch code and partition the roster by it.
///
/// Fails with [`GroupError::Schema`] when there is no `Roll` column. Rolls
/// shorter than six characters are accepted with a warning; they land in a
/// bucket keyed by their truncated code.
pub fn extract_categories(roster: &RawRoster) -> Result<CategoryBuckets> {
    let roll_idx = roster
        .column_index(ROLL_COLUMN)
        .ok_or(GroupError::Schema {
            column: ROLL_COLUMN,
        })?;
    let name_idx = roster.column_index(NAME_COLUMN);
    let email_idx = roster.column_index(EMAIL_COLUMN);

    let mut buckets = CategoryBuckets::new();
    let mut short_rolls = 0usize;
    for row in &roster.rows {
        let roll = cell(row, Some(roll_idx));
        if is_short_roll(&roll) {
            warn!(roll = %roll, "roll number too short for a full branch code");
            short_rolls += 1;
        }
        buckets.push(Student::new(
            roll,
            cell(row, name_idx),
            cell(row, email_idx),
        ));
    }

    info!(
        students = buckets.total(),
        branches = buckets.len(),
        short_rolls,
        "Extracted branches from roster"
    );
    Ok(buckets)
}

/// Cell at `idx`, or empty when the column is absent or the row is short.
fn cell(row: &[String], idx: Option<usize>) -> String {
    idx.and_then(|i| row.get(i)).cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(columns: &[&str], rows: &[&[&str]]) -> RawRoster {
        RawRoster::new(
            columns.iter().map(|c| c.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn missing_roll_column_is_schema_error() {
        let r = roster(&["Name", "Email"], &[&["A", "a@x"]]);
        assert!(matches!(
            extract_categories(&r),
            Err(GroupError::Schema { column: "Roll" })
        ));
    }

    #[test]
    fn partitions_by_branch_in_input_order() {
        let r = roster(
            &["Roll", "Name", "Email"],
            &[
                &["2101CS01", "Ann", "ann@x"],
                &["2101ME01", "Bob", "bob@x"],
                &["2101CS02", "Cat", "cat@x"],
            ],
        );
        let buckets = extract_categories(&r).unwrap();
        let cs = buckets.get("CS").unwrap();
        assert_eq!(cs.len(), 2);
        assert_eq!(cs[0].name, "Ann");
        assert_eq!(cs[1].name, "Cat");
        assert_eq!(buckets.get("ME").unwrap()[0].email, "bob@x");
    }

    /// Column order in the source does not matter and extra columns are
    /// ignored.
    #[test]
    fn columns_located_by_name() {
        let r = roster(
            &["Email", "Phone", "Roll", "Name"],
            &[&["z@x", "555", "2201EE09", "Zed"]],
        );
        let buckets = extract_categories(&r).unwrap();
        let ee = &buckets.get("EE").unwrap()[0];
        assert_eq!(ee.roll, "2201EE09");
        assert_eq!(ee.name, "Zed");
        assert_eq!(ee.email, "z@x");
    }

    #[test]
    fn optional_columns_default_to_empty() {
        let r = roster(&["Roll"], &[&["2101CS01"]]);
        let buckets = extract_categories(&r).unwrap();
        let st = &buckets.get("CS").unwrap()[0];
        assert!(st.name.is_empty());
        assert!(st.email.is_empty());
    }

    #[test]
    fn short_rolls_keep_truncated_category() {
        let r = roster(&["Roll", "Name"], &[&["21015", "Short"], &["21", "Tiny"], &[]]);
        let buckets = extract_categories(&r).unwrap();
        assert_eq!(buckets.get("5").unwrap()[0].name, "Short");
        assert_eq!(buckets.get("").unwrap().len(), 2);
        assert_eq!(buckets.total(), 3);
    }

    #[test]
    fn empty_roster_yields_empty_buckets() {
        let r = roster(&["Roll", "Name", "Email"], &[]);
        let buckets = extract_categories(&r).unwrap();
        assert!(buckets.is_empty());
    }
}
