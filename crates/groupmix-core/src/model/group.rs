/// An allocated group of students and its naming scheme.
use super::student::Student;
use serde::Serialize;

/// File-name prefix shared by every group (`g1`, `g2`, …).
pub const GROUP_PREFIX: &str = "g";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    /// Display / file name, e.g. `g3`.
    pub name: String,
    pub members: Vec<Student>,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// An empty group named after its zero-based position.
    pub fn numbered(index: usize, capacity: usize) -> Self {
        Self {
            name: group_name(index),
            members: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// One-based group name for a zero-based index.
pub fn group_name(index: usize) -> String {
    format!("{GROUP_PREFIX}{}", index + 1)
}

/// Whether `name` has the `g<N>` shape produced by [`group_name`].
pub fn is_group_name(name: &str) -> bool {
    name.strip_prefix(GROUP_PREFIX)
        .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
}

/// Sort key giving natural order: `g2` before `g10`.
///
/// Splits the name into its non-numeric prefix and trailing number.
/// Names without a numeric suffix sort after every numbered name with the
/// same prefix, then by full name.
pub fn group_ordinal(name: &str) -> (&str, u64, &str) {
    let digits_at = name
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i)
        .unwrap_or(name.len());
    let (prefix, digits) = name.split_at(digits_at);
    let number = digits.parse::<u64>().unwrap_or(u64::MAX);
    (prefix, number, name)
}
