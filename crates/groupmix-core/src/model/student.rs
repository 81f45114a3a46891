/// A single student record.
///
/// The same struct doubles as the CSV row for every persisted stage
/// (branch files and group files), so the serde names match the column
/// headers `Roll, Name, Email, Branch`.
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Branch code derived from a roll number. Almost always two characters,
/// so it stays inline without a heap allocation.
pub type Category = CompactString;

/// Character offsets of the branch code inside a roll number.
pub const CATEGORY_START: usize = 4;
pub const CATEGORY_LEN: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    #[serde(rename = "Roll")]
    pub roll: String,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Email", default)]
    pub email: String,
    /// Derived once at extraction; never recomputed downstream.
    #[serde(rename = "Branch", default)]
    pub category: Category,
}

impl Student {
    /// Build a student and derive its category from the roll number.
    pub fn new(roll: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        let roll = roll.into();
        let category = category_of(&roll);
        Self {
            roll,
            name: name.into(),
            email: email.into(),
            category,
        }
    }
}

/// Extract the branch code: characters `[4, 6)` of the roll number.
///
/// Works on characters, not bytes, so a non-ASCII roll never splits a code
/// point. Rolls shorter than six characters yield a truncated (possibly
/// empty) code.
pub fn category_of(roll: &str) -> Category {
    roll.chars()
        .skip(CATEGORY_START)
        .take(CATEGORY_LEN)
        .collect()
}

/// `true` when the roll is too short to carry a full branch code.
pub fn is_short_roll(roll: &str) -> bool {
    roll.chars().count() < CATEGORY_START + CATEGORY_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_is_fifth_and_sixth_character() {
        assert_eq!(category_of("2101CS01"), "CS");
        assert_eq!(category_of("2101ME45"), "ME");
        assert_eq!(category_of("210133"), "33");
    }

    #[test]
    fn short_roll_yields_truncated_category() {
        assert_eq!(category_of("21015"), "5");
        assert_eq!(category_of("2101"), "");
        assert_eq!(category_of(""), "");
        assert!(is_short_roll("21015"));
        assert!(!is_short_roll("2101CS"));
    }

    /// Offsets count characters so multi-byte rolls never panic on a
    /// char boundary.
    #[test]
    fn category_counts_characters_not_bytes() {
        assert_eq!(category_of("ab\u{e9}dXYz"), "XY");
    }

    #[test]
    fn new_derives_category() {
        let s = Student::new("2201EE07", "Asha", "asha@example.org");
        assert_eq!(s.category, "EE");
        assert_eq!(s.name, "Asha");
    }
}
