/// Students partitioned by branch code.
///
/// Backed by a `BTreeMap` so iteration is always in ascending code order,
/// which is the sweep order of the mixed allocator and the tie-break order
/// of the uniform allocator. Each bucket keeps students in insertion order.
use super::student::{Category, Student};
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CategoryBuckets {
    buckets: BTreeMap<Category, Vec<Student>>,
}

impl CategoryBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a student to the bucket for its category, creating the
    /// bucket on first sight.
    pub fn push(&mut self, student: Student) {
        self.buckets
            .entry(student.category.clone())
            .or_default()
            .push(student);
    }

    /// Total students across every bucket.
    pub fn total(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Number of distinct categories.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Category codes in ascending order.
    pub fn codes(&self) -> impl Iterator<Item = &Category> {
        self.buckets.keys()
    }

    pub fn get(&self, code: &str) -> Option<&[Student]> {
        self.buckets.get(code).map(Vec::as_slice)
    }

    /// Buckets in ascending code order.
    pub fn iter(&self) -> impl Iterator<Item = (&Category, &[Student])> {
        self.buckets.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Buckets ordered largest first, ties broken by ascending code.
    pub fn by_size_desc(&self) -> Vec<(&Category, &[Student])> {
        let mut ordered: Vec<_> = self.iter().collect();
        // Stable sort over code-ordered input keeps ties in code order.
        ordered.sort_by(|a, b| b.1.len().cmp(&a.1.len()));
        ordered
    }
}

impl FromIterator<Student> for CategoryBuckets {
    fn from_iter<I: IntoIterator<Item = Student>>(iter: I) -> Self {
        let mut buckets = Self::new();
        for student in iter {
            buckets.push(student);
        }
        buckets
    }
}
