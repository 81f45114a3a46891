/// Group statistics: per-group branch counts with row totals.
///
/// Each row only records the branches actually present in that group; the
/// table's column set is the sorted union across all rows, and absent
/// branches read as zero when a row is projected onto it.
use crate::error::{GroupError, Result};
use crate::model::{group_ordinal, Category, Group};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use tracing::info;

pub const GROUP_COLUMN: &str = "Group";
pub const TOTAL_COLUMN: &str = "Total";

/// Branch counts for one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsRow {
    pub group: String,
    /// Only branches observed in this group.
    pub counts: BTreeMap<Category, usize>,
    pub total: usize,
}

impl StatsRow {
    pub fn from_group(group: &Group) -> Self {
        let mut counts: BTreeMap<Category, usize> = BTreeMap::new();
        for student in &group.members {
            *counts.entry(student.category.clone()).or_default() += 1;
        }
        Self {
            group: group.name.clone(),
            counts,
            total: group.len(),
        }
    }

    /// Count for `code`, zero when the branch is absent from this group.
    pub fn count(&self, code: &str) -> usize {
        self.counts.get(code).copied().unwrap_or(0)
    }

    /// Counts aligned to `columns`, zero-filled.
    pub fn project(&self, columns: &[Category]) -> Vec<usize> {
        columns.iter().map(|c| self.count(c)).collect()
    }
}

/// Count matrix for one allocation strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsTable {
    /// Sorted union of every branch seen in any row.
    pub columns: Vec<Category>,
    /// Rows in natural group order (`g2` before `g10`).
    pub rows: Vec<StatsRow>,
}

impl StatsTable {
    /// Aggregate a named collection of groups.
    ///
    /// The input order does not matter; rows come out in natural order of
    /// group name. An empty collection is [`GroupError::EmptySource`].
    pub fn from_groups(groups: &[Group]) -> Result<Self> {
        if groups.is_empty() {
            return Err(GroupError::EmptySource {
                origin: "group collection".into(),
            });
        }

        let mut rows: Vec<StatsRow> = groups.iter().map(StatsRow::from_group).collect();
        rows.sort_by(|a, b| group_ordinal(&a.group).cmp(&group_ordinal(&b.group)));

        let columns: BTreeSet<Category> = rows
            .iter()
            .flat_map(|r| r.counts.keys().cloned())
            .collect();

        let table = Self {
            columns: columns.into_iter().collect(),
            rows,
        };
        info!(
            groups = table.rows.len(),
            branches = table.columns.len(),
            "Aggregated group statistics"
        );
        Ok(table)
    }

    /// Header row: `Group`, each branch, `Total`.
    pub fn header(&self) -> Vec<String> {
        std::iter::once(GROUP_COLUMN.to_string())
            .chain(self.columns.iter().map(|c| c.to_string()))
            .chain(std::iter::once(TOTAL_COLUMN.to_string()))
            .collect()
    }

    /// Data rows as strings, aligned with [`header`](Self::header).
    pub fn records(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                std::iter::once(row.group.clone())
                    .chain(row.project(&self.columns).into_iter().map(|n| n.to_string()))
                    .chain(std::iter::once(row.total.to_string()))
                    .collect()
            })
            .collect()
    }

    /// Total students across every group.
    pub fn grand_total(&self) -> usize {
        self.rows.iter().map(|r| r.total).sum()
    }
}
