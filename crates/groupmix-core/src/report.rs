/// Comparison report: Mix and Uniform statistics side by side.
///
/// Both tables are re-projected onto one shared, sorted branch column set so
/// the two sections line up when written as a single flat sheet:
///
/// ```text
/// Mix,CE,CS,ME,Total
/// g1,1,2,1,4
/// ...
/// ,,,,
/// ,,,,
/// Uniform,CE,CS,ME,Total
/// g1,0,4,0,4
/// ...
/// ```
use crate::allocate::Strategy;
use crate::model::Category;
use crate::stats::{StatsTable, TOTAL_COLUMN};
use serde::Serialize;
use std::collections::BTreeSet;

/// Blank rows between the two sections.
pub const SECTION_GAP: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub group: String,
    /// Aligned with [`Report::columns`]; absent branches are zero.
    pub counts: Vec<usize>,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSection {
    pub label: &'static str,
    pub rows: Vec<ReportRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub columns: Vec<Category>,
    pub mix: ReportSection,
    pub uniform: ReportSection,
}

/// Merge the two strategy tables onto their combined column set.
pub fn compose(mix: &StatsTable, uniform: &StatsTable) -> Report {
    let columns: Vec<Category> = mix
        .columns
        .iter()
        .chain(uniform.columns.iter())
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    Report {
        mix: section(Strategy::Mixed, mix, &columns),
        uniform: section(Strategy::Uniform, uniform, &columns),
        columns,
    }
}

fn section(strategy: Strategy, table: &StatsTable, columns: &[Category]) -> ReportSection {
    ReportSection {
        label: strategy.label(),
        rows: table
            .rows
            .iter()
            .map(|row| ReportRow {
                group: row.group.clone(),
                counts: row.project(columns),
                total: row.total,
            })
            .collect(),
    }
}

impl Report {
    /// Width of every sheet row: label column, branches, `Total`.
    pub fn width(&self) -> usize {
        self.columns.len() + 2
    }

    /// Flatten into the sheet layout: each section starts with a header row
    /// whose first cell is the section label, and the sections are separated
    /// by [`SECTION_GAP`] blank rows.
    pub fn sheet(&self) -> Vec<Vec<String>> {
        let mut out = Vec::with_capacity(self.mix.rows.len() + self.uniform.rows.len() + 4);
        self.push_section(&mut out, &self.mix);
        for _ in 0..SECTION_GAP {
            out.push(vec![String::new(); self.width()]);
        }
        self.push_section(&mut out, &self.uniform);
        out
    }

    fn push_section(&self, out: &mut Vec<Vec<String>>, section: &ReportSection) {
        out.push(
            std::iter::once(section.label.to_string())
                .chain(self.columns.iter().map(|c| c.to_string()))
                .chain(std::iter::once(TOTAL_COLUMN.to_string()))
                .collect(),
        );
        for row in &section.rows {
            out.push(
                std::iter::once(row.group.clone())
                    .chain(row.counts.iter().map(|n| n.to_string()))
                    .chain(std::iter::once(row.total.to_string()))
                    .collect(),
            );
        }
    }
}
