//! Sheet orchestration: driving the per-sheet comparison pipeline.
//!
//! The engine resolves the set of sheet names to process, classifies each
//! sheet by membership in the two workbooks, and runs
//! normalize -> reconcile -> diff for sheets present in both:
//! - [`SheetSelection`]: explicit list or sorted union of both workbooks
//! - [`SheetOutcome`] / [`SheetStatus`]: per-sheet classification
//! - [`ComparisonReport`]: the accumulated summary for one run
//! - [`compare_workbooks`]: the entry point

use crate::diff::{diff_grids, DiffGrid};
use crate::error::CompareError;
use crate::normalize::normalize;
use crate::progress::{ProgressEvent, ProgressSink};
use crate::reader::SheetSource;
use crate::reconcile::reconcile;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which sheets a run should compare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetSelection {
    /// The sorted union of both workbooks' sheet names.
    All,
    /// An explicit list, processed in the given order. Names found in
    /// neither workbook are skipped without a summary row.
    Explicit(Vec<String>),
}

impl SheetSelection {
    /// Parse a comma-separated sheet list; names are trimmed and empty
    /// entries dropped.
    pub fn from_list(list: &str) -> SheetSelection {
        SheetSelection::Explicit(
            list.split(',')
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .collect(),
        )
    }

    fn resolve(&self, left: &[String], right: &[String]) -> Vec<String> {
        match self {
            SheetSelection::All => left
                .iter()
                .chain(right.iter())
                .collect::<BTreeSet<_>>()
                .into_iter()
                .cloned()
                .collect(),
            SheetSelection::Explicit(names) => names.clone(),
        }
    }
}

/// Flat, serializable projection of a [`SheetOutcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetStatus {
    OnlyInLeft,
    OnlyInRight,
    NoDifferences,
    DifferencesFound,
}

impl SheetStatus {
    /// Human-readable label used in the summary sheet.
    pub fn label(&self) -> &'static str {
        match self {
            SheetStatus::OnlyInLeft => "Only in file1",
            SheetStatus::OnlyInRight => "Only in file2",
            SheetStatus::NoDifferences => "No differences",
            SheetStatus::DifferencesFound => "Differences found",
        }
    }
}

/// Classification of one processed sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetOutcome {
    OnlyInLeft,
    OnlyInRight,
    NoDifferences,
    DifferencesFound(DiffGrid),
}

impl SheetOutcome {
    pub fn status(&self) -> SheetStatus {
        match self {
            SheetOutcome::OnlyInLeft => SheetStatus::OnlyInLeft,
            SheetOutcome::OnlyInRight => SheetStatus::OnlyInRight,
            SheetOutcome::NoDifferences => SheetStatus::NoDifferences,
            SheetOutcome::DifferencesFound(_) => SheetStatus::DifferencesFound,
        }
    }

    /// Number of differing cells; zero unless differences were found.
    pub fn diff_count(&self) -> usize {
        match self {
            SheetOutcome::DifferencesFound(grid) => grid.diff_count(),
            _ => 0,
        }
    }
}

/// One summary row: a processed sheet name and its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetComparison {
    pub sheet: String,
    pub outcome: SheetOutcome,
}

/// The accumulated result of one comparison run, in iteration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonReport {
    /// Label of the left input workbook (its path for file-backed runs).
    pub left_label: String,
    /// Label of the right input workbook.
    pub right_label: String,
    pub sheets: Vec<SheetComparison>,
}

impl ComparisonReport {
    pub fn has_differences(&self) -> bool {
        self.diff_sheet_count() > 0
    }

    /// Number of sheets that will get a difference sheet in the output.
    pub fn diff_sheet_count(&self) -> usize {
        self.sheets
            .iter()
            .filter(|entry| matches!(entry.outcome, SheetOutcome::DifferencesFound(_)))
            .count()
    }
}

/// Compare two workbooks sheet by sheet.
///
/// Sheets are processed strictly sequentially; each common sheet's grids are
/// loaded, normalized, reconciled, and diffed, then dropped before the next
/// sheet is read. The returned report preserves iteration order, so repeated
/// runs over unchanged inputs produce identical reports.
pub fn compare_workbooks<L, R, P>(
    left: &mut L,
    right: &mut R,
    selection: &SheetSelection,
    progress: &mut P,
) -> Result<ComparisonReport, CompareError>
where
    L: SheetSource,
    R: SheetSource,
    P: ProgressSink,
{
    let left_names = left.sheet_names().to_vec();
    let right_names = right.sheet_names().to_vec();

    let mut sheets = Vec::new();

    for name in selection.resolve(&left_names, &right_names) {
        progress.event(ProgressEvent::SheetStarted { sheet: &name });

        let in_left = left_names.iter().any(|n| n == &name);
        let in_right = right_names.iter().any(|n| n == &name);

        let outcome = match (in_left, in_right) {
            (false, false) => {
                // Reachable only for explicit selections; the union of both
                // workbooks cannot contain an unknown name.
                debug_assert!(matches!(selection, SheetSelection::Explicit(_)));
                progress.event(ProgressEvent::SheetSkipped { sheet: &name });
                continue;
            }
            (true, false) => SheetOutcome::OnlyInLeft,
            (false, true) => SheetOutcome::OnlyInRight,
            (true, true) => {
                let left_grid = normalize(&left.read_grid(&name)?);
                let right_grid = normalize(&right.read_grid(&name)?);

                let left_shape = (left_grid.nrows, left_grid.ncols);
                let right_shape = (right_grid.nrows, right_grid.ncols);

                let pair = reconcile(left_grid, right_grid);
                progress.event(ProgressEvent::GridShapes {
                    sheet: &name,
                    left: left_shape,
                    right: right_shape,
                    reconciled: (pair.nrows, pair.ncols),
                });

                let diff = diff_grids(&pair);
                if diff.is_empty() {
                    SheetOutcome::NoDifferences
                } else {
                    SheetOutcome::DifferencesFound(diff)
                }
            }
        };

        progress.event(ProgressEvent::SheetCompared {
            sheet: &name,
            status: outcome.status(),
            diff_count: outcome.diff_count(),
        });
        sheets.push(SheetComparison {
            sheet: name,
            outcome,
        });
    }

    Ok(ComparisonReport {
        left_label: left.label().to_string(),
        right_label: right.label().to_string(),
        sheets,
    })
}
