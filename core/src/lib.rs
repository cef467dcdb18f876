//! xlsx-compare: A library for comparing Excel workbooks cell-by-cell.
//!
//! This crate provides functionality for:
//! - Opening `.xlsx` workbooks and reading sheet grids (via `calamine`)
//! - Normalizing raw grids into canonical comparable strings
//! - Reconciling two grids to a common shape and diffing them positionally
//! - Writing a comparison document with a summary sheet and per-sheet
//!   difference sheets (via `rust_xlsxwriter`)
//!
//! The comparison is strictly positional: there is no row/column insertion
//! or shift detection, and no formula or formatting awareness.
//!
//! # Quick Start
//!
//! ```ignore
//! use xlsx_compare::{compare_workbooks, write_report, NoProgress, SheetSelection, WorkbookFile};
//!
//! let mut left = WorkbookFile::open("file_a.xlsx")?;
//! let mut right = WorkbookFile::open("file_b.xlsx")?;
//!
//! let report = compare_workbooks(
//!     &mut left,
//!     &mut right,
//!     &SheetSelection::All,
//!     &mut NoProgress,
//! )?;
//! write_report(&report, "comparison_output.xlsx")?;
//! ```

mod diff;
mod engine;
mod error;
mod grid;
mod normalize;
mod progress;
mod reader;
mod reconcile;
mod report;

pub use diff::{diff_grids, diff_marker, DiffGrid};
pub use engine::{
    compare_workbooks, ComparisonReport, SheetComparison, SheetOutcome, SheetSelection,
    SheetStatus,
};
pub use error::CompareError;
pub use grid::{CellValue, SheetGrid};
pub use normalize::{canonical_string, normalize, NormalizedGrid};
pub use progress::{CallbackProgress, NoProgress, ProgressEvent, ProgressSink, WorkbookRole};
pub use reader::{MemoryWorkbook, SheetSource, WorkbookFile};
pub use reconcile::{reconcile, ReconciledPair};
pub use report::{write_report, DIFF_SHEET_PREFIX, SUMMARY_SHEET_NAME};
