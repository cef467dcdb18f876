//! Cell normalization: raw grids to canonical comparable strings.
//!
//! Comparison operates on strings, so every raw grid is first normalized:
//! each cell is converted to its string form, missing values become the
//! empty string, and leading/trailing whitespace is stripped.

use crate::grid::{CellValue, SheetGrid};

/// A 2D table of canonical strings, same shape as its source [`SheetGrid`].
///
/// # Invariants
///
/// `rows.len() == nrows`, every row has `ncols` entries, and every entry is
/// already trimmed. Normalization is total and idempotent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedGrid {
    pub nrows: u32,
    pub ncols: u32,
    pub rows: Vec<Vec<String>>,
}

impl NormalizedGrid {
    pub fn get(&self, row: u32, col: u32) -> &str {
        debug_assert!(
            row < self.nrows && col < self.ncols,
            "cell coordinates must lie within the grid bounds"
        );
        &self.rows[row as usize][col as usize]
    }
}

/// Canonical string form of a raw cell value.
///
/// - `Text` is trimmed of leading/trailing whitespace.
/// - `Number` uses `f64`'s display form, so `1.0` renders as `"1"`.
/// - `Bool` renders as Excel shows it: `TRUE` / `FALSE`.
/// - `Empty` becomes the empty string.
pub fn canonical_string(value: &CellValue) -> String {
    match value {
        CellValue::Text(s) => s.trim().to_string(),
        CellValue::Number(n) => n.to_string(),
        CellValue::Bool(true) => "TRUE".to_string(),
        CellValue::Bool(false) => "FALSE".to_string(),
        CellValue::Empty => String::new(),
    }
}

/// Normalize a raw grid into a grid of canonical strings of the same shape.
pub fn normalize(grid: &SheetGrid) -> NormalizedGrid {
    NormalizedGrid {
        nrows: grid.nrows,
        ncols: grid.ncols,
        rows: grid
            .rows
            .iter()
            .map(|row| row.iter().map(canonical_string).collect())
            .collect(),
    }
}
