//! Raw sheet grid data structures.
//!
//! This module defines the intermediate representation produced by the
//! workbook reader before normalization:
//! - [`CellValue`]: A raw cell value with a closed set of variants
//! - [`SheetGrid`]: A dense 2D grid of raw cell values

use serde::{Deserialize, Serialize};

/// A raw cell value as produced by the workbook reader.
///
/// Workbook cells are loosely typed; this enum closes the set of shapes the
/// rest of the pipeline has to handle. Dates, durations, and error cells are
/// folded into [`CellValue::Text`] by the reader using their display form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Empty,
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

/// A dense 2D grid of raw cell values, anchored at A1.
///
/// # Invariants
///
/// `rows.len() == nrows` and every row has exactly `ncols` entries. Cells
/// that are absent in the source sheet hold [`CellValue::Empty`].
#[derive(Debug, Clone, PartialEq)]
pub struct SheetGrid {
    /// Number of rows in the grid's bounding rectangle.
    pub nrows: u32,
    /// Number of columns in the grid's bounding rectangle.
    pub ncols: u32,
    /// Row-major cell storage.
    pub rows: Vec<Vec<CellValue>>,
}

impl SheetGrid {
    /// Create an empty grid of the given shape, filled with [`CellValue::Empty`].
    pub fn new(nrows: u32, ncols: u32) -> SheetGrid {
        SheetGrid {
            nrows,
            ncols,
            rows: vec![vec![CellValue::Empty; ncols as usize]; nrows as usize],
        }
    }

    /// Build a grid from row literals.
    ///
    /// The column count is the longest row's length; shorter rows are padded
    /// with [`CellValue::Empty`] so the shape invariant holds.
    pub fn from_rows(rows: Vec<Vec<CellValue>>) -> SheetGrid {
        let nrows = rows.len() as u32;
        let ncols = rows.iter().map(|r| r.len()).max().unwrap_or(0) as u32;

        let mut padded = rows;
        for row in &mut padded {
            row.resize(ncols as usize, CellValue::Empty);
        }

        SheetGrid {
            nrows,
            ncols,
            rows: padded,
        }
    }

    pub fn get(&self, row: u32, col: u32) -> &CellValue {
        debug_assert!(
            row < self.nrows && col < self.ncols,
            "cell coordinates must lie within the grid bounds"
        );
        &self.rows[row as usize][col as usize]
    }

    /// Number of non-empty cells in the grid.
    pub fn cell_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| !cell.is_empty())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.nrows == 0 || self.ncols == 0
    }
}
