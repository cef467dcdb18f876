//! Grid reconciliation: padding two normalized grids to a common shape.
//!
//! Positional comparison is only well-defined when both grids have the same
//! extent, so the smaller grid along each axis is padded with empty strings.
//! This is padding only — there is no insertion or shift detection; whatever
//! sits at an index in one grid is compared against the same index in the
//! other.

use crate::normalize::NormalizedGrid;

/// Two normalized grids extended to identical dimensions.
///
/// # Invariants
///
/// `left` and `right` both have shape `(nrows, ncols)` where
/// `nrows = max` of the source row counts and `ncols = max` of the source
/// column counts; every cell added by padding holds the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciledPair {
    pub nrows: u32,
    pub ncols: u32,
    pub left: NormalizedGrid,
    pub right: NormalizedGrid,
}

/// Pad `left` and `right` to their common bounding shape.
///
/// If both grids are 0×0 the reconciled pair is 0×0 and the diff step will
/// trivially report no differences.
pub fn reconcile(left: NormalizedGrid, right: NormalizedGrid) -> ReconciledPair {
    let nrows = left.nrows.max(right.nrows);
    let ncols = left.ncols.max(right.ncols);

    ReconciledPair {
        nrows,
        ncols,
        left: pad_to(left, nrows, ncols),
        right: pad_to(right, nrows, ncols),
    }
}

fn pad_to(grid: NormalizedGrid, nrows: u32, ncols: u32) -> NormalizedGrid {
    let mut rows = grid.rows;
    for row in &mut rows {
        row.resize(ncols as usize, String::new());
    }
    rows.resize_with(nrows as usize, || vec![String::new(); ncols as usize]);

    NormalizedGrid { nrows, ncols, rows }
}
