//! Positional cell diffing over a reconciled grid pair.
//!
//! The differ walks every position of a [`ReconciledPair`] and records a
//! marker string for each position where the two sides differ:
//! - [`DiffGrid`]: A sparse grid of per-cell difference markers
//! - [`diff_grids`]: The full-scan comparison itself
//! - [`diff_marker`]: The `"left -> right"` marker encoding

use crate::reconcile::ReconciledPair;
use std::collections::BTreeMap;

/// Marker text for a single differing position.
pub fn diff_marker(left: &str, right: &str) -> String {
    format!("{} -> {}", left, right)
}

/// A sparse grid of difference markers, same shape as its reconciled pair.
///
/// # Invariants
///
/// Every key satisfies `row < nrows` and `col < ncols`. A position holds a
/// marker iff the reconciled grids differ there; a grid with zero markers
/// means "no differences" for the sheet. Markers iterate in row-major order,
/// which keeps downstream output deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffGrid {
    pub nrows: u32,
    pub ncols: u32,
    markers: BTreeMap<(u32, u32), String>,
}

impl DiffGrid {
    pub fn new(nrows: u32, ncols: u32) -> DiffGrid {
        DiffGrid {
            nrows,
            ncols,
            markers: BTreeMap::new(),
        }
    }

    pub fn insert_marker(&mut self, row: u32, col: u32, marker: String) {
        debug_assert!(
            row < self.nrows && col < self.ncols,
            "marker coordinates must lie within the grid bounds"
        );
        self.markers.insert((row, col), marker);
    }

    pub fn marker(&self, row: u32, col: u32) -> Option<&str> {
        self.markers.get(&(row, col)).map(|s| s.as_str())
    }

    /// Number of differing positions.
    pub fn diff_count(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Markers in row-major order.
    pub fn iter_markers(&self) -> impl Iterator<Item = (u32, u32, &str)> {
        self.markers
            .iter()
            .map(|(&(row, col), marker)| (row, col, marker.as_str()))
    }
}

/// Compare a reconciled pair position by position.
///
/// Every cell in `[0, nrows) x [0, ncols)` is visited; there is no
/// whole-grid equality shortcut, even when the source shapes matched.
/// Output depends only on the two reconciled grids.
pub fn diff_grids(pair: &ReconciledPair) -> DiffGrid {
    let mut diff = DiffGrid::new(pair.nrows, pair.ncols);

    for row in 0..pair.nrows {
        for col in 0..pair.ncols {
            let left = pair.left.get(row, col);
            let right = pair.right.get(row, col);
            if left != right {
                diff.insert_marker(row, col, diff_marker(left, right));
            }
        }
    }

    diff
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{CellValue, SheetGrid};
    use crate::normalize::{normalize, NormalizedGrid};
    use crate::reconcile::reconcile;

    fn text_grid(values: &[&[&str]]) -> NormalizedGrid {
        normalize(&SheetGrid::from_rows(
            values
                .iter()
                .map(|row| row.iter().map(|s| CellValue::Text(s.to_string())).collect())
                .collect(),
        ))
    }

    fn diff_of(left: &[&[&str]], right: &[&[&str]]) -> DiffGrid {
        diff_grids(&reconcile(text_grid(left), text_grid(right)))
    }

    #[test]
    fn equal_grids_produce_no_markers() {
        let diff = diff_of(&[&["a", "b"], &["1", "2"]], &[&["a", "b"], &["1", "2"]]);
        assert!(diff.is_empty());
        assert_eq!(diff.diff_count(), 0);
    }

    #[test]
    fn marker_present_iff_cells_differ() {
        let diff = diff_of(&[&["a", "b"], &["1", "2"]], &[&["a", "b"], &["1", "3"]]);

        assert_eq!(diff.diff_count(), 1);
        assert_eq!(diff.marker(1, 1), Some("2 -> 3"));
        assert_eq!(diff.marker(0, 0), None);
        assert_eq!(diff.marker(0, 1), None);
        assert_eq!(diff.marker(1, 0), None);
    }

    #[test]
    fn swapping_sides_swaps_marker_halves_but_not_positions() {
        let left = &[&["a", "b"][..], &["1", "2"][..]];
        let right = &[&["a", "x"][..], &["9", "2"][..]];

        let forward = diff_of(left, right);
        let backward = diff_of(right, left);

        let forward_positions: Vec<(u32, u32)> =
            forward.iter_markers().map(|(r, c, _)| (r, c)).collect();
        let backward_positions: Vec<(u32, u32)> =
            backward.iter_markers().map(|(r, c, _)| (r, c)).collect();
        assert_eq!(forward_positions, backward_positions);

        assert_eq!(forward.marker(0, 1), Some("b -> x"));
        assert_eq!(backward.marker(0, 1), Some("x -> b"));
        assert_eq!(forward.marker(1, 0), Some("1 -> 9"));
        assert_eq!(backward.marker(1, 0), Some("9 -> 1"));
    }

    #[test]
    fn padded_cells_compare_against_empty_string() {
        // Left is 2x2, right is 3x1: reconciled shape is 3x2.
        let diff = diff_of(&[&["a", "b"], &["c", "d"]], &[&["a"], &["c"], &["e"]]);

        assert_eq!(diff.nrows, 3);
        assert_eq!(diff.ncols, 2);
        assert_eq!(diff.marker(0, 1), Some("b -> "));
        assert_eq!(diff.marker(1, 1), Some("d -> "));
        assert_eq!(diff.marker(2, 0), Some(" -> e"));
        assert_eq!(diff.diff_count(), 3);
    }

    #[test]
    fn zero_by_zero_pair_reports_no_differences() {
        let diff = diff_of(&[], &[]);
        assert_eq!(diff.nrows, 0);
        assert_eq!(diff.ncols, 0);
        assert!(diff.is_empty());
    }

    #[test]
    fn markers_iterate_in_row_major_order() {
        let diff = diff_of(&[&["a", "b"], &["c", "d"]], &[&["x", "b"], &["c", "y"]]);

        let positions: Vec<(u32, u32)> = diff.iter_markers().map(|(r, c, _)| (r, c)).collect();
        assert_eq!(positions, vec![(0, 0), (1, 1)]);
    }
}
