//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use xlsx_compare::{CellValue, MemoryWorkbook, SheetGrid};

/// Build a dense grid of text cells from row literals.
pub fn text_grid(values: &[&[&str]]) -> SheetGrid {
    SheetGrid::from_rows(
        values
            .iter()
            .map(|row| {
                row.iter()
                    .map(|s| CellValue::Text(s.to_string()))
                    .collect()
            })
            .collect(),
    )
}

pub fn single_sheet_workbook(label: &str, sheet: &str, grid: SheetGrid) -> MemoryWorkbook {
    MemoryWorkbook::new(label).with_sheet(sheet, grid)
}
