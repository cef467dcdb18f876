//! Workbook access behind a trait seam.
//!
//! Workbook parsing is delegated to `calamine`; this module wraps it in the
//! narrow [`SheetSource`] interface the engine actually needs, so the engine
//! can also run against the in-memory [`MemoryWorkbook`] in tests:
//! - [`SheetSource`]: sheet-name enumeration plus lazy per-sheet grid reads
//! - [`WorkbookFile`]: a `calamine`-backed `.xlsx` file
//! - [`MemoryWorkbook`]: an in-memory workbook built from [`SheetGrid`]s

use crate::error::CompareError;
use crate::grid::{CellValue, SheetGrid};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// A workbook the comparison engine can enumerate and read sheet grids from.
///
/// Grids are read one sheet at a time; implementations are not required to
/// cache them.
pub trait SheetSource {
    /// Label identifying this workbook in reports, typically its path.
    fn label(&self) -> &str;

    fn sheet_names(&self) -> &[String];

    /// Read one sheet's grid. The engine only asks for names it has seen in
    /// [`SheetSource::sheet_names`].
    fn read_grid(&mut self, name: &str) -> Result<SheetGrid, CompareError>;
}

/// An `.xlsx` workbook opened from disk via `calamine`.
pub struct WorkbookFile {
    label: String,
    sheet_names: Vec<String>,
    inner: Xlsx<BufReader<File>>,
}

impl std::fmt::Debug for WorkbookFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkbookFile")
            .field("label", &self.label)
            .field("sheet_names", &self.sheet_names)
            .finish_non_exhaustive()
    }
}

impl WorkbookFile {
    /// Open a workbook and enumerate its sheet names.
    pub fn open(path: impl AsRef<Path>) -> Result<WorkbookFile, CompareError> {
        let path = path.as_ref();
        let label = path.display().to_string();

        let inner: Xlsx<_> = open_workbook(path).map_err(|source| CompareError::WorkbookLoad {
            path: label.clone(),
            source,
        })?;
        let sheet_names = inner.sheet_names().to_vec();

        Ok(WorkbookFile {
            label,
            sheet_names,
            inner,
        })
    }
}

impl SheetSource for WorkbookFile {
    fn label(&self) -> &str {
        &self.label
    }

    fn sheet_names(&self) -> &[String] {
        &self.sheet_names
    }

    fn read_grid(&mut self, name: &str) -> Result<SheetGrid, CompareError> {
        let range = self
            .inner
            .worksheet_range(name)
            .map_err(|source| CompareError::SheetRead {
                sheet: name.to_string(),
                source,
            })?;
        Ok(grid_from_range(&range))
    }
}

/// Convert a used-cell range into a dense grid anchored at A1.
///
/// `calamine` ranges start at the first used cell; anchoring at A1 keeps
/// positional comparison stable when one file has extra blank leading rows
/// or columns, which then surface as [`CellValue::Empty`] cells.
fn grid_from_range(range: &Range<Data>) -> SheetGrid {
    let (nrows, ncols) = match range.end() {
        Some((row, col)) => (row + 1, col + 1),
        None => (0, 0),
    };

    let mut grid = SheetGrid::new(nrows, ncols);
    for row in 0..nrows {
        for col in 0..ncols {
            if let Some(data) = range.get_value((row, col)) {
                grid.rows[row as usize][col as usize] = convert_cell(data);
            }
        }
    }
    grid
}

/// Fold `calamine`'s open-ended value type into the closed [`CellValue`] set.
///
/// Dates, durations, and error cells keep their display form as text.
fn convert_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        other => CellValue::Text(other.to_string()),
    }
}

/// An in-memory workbook, used by tests and embedders.
#[derive(Debug, Clone, Default)]
pub struct MemoryWorkbook {
    label: String,
    sheet_names: Vec<String>,
    sheets: Vec<(String, SheetGrid)>,
}

impl MemoryWorkbook {
    pub fn new(label: impl Into<String>) -> MemoryWorkbook {
        MemoryWorkbook {
            label: label.into(),
            sheet_names: Vec::new(),
            sheets: Vec::new(),
        }
    }

    pub fn with_sheet(mut self, name: impl Into<String>, grid: SheetGrid) -> MemoryWorkbook {
        let name = name.into();
        self.sheet_names.push(name.clone());
        self.sheets.push((name, grid));
        self
    }
}

impl SheetSource for MemoryWorkbook {
    fn label(&self) -> &str {
        &self.label
    }

    fn sheet_names(&self) -> &[String] {
        &self.sheet_names
    }

    fn read_grid(&mut self, name: &str) -> Result<SheetGrid, CompareError> {
        Ok(self
            .sheets
            .iter()
            .find(|(sheet, _)| sheet == name)
            .map(|(_, grid)| grid.clone())
            .unwrap_or_else(|| SheetGrid::new(0, 0)))
    }
}
