//! Errors surfaced by the comparison pipeline.
//!
//! All failures here are infrastructure-level (file access, workbook
//! parsing, output writing). The pipeline itself is total over loaded data,
//! so there are no retries and no partial-success mode: the first error
//! aborts the run.

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CompareError {
    #[error(
        "[XLCMP_IO_001] failed to load workbook '{path}'. Suggestion: check that the path exists and is a valid .xlsx file."
    )]
    WorkbookLoad {
        path: String,
        #[source]
        source: calamine::XlsxError,
    },

    #[error(
        "[XLCMP_IO_002] failed to read sheet '{sheet}'. Suggestion: the sheet is listed in the workbook but its grid could not be parsed; the file may be corrupt."
    )]
    SheetRead {
        sheet: String,
        #[source]
        source: calamine::XlsxError,
    },

    #[error(
        "[XLCMP_OUT_001] failed to write comparison report '{path}'. Suggestion: check that the destination is writable and not open in another program."
    )]
    ReportWrite {
        path: String,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
}

impl CompareError {
    /// Stable machine-readable code for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            CompareError::WorkbookLoad { .. } => "XLCMP_IO_001",
            CompareError::SheetRead { .. } => "XLCMP_IO_002",
            CompareError::ReportWrite { .. } => "XLCMP_OUT_001",
        }
    }
}
