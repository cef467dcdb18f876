use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;
use xlsx_compare::{SheetSource, WorkbookFile};

pub fn run(path: &str) -> Result<ExitCode> {
    let mut workbook =
        WorkbookFile::open(path).with_context(|| format!("Failed to open workbook: {}", path))?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    let filename = Path::new(path)
        .file_name()
        .map(|s| s.to_string_lossy())
        .unwrap_or_else(|| path.into());

    let names = workbook.sheet_names().to_vec();
    writeln!(handle, "Workbook: {}", filename)?;
    writeln!(handle, "Sheets: {}", names.len())?;

    for name in &names {
        let grid = workbook.read_grid(name)?;
        writeln!(
            handle,
            "  - \"{}\" {}x{}, {} cells",
            name,
            grid.nrows,
            grid.ncols,
            grid.cell_count()
        )?;
    }

    Ok(ExitCode::from(0))
}
