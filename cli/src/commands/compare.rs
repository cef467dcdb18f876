use crate::output::{json, text};
use crate::OutputFormat;
use anyhow::{Context, Result};
use std::io;
use std::process::ExitCode;
use xlsx_compare::{
    compare_workbooks, write_report, ProgressEvent, ProgressSink, SheetSelection, SheetSource,
    WorkbookFile, WorkbookRole,
};

pub fn run(
    file1: &str,
    file2: &str,
    output_path: &str,
    sheets: Option<&str>,
    format: OutputFormat,
    quiet: bool,
) -> Result<ExitCode> {
    let mut progress = text::ConsoleProgress::new(quiet);

    let mut left = WorkbookFile::open(file1)
        .with_context(|| format!("Failed to open first workbook: {}", file1))?;
    progress.event(ProgressEvent::WorkbookLoaded {
        role: WorkbookRole::Left,
        label: file1,
        sheet_count: left.sheet_names().len(),
    });

    let mut right = WorkbookFile::open(file2)
        .with_context(|| format!("Failed to open second workbook: {}", file2))?;
    progress.event(ProgressEvent::WorkbookLoaded {
        role: WorkbookRole::Right,
        label: file2,
        sheet_count: right.sheet_names().len(),
    });

    let selection = match sheets {
        Some(list) => SheetSelection::from_list(list),
        None => SheetSelection::All,
    };

    let report = compare_workbooks(&mut left, &mut right, &selection, &mut progress)?;

    write_report(&report, output_path)
        .with_context(|| format!("Failed to write comparison output: {}", output_path))?;
    progress.event(ProgressEvent::ReportWritten {
        path: output_path,
        diff_sheets: report.diff_sheet_count(),
    });

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    match format {
        OutputFormat::Text => text::write_summary(&mut handle, &report)?,
        OutputFormat::Json => json::write_json_summary(&mut handle, &report)?,
    }

    Ok(ExitCode::from(0))
}
