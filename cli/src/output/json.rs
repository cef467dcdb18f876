use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use xlsx_compare::{ComparisonReport, SheetOutcome, SheetStatus};

#[derive(Serialize)]
struct JsonSummary<'a> {
    file1: &'a str,
    file2: &'a str,
    sheets: Vec<JsonSheetEntry<'a>>,
}

#[derive(Serialize)]
struct JsonSheetEntry<'a> {
    sheet: &'a str,
    status: SheetStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    differing_cells: Option<usize>,
}

pub fn write_json_summary<W: Write>(w: &mut W, report: &ComparisonReport) -> Result<()> {
    let summary = JsonSummary {
        file1: &report.left_label,
        file2: &report.right_label,
        sheets: report
            .sheets
            .iter()
            .map(|entry| JsonSheetEntry {
                sheet: &entry.sheet,
                status: entry.outcome.status(),
                differing_cells: match &entry.outcome {
                    SheetOutcome::DifferencesFound(grid) => Some(grid.diff_count()),
                    _ => None,
                },
            })
            .collect(),
    };

    serde_json::to_writer_pretty(&mut *w, &summary)?;
    writeln!(w)?;
    Ok(())
}
