//! Output document assembly.
//!
//! One `.xlsx` document is produced per run: a `df-<name>` sheet per
//! differing source sheet (markers written positionally, no header or index
//! column) followed by the `COMPARISON` summary sheet. The document is built
//! in memory and saved once, so a failed run leaves no partial report.

use crate::engine::{ComparisonReport, SheetOutcome};
use crate::error::CompareError;
use rust_xlsxwriter::Workbook;
use std::collections::HashSet;
use std::path::Path;

/// Name of the summary sheet.
pub const SUMMARY_SHEET_NAME: &str = "COMPARISON";

/// Prefix for per-sheet difference sheets; also keeps them from colliding
/// with [`SUMMARY_SHEET_NAME`].
pub const DIFF_SHEET_PREFIX: &str = "df-";

// 28 kept characters + the 3-character prefix stays within Excel's
// 31-character sheet-name limit.
const DIFF_SHEET_NAME_KEEP: usize = 28;

/// Write the full comparison document to `path`.
pub fn write_report(report: &ComparisonReport, path: impl AsRef<Path>) -> Result<(), CompareError> {
    let path = path.as_ref();
    let wrap = |source| CompareError::ReportWrite {
        path: path.display().to_string(),
        source,
    };

    let mut workbook = Workbook::new();
    let mut used_names: HashSet<String> = HashSet::new();

    for entry in &report.sheets {
        if let SheetOutcome::DifferencesFound(diff) = &entry.outcome {
            let name = diff_sheet_name(&entry.sheet, &used_names);
            used_names.insert(name.clone());

            let worksheet = workbook.add_worksheet();
            worksheet.set_name(&name).map_err(wrap)?;
            for (row, col, marker) in diff.iter_markers() {
                worksheet.write_string(row, col as u16, marker).map_err(wrap)?;
            }
        }
    }

    let summary = workbook.add_worksheet();
    summary.set_name(SUMMARY_SHEET_NAME).map_err(wrap)?;
    summary.write_string(0, 0, "File 1").map_err(wrap)?;
    summary.write_string(0, 1, &report.left_label).map_err(wrap)?;
    summary.write_string(1, 0, "File 2").map_err(wrap)?;
    summary.write_string(1, 1, &report.right_label).map_err(wrap)?;
    // Row 2 stays blank to separate the file headers from the table.
    summary.write_string(3, 0, "Sheet Name").map_err(wrap)?;
    summary.write_string(3, 1, "Status").map_err(wrap)?;

    for (index, entry) in report.sheets.iter().enumerate() {
        let row = 4 + index as u32;
        summary.write_string(row, 0, &entry.sheet).map_err(wrap)?;
        summary
            .write_string(row, 1, entry.outcome.status().label())
            .map_err(wrap)?;
    }

    workbook.save(path).map_err(wrap)?;
    Ok(())
}

/// Derive a difference-sheet name from a source sheet name.
///
/// Keeps the first [`DIFF_SHEET_NAME_KEEP`] characters. When two source
/// names truncate to the same sheet name, later claimants get a `~<n>`
/// suffix (with the kept part shortened to stay within the length limit)
/// instead of silently overwriting the earlier sheet.
fn diff_sheet_name(source: &str, used: &HashSet<String>) -> String {
    let base: String = source.chars().take(DIFF_SHEET_NAME_KEEP).collect();
    let candidate = format!("{}{}", DIFF_SHEET_PREFIX, base);
    if !used.contains(&candidate) {
        return candidate;
    }

    let mut n: u32 = 2;
    loop {
        let suffix = format!("~{}", n);
        let keep = DIFF_SHEET_NAME_KEEP - suffix.chars().count();
        let shortened: String = source.chars().take(keep).collect();
        let candidate = format!("{}{}{}", DIFF_SHEET_PREFIX, shortened, suffix);
        if !used.contains(&candidate) {
            return candidate;
        }
        n += 1;
    }
}
