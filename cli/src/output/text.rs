use anyhow::Result;
use std::io::Write;
use xlsx_compare::{ComparisonReport, ProgressEvent, ProgressSink, SheetOutcome, SheetStatus};

/// Renders progress events as console lines on stdout.
pub struct ConsoleProgress {
    quiet: bool,
}

impl ConsoleProgress {
    pub fn new(quiet: bool) -> ConsoleProgress {
        ConsoleProgress { quiet }
    }
}

impl ProgressSink for ConsoleProgress {
    fn event(&mut self, event: ProgressEvent<'_>) {
        if self.quiet {
            return;
        }

        match event {
            ProgressEvent::WorkbookLoaded {
                role,
                label,
                sheet_count,
            } => {
                println!("{}: {} ({} sheets)", role.label(), label, sheet_count);
            }
            ProgressEvent::SheetStarted { sheet } => {
                println!("Processing sheet: {}", sheet);
            }
            ProgressEvent::SheetSkipped { sheet } => {
                println!("... \"{}\" is only in the --sheets list, skipping", sheet);
            }
            ProgressEvent::GridShapes {
                sheet,
                left,
                right,
                reconciled,
            } => {
                println!("... shape of file1 ({}): {}x{}", sheet, left.0, left.1);
                println!("... shape of file2 ({}): {}x{}", sheet, right.0, right.1);
                println!(
                    "... reconciled size: {} rows, {} cols",
                    reconciled.0, reconciled.1
                );
            }
            ProgressEvent::SheetCompared {
                status, diff_count, ..
            } => match status {
                SheetStatus::OnlyInLeft => println!("... only in file1"),
                SheetStatus::OnlyInRight => println!("... only in file2"),
                SheetStatus::NoDifferences => println!("... no difference"),
                SheetStatus::DifferencesFound => {
                    println!("... {} difference(s) found", diff_count)
                }
            },
            ProgressEvent::ReportWritten { path, diff_sheets } => {
                println!(
                    "Comparison completed. Output saved as '{}' ({} difference sheets).",
                    path, diff_sheets
                );
            }
            _ => {}
        }
    }
}

/// Write the human-readable summary table.
pub fn write_summary<W: Write>(w: &mut W, report: &ComparisonReport) -> Result<()> {
    writeln!(w, "File 1: {}", report.left_label)?;
    writeln!(w, "File 2: {}", report.right_label)?;
    writeln!(w)?;

    if report.sheets.is_empty() {
        writeln!(w, "No sheets compared.")?;
        return Ok(());
    }

    for entry in &report.sheets {
        match &entry.outcome {
            SheetOutcome::DifferencesFound(grid) => {
                writeln!(
                    w,
                    "  \"{}\": {} ({} differing cells)",
                    entry.sheet,
                    entry.outcome.status().label(),
                    grid.diff_count()
                )?;
            }
            outcome => {
                writeln!(w, "  \"{}\": {}", entry.sheet, outcome.status().label())?;
            }
        }
    }

    Ok(())
}
