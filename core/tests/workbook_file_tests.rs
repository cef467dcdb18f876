//! File-backed end-to-end tests: inputs are real `.xlsx` files written with
//! `rust_xlsxwriter` and read back through [`WorkbookFile`].

use rust_xlsxwriter::Workbook;
use std::path::Path;
use xlsx_compare::{
    compare_workbooks, CompareError, NoProgress, SheetOutcome, SheetSelection, SheetSource,
    WorkbookFile,
};

fn write_workbook(path: &Path, sheets: &[(&str, &[&[&str]])]) {
    let mut workbook = Workbook::new();
    for (name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name).unwrap();
        for (row, cells) in rows.iter().enumerate() {
            for (col, value) in cells.iter().enumerate() {
                worksheet
                    .write_string(row as u32, col as u16, *value)
                    .unwrap();
            }
        }
    }
    workbook.save(path).unwrap();
}

#[test]
fn file_backed_comparison_finds_the_edited_cell() {
    let dir = tempfile::tempdir().unwrap();
    let left_path = dir.path().join("a.xlsx");
    let right_path = dir.path().join("b.xlsx");

    write_workbook(&left_path, &[("S1", &[&["a", "b"], &["1", "2"]])]);
    write_workbook(&right_path, &[("S1", &[&["a", "b"], &["1", "3"]])]);

    let mut left = WorkbookFile::open(&left_path).unwrap();
    let mut right = WorkbookFile::open(&right_path).unwrap();

    assert_eq!(left.label(), left_path.display().to_string());
    assert_eq!(left.sheet_names(), &["S1".to_string()]);

    let report =
        compare_workbooks(&mut left, &mut right, &SheetSelection::All, &mut NoProgress).unwrap();

    match &report.sheets[0].outcome {
        SheetOutcome::DifferencesFound(grid) => {
            assert_eq!(grid.diff_count(), 1);
            assert_eq!(grid.marker(1, 1), Some("2 -> 3"));
        }
        other => panic!("expected differences, got {:?}", other),
    }
}

#[test]
fn numeric_and_boolean_cells_compare_by_canonical_text() {
    let dir = tempfile::tempdir().unwrap();
    let left_path = dir.path().join("a.xlsx");
    let right_path = dir.path().join("b.xlsx");

    // Left holds typed cells, right holds their text renderings.
    {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("S1").unwrap();
        worksheet.write_number(0, 0, 2.0).unwrap();
        worksheet.write_number(0, 1, 2.5).unwrap();
        worksheet.write_boolean(0, 2, true).unwrap();
        workbook.save(&left_path).unwrap();
    }
    write_workbook(&right_path, &[("S1", &[&["2", "2.5", "TRUE"]])]);

    let mut left = WorkbookFile::open(&left_path).unwrap();
    let mut right = WorkbookFile::open(&right_path).unwrap();

    let report =
        compare_workbooks(&mut left, &mut right, &SheetSelection::All, &mut NoProgress).unwrap();

    assert_eq!(report.sheets[0].outcome, SheetOutcome::NoDifferences);
}

#[test]
fn sheets_unique_to_each_file_are_classified() {
    let dir = tempfile::tempdir().unwrap();
    let left_path = dir.path().join("a.xlsx");
    let right_path = dir.path().join("b.xlsx");

    write_workbook(
        &left_path,
        &[("Common", &[&["x"]]), ("Extra", &[&["only left"]])],
    );
    write_workbook(&right_path, &[("Common", &[&["x"]])]);

    let mut left = WorkbookFile::open(&left_path).unwrap();
    let mut right = WorkbookFile::open(&right_path).unwrap();

    let report =
        compare_workbooks(&mut left, &mut right, &SheetSelection::All, &mut NoProgress).unwrap();

    let names: Vec<&str> = report.sheets.iter().map(|entry| entry.sheet.as_str()).collect();
    assert_eq!(names, vec!["Common", "Extra"]);
    assert_eq!(report.sheets[0].outcome, SheetOutcome::NoDifferences);
    assert_eq!(report.sheets[1].outcome, SheetOutcome::OnlyInLeft);
}

#[test]
fn missing_input_surfaces_a_workbook_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.xlsx");

    let err = WorkbookFile::open(&missing).unwrap_err();
    match &err {
        CompareError::WorkbookLoad { path, .. } => {
            assert_eq!(path, &missing.display().to_string());
        }
        other => panic!("expected WorkbookLoad, got {:?}", other),
    }
    assert_eq!(err.code(), "XLCMP_IO_001");
}
