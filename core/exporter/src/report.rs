//! FILENAME: core/exporter/src/report.rs
//! Workbook assembly for the three export modes.
//!
//! The export always reflects the selected display mode, not the
//! visible page: global mode writes every filtered record to a single
//! sheet, the grouped modes write one sheet per bucket. Sheet names
//! come from bucket labels, truncated to honor the xlsx 31-character
//! sheet-name limit.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};

use engine::{group_records, EquipmentRecord, GroupKey};

use crate::error::ExportError;

/// Column headers shared by every sheet.
const HEADERS: [&str; 7] = [
    "ID", "Name", "Quantity", "Location", "State", "Category", "Service",
];

/// Sheet name used in global mode and for empty grouped exports.
const GLOBAL_SHEET: &str = "Matériels";

/// Which layout the workbook takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReportMode {
    Global,
    ByCategory,
    ByService,
}

/// Canonical download filename for each mode.
pub fn export_filename(mode: ReportMode) -> &'static str {
    match mode {
        ReportMode::Global => "materiels_global.xlsx",
        ReportMode::ByCategory => "materiels_par_categorie.xlsx",
        ReportMode::ByService => "materiels_par_service.xlsx",
    }
}

/// Bucket label shortened to a legal sheet name: labels longer than
/// 31 characters keep their first 28 plus an ellipsis.
pub fn sheet_title(label: &str) -> String {
    if label.chars().count() > 31 {
        let mut title: String = label.chars().take(28).collect();
        title.push_str("...");
        title
    } else {
        label.to_string()
    }
}

/// Assembles the in-memory workbook for `mode` over `filtered`.
pub fn build_report(
    mode: ReportMode,
    filtered: &[&EquipmentRecord],
) -> Result<Workbook, ExportError> {
    let mut workbook = Workbook::new();

    match mode {
        ReportMode::Global => {
            write_sheet(&mut workbook, GLOBAL_SHEET, filtered)?;
        }
        ReportMode::ByCategory => {
            write_grouped(&mut workbook, filtered, GroupKey::Category)?;
        }
        ReportMode::ByService => {
            write_grouped(&mut workbook, filtered, GroupKey::Service)?;
        }
    }

    Ok(workbook)
}

/// Builds the workbook for `mode` and writes it to `path` atomically:
/// the file content is produced with a single filesystem write after
/// the whole workbook has been serialized to a buffer.
pub fn save_report(
    mode: ReportMode,
    filtered: &[&EquipmentRecord],
    path: &Path,
) -> Result<(), ExportError> {
    let mut workbook = build_report(mode, filtered)?;
    let buffer = workbook.save_to_buffer()?;
    std::fs::write(path, buffer)?;
    Ok(())
}

fn write_grouped(
    workbook: &mut Workbook,
    filtered: &[&EquipmentRecord],
    key: GroupKey,
) -> Result<(), ExportError> {
    let buckets = group_records(filtered, key);
    if buckets.is_empty() {
        // An xlsx workbook needs at least one sheet; an empty filtered
        // set exports as a lone header-only sheet.
        return write_sheet(workbook, GLOBAL_SHEET, &[]);
    }
    for bucket in &buckets {
        write_sheet(workbook, &sheet_title(&bucket.label), &bucket.records)?;
    }
    Ok(())
}

/// Writes one sheet: a bold header row followed by one row per record,
/// missing optionals rendered as the sentinel label.
fn write_sheet(
    workbook: &mut Workbook,
    name: &str,
    records: &[&EquipmentRecord],
) -> Result<(), ExportError> {
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(name)?;

    let header_format = Format::new().set_bold();
    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet.write_number(row, 0, f64::from(record.id))?;
        worksheet.write_string(row, 1, &record.name)?;
        worksheet.write_number(row, 2, f64::from(record.quantity))?;
        worksheet.write_string(row, 3, record.location_label())?;
        worksheet.write_string(row, 4, record.state_label())?;
        worksheet.write_string(row, 5, record.category_label())?;
        worksheet.write_string(row, 6, record.service_label())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{open_workbook, Reader, Xlsx};
    use engine::UNSPECIFIED_LABEL;

    fn record(id: u32, name: &str, quantity: u32, category: Option<&str>) -> EquipmentRecord {
        let mut r = EquipmentRecord::new(id, name, quantity);
        r.category_name = category.map(str::to_string);
        r
    }

    fn fixture() -> Vec<EquipmentRecord> {
        vec![
            record(1, "Laptop", 5, Some("IT")),
            record(2, "Bureau", 2, Some("Mobilier")),
            record(3, "Scanner", 1, Some("IT")),
            record(4, "Armoire", 3, None),
        ]
    }

    #[test]
    fn filenames_are_canonical_per_mode() {
        assert_eq!(export_filename(ReportMode::Global), "materiels_global.xlsx");
        assert_eq!(
            export_filename(ReportMode::ByCategory),
            "materiels_par_categorie.xlsx"
        );
        assert_eq!(
            export_filename(ReportMode::ByService),
            "materiels_par_service.xlsx"
        );
    }

    #[test]
    fn long_labels_truncate_to_twenty_eight_plus_ellipsis() {
        let long = "Fournitures de bureau et consommables divers";
        let title = sheet_title(long);
        assert_eq!(title.chars().count(), 31);
        assert!(title.ends_with("..."));

        // At the limit, the label passes through untouched.
        let exact: String = "a".repeat(31);
        assert_eq!(sheet_title(&exact), exact);
    }

    #[test]
    fn global_export_writes_one_sheet_with_all_rows() {
        let records = fixture();
        let filtered: Vec<&EquipmentRecord> = records.iter().collect();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(export_filename(ReportMode::Global));

        save_report(ReportMode::Global, &filtered, &path).unwrap();

        let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
        assert_eq!(workbook.sheet_names().to_vec(), vec!["Matériels".to_string()]);
        let range = workbook.worksheet_range("Matériels").unwrap();
        // Header plus one row per filtered record.
        assert_eq!(range.height(), filtered.len() + 1);
    }

    #[test]
    fn grouped_export_writes_one_sheet_per_bucket() {
        let records = fixture();
        let filtered: Vec<&EquipmentRecord> = records.iter().collect();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(export_filename(ReportMode::ByCategory));

        save_report(ReportMode::ByCategory, &filtered, &path).unwrap();

        let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
        let names = workbook.sheet_names().to_vec();
        assert_eq!(names, vec!["IT", "Mobilier", UNSPECIFIED_LABEL]);

        let it = workbook.worksheet_range("IT").unwrap();
        assert_eq!(it.height(), 3); // header + Laptop + Scanner
        let unspecified = workbook.worksheet_range(UNSPECIFIED_LABEL).unwrap();
        assert_eq!(unspecified.height(), 2);
    }

    #[test]
    fn missing_fields_render_as_sentinel() {
        let records = vec![record(9, "Armoire", 3, None)];
        let filtered: Vec<&EquipmentRecord> = records.iter().collect();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xlsx");

        save_report(ReportMode::Global, &filtered, &path).unwrap();

        let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
        let range = workbook.worksheet_range("Matériels").unwrap();
        let state = range.get_value((1, 4)).unwrap().to_string();
        let category = range.get_value((1, 5)).unwrap().to_string();
        assert_eq!(state, UNSPECIFIED_LABEL);
        assert_eq!(category, UNSPECIFIED_LABEL);
    }

    #[test]
    fn empty_grouped_export_still_produces_a_sheet() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.xlsx");

        save_report(ReportMode::ByService, &[], &path).unwrap();

        let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
        assert_eq!(workbook.sheet_names().to_vec(), vec!["Matériels".to_string()]);
        let range = workbook.worksheet_range("Matériels").unwrap();
        assert_eq!(range.height(), 1); // header only
    }
}
