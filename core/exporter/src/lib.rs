//! FILENAME: core/exporter/src/lib.rs
//! Spreadsheet export for the equipment list view.
//!
//! Turns the currently visible grouping into a multi-sheet `.xlsx`
//! workbook: one sheet with every filtered record in global mode, one
//! sheet per bucket in the grouped modes. The workbook is assembled
//! fully in memory and flushed in a single write so a failure never
//! leaves a partial file behind.

mod error;
mod report;

pub use error::ExportError;
pub use report::{build_report, export_filename, save_report, sheet_title, ReportMode};
