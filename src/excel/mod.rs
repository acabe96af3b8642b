//! Excel import module
//!
//! Reads every worksheet of the inventory workbook into header-keyed rows.
//! `.xls`, `.xlsx`, `.xlsb` and `.ods` are all accepted.

mod importer;

pub use importer::ExcelImporter;
