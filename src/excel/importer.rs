//! Excel importer implementation - workbook → RawDatabase

use crate::error::{ConfgenError, ConfgenResult};
use crate::types::{CellValue, RawDatabase, RawSheet, Row};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Excel importer reading every worksheet into header-keyed rows
pub struct ExcelImporter {
    path: PathBuf,
}

impl ExcelImporter {
    /// Create a new Excel importer
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Import every worksheet of the workbook
    pub fn import(&self) -> ConfgenResult<RawDatabase> {
        // Format is picked from the extension (.xls, .xlsx, .xlsb, .ods)
        let mut workbook = open_workbook_auto(&self.path).map_err(|e| self.unreadable(e))?;

        let mut database = RawDatabase::new();
        for sheet_name in workbook.sheet_names() {
            let range = workbook
                .worksheet_range(&sheet_name)
                .map_err(|e| self.unreadable(e))?;
            let sheet = self.process_sheet(&sheet_name, &range);
            debug!(sheet = %sheet_name, rows = sheet.rows.len(), "loaded worksheet");
            database.add_sheet(sheet);
        }

        Ok(database)
    }

    fn unreadable(&self, e: impl std::fmt::Display) -> ConfgenError {
        ConfgenError::SourceUnreadable {
            path: self.path.clone(),
            reason: e.to_string(),
        }
    }

    /// Turn a worksheet range into rows keyed by the first row's headers
    fn process_sheet(&self, sheet_name: &str, range: &Range<Data>) -> RawSheet {
        let mut sheet = RawSheet::new(sheet_name);
        let mut rows = range.rows();

        let header: Vec<String> = match rows.next() {
            Some(cells) => cells.iter().map(|c| convert_cell(c).to_string()).collect(),
            None => return sheet, // Empty sheet
        };

        for cells in rows {
            // Duplicate headers collapse, the rightmost column wins
            let row: Row = header
                .iter()
                .cloned()
                .zip(cells.iter().map(convert_cell))
                .collect();
            sheet.add_row(row);
        }

        sheet
    }
}

/// Convert a calamine cell, truncating numbers to integers
fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Int(i) => CellValue::Integer(*i),
        Data::Float(f) => CellValue::Integer(f.trunc() as i64),
        Data::Bool(b) => CellValue::Integer(i64::from(*b)),
        Data::DateTime(dt) => CellValue::Integer(dt.as_f64().trunc() as i64),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Empty => CellValue::Text(String::new()),
        other => CellValue::Text(other.to_string()),
    }
}
