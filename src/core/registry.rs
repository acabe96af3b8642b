//! Device registry builder - `variables` sheet → Registry

use crate::error::{ConfgenError, ConfgenResult};
use crate::types::{Attribute, DeviceRecord, RawSheet, Registry, Row};
use tracing::{debug, warn};

/// Sheet holding one row per device
pub const VARIABLES_SHEET: &str = "variables";

/// Rendered in place of a column the row does not have, in lenient mode
pub const ABSENT_COLUMN_TEXT: &str = "None";

/// Options controlling how strictly rows are read
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryOptions {
    /// Stringify absent columns to `"None"` instead of failing
    pub lenient: bool,
}

/// Build the registry from the `variables` sheet.
///
/// Rows with a blank `HOSTNAME` or `TEMPLATE` are skipped. The first valid
/// row for a hostname wins; later rows for it are ignored.
pub fn build_registry(sheet: &RawSheet, options: RegistryOptions) -> ConfgenResult<Registry> {
    let mut registry = Registry::new();

    for (index, row) in sheet.rows.iter().enumerate() {
        let row_number = RawSheet::spreadsheet_row(index);

        if !is_valid_row(row, row_number)? {
            warn!(
                sheet = %sheet.name,
                row = row_number,
                "skipping row without hostname or template"
            );
            continue;
        }

        let device = device_from_row(row, options)?;
        let hostname = device.hostname().to_string();
        if !registry.insert_if_absent(device) {
            debug!(host = %hostname, row = row_number, "duplicate hostname ignored");
        }
    }

    Ok(registry)
}

/// Both required fields must be present and non-blank
fn is_valid_row(row: &Row, row_number: usize) -> ConfgenResult<bool> {
    for attr in [Attribute::Hostname, Attribute::Template] {
        let cell = row.get(attr.column()).ok_or_else(|| ConfgenError::MissingField {
            field: attr.column().to_string(),
            hostname: format!("<row {row_number}>"),
        })?;
        if cell.is_blank() {
            return Ok(false);
        }
    }
    Ok(true)
}

fn device_from_row(row: &Row, options: RegistryOptions) -> ConfgenResult<DeviceRecord> {
    let hostname = row
        .get(Attribute::Hostname.column())
        .map(|cell| cell.to_string().trim().to_string())
        .unwrap_or_default();

    DeviceRecord::try_from_fn(|attr| match row.get(attr.column()) {
        Some(cell) => Ok(cell.to_string().trim().to_string()),
        None if options.lenient => Ok(ABSENT_COLUMN_TEXT.to_string()),
        None => Err(ConfgenError::MissingField {
            field: attr.column().to_string(),
            hostname: hostname.clone(),
        }),
    })
}
