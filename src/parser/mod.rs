use crate::error::{ConfgenError, ConfgenResult};
use crate::types::{RawSheet, TemplateLibrary};
use regex::Regex;
use tracing::debug;

/// Sheet holding the template library
pub const TEMPLATE_SHEET: &str = "config-templates";

/// The single text column of the template sheet
pub const TEMPLATE_COLUMN: &str = "Enter config templates below this line:";

/// Marker line opening a new template, e.g. `Config Template: [branch-small]`
const TEMPLATE_MARKER: &str = r"(?i)Config Template: \[(.*?)\]";

/// Extract the template library from the `config-templates` sheet.
///
/// Every data row contributes the text of [`TEMPLATE_COLUMN`]; numeric cells
/// are stringified first. See [`parse_templates`] for the marker convention.
///
/// # Example
/// ```
/// use riverbed_confgen::parser::{extract_templates, TEMPLATE_COLUMN};
/// use riverbed_confgen::types::{CellValue, RawSheet, Row};
///
/// let mut sheet = RawSheet::new("config-templates");
/// for line in ["Config Template: [A]", "hostname [HOSTNAME]"] {
///     let mut row = Row::new();
///     row.insert(TEMPLATE_COLUMN.to_string(), CellValue::from(line));
///     sheet.add_row(row);
/// }
///
/// let templates = extract_templates(&sheet)?;
/// assert_eq!(templates.get("A").unwrap(), ["hostname [HOSTNAME]"]);
/// # Ok::<(), riverbed_confgen::error::ConfgenError>(())
/// ```
pub fn extract_templates(sheet: &RawSheet) -> ConfgenResult<TemplateLibrary> {
    let lines = sheet
        .rows
        .iter()
        .map(|row| {
            row.get(TEMPLATE_COLUMN)
                .map(|cell| cell.to_string())
                .ok_or_else(|| ConfgenError::MissingColumn {
                    sheet: sheet.name.clone(),
                    column: TEMPLATE_COLUMN.to_string(),
                })
        })
        .collect::<ConfgenResult<Vec<String>>>()?;

    parse_templates(&lines)
}

/// Split the data rows of the template sheet into named bodies.
///
/// - empty lines are skipped
/// - a line containing `Config Template: [<name>]` (any case) opens a new,
///   empty body named `<name>`; the marker itself is not kept
/// - any other line is appended verbatim to the open body
///
/// A repeated name replaces the earlier body. A body line before the first
/// marker is an error; `lines[i]` is reported as spreadsheet row `i + 2`.
pub fn parse_templates<S: AsRef<str>>(lines: &[S]) -> ConfgenResult<TemplateLibrary> {
    let marker = Regex::new(TEMPLATE_MARKER)?;

    let mut library = TemplateLibrary::new();
    let mut current: Option<String> = None;

    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        if line.is_empty() {
            continue;
        }

        if let Some(captures) = marker.captures(line) {
            let name = captures[1].to_string();
            if library.insert(name.clone(), Vec::new()) {
                debug!(template = %name, "template redefined, earlier body discarded");
            } else {
                debug!(template = %name, "found template");
            }
            current = Some(name);
            continue;
        }

        let body = current
            .as_deref()
            .and_then(|name| library.get_mut(name))
            .ok_or_else(|| ConfgenError::TemplateBodyWithoutHeader {
                row: RawSheet::spreadsheet_row(index),
                line: line.to_string(),
            })?;
        body.push(line.to_string());
    }

    Ok(library)
}
