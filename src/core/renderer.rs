//! Template renderer - placeholder substitution against one device

use crate::error::{ConfgenError, ConfgenResult};
use crate::types::{DeviceRecord, RenderedConfig, TemplateLibrary};
use regex::Regex;

/// Written in place of a placeholder that resolves to nothing
pub const UNRESOLVED_MARKER: &str = "[ERROR DYNAMIC VARIABLE VALUE NOT FOUND]";

/// Non-greedy so several placeholders on one line are found separately
const PLACEHOLDER: &str = r"\[(.*?)\]";

/// Render the device's template, resolving every `[...]` placeholder.
///
/// Placeholders are collected from the template line first, then handled in
/// order. Each step strips every bracket left on the line and replaces all
/// occurrences of the placeholder text with its value (or
/// [`UNRESOLVED_MARKER`]). Existing templates rely on that literal
/// replacement, so e.g. `IP=[IP]` renders the value on both sides.
pub fn render(device: &DeviceRecord, templates: &TemplateLibrary) -> ConfgenResult<RenderedConfig> {
    let body = templates
        .get(device.template())
        .ok_or_else(|| ConfgenError::UnknownTemplate {
            hostname: device.hostname().to_string(),
            template: device.template().to_string(),
        })?;

    let placeholder = Regex::new(PLACEHOLDER)?;
    let lines = body
        .iter()
        .map(|line| render_line(&placeholder, line, device))
        .collect();

    Ok(RenderedConfig {
        hostname: device.hostname().to_string(),
        lines,
    })
}

fn render_line(placeholder: &Regex, line: &str, device: &DeviceRecord) -> String {
    let names: Vec<&str> = placeholder
        .captures_iter(line)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str())
        .collect();

    let mut rendered = line.to_string();
    for name in names {
        rendered.retain(|c| c != '[' && c != ']');
        if name.is_empty() {
            continue;
        }
        let value = resolve_variable(device, name)
            .filter(|v| !v.is_empty())
            .unwrap_or(UNRESOLVED_MARKER);
        rendered = rendered.replace(name, value);
    }
    rendered
}

/// Value of the first attribute, in declared order, whose name contains
/// `placeholder` ignoring case.
///
/// Overlapping names are resolved by order alone: `IP` matches
/// `inpath0_0_ip` before `primary_ip`.
pub fn resolve_variable<'a>(device: &'a DeviceRecord, placeholder: &str) -> Option<&'a str> {
    let wanted = placeholder.to_uppercase();
    device
        .attributes()
        .find(|(name, _)| name.to_uppercase().contains(&wanted))
        .map(|(_, value)| value)
}
