use std::path::PathBuf;
use thiserror::Error;

pub type ConfgenResult<T> = Result<T, ConfgenError>;

#[derive(Error, Debug)]
pub enum ConfgenError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Cannot open {} file: {reason}", .path.display())]
    SourceUnreadable { path: PathBuf, reason: String },

    #[error("Workbook has no '{0}' sheet")]
    MissingSheet(String),

    #[error("Sheet '{sheet}' has no '{column}' column")]
    MissingColumn { sheet: String, column: String },

    #[error("Configuration error: template body line without preceding template header (row {row}: {line:?})")]
    TemplateBodyWithoutHeader { row: usize, line: String },

    #[error("Missing field '{field}' for host '{hostname}'")]
    MissingField { field: String, hostname: String },

    #[error("Host '{hostname}' references unknown template '{template}'")]
    UnknownTemplate { hostname: String, template: String },

    #[error("No host named '{0}' in the database")]
    UnknownHost(String),

    #[error("Failed to write configuration for host '{hostname}': {source}")]
    Write {
        hostname: String,
        #[source]
        source: std::io::Error,
    },
}
