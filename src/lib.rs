//! riverbed-confgen - spreadsheet-driven appliance configuration
//!
//! This library reads a device inventory workbook, splits its template sheet
//! into named templates, and renders one configuration file per device.
//!
//! # Workbook layout
//!
//! - `variables`: one row per device (`HOSTNAME`, `TEMPLATE`, `PRIMARY_IP`, ...)
//! - `config-templates`: one text line per row; `Config Template: [name]`
//!   starts a new template, `[PLACEHOLDER]` spans are filled per device
//!
//! # Example
//!
//! ```no_run
//! use riverbed_confgen::core::{RegistryOptions, Session};
//! use riverbed_confgen::writer::ConfigWriter;
//!
//! let session = Session::load("database.xls", RegistryOptions::default())?;
//! let writer = ConfigWriter::new(".");
//!
//! session.generate_all(&writer, |file| {
//!     println!("  ++ {}.txt generated", file.hostname);
//! })?;
//! # Ok::<(), riverbed_confgen::error::ConfgenError>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod excel;
pub mod parser;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use error::{ConfgenError, ConfgenResult};
pub use types::{Attribute, CellValue, DeviceRecord, RawSheet, Registry, TemplateLibrary};
