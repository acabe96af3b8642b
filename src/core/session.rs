//! Session orchestrator - load once, then render and write every host

use crate::core::registry::{build_registry, RegistryOptions, VARIABLES_SHEET};
use crate::core::renderer::render;
use crate::error::{ConfgenError, ConfgenResult};
use crate::excel::ExcelImporter;
use crate::parser::{extract_templates, TEMPLATE_SHEET};
use crate::types::{DeviceRecord, RawDatabase, Registry, TemplateLibrary};
use crate::writer::ConfigWriter;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A configuration file written for one host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub hostname: String,
    pub path: PathBuf,
}

/// Templates and devices loaded from one workbook
#[derive(Debug, Clone)]
pub struct Session {
    templates: TemplateLibrary,
    registry: Registry,
}

impl Session {
    /// Load a workbook from disk and build templates and registry from it
    pub fn load<P: AsRef<Path>>(path: P, options: RegistryOptions) -> ConfgenResult<Self> {
        let database = ExcelImporter::new(path).import()?;
        Self::from_database(&database, options)
    }

    /// Build a session from already loaded sheets
    pub fn from_database(database: &RawDatabase, options: RegistryOptions) -> ConfgenResult<Self> {
        let template_sheet = database
            .sheet(TEMPLATE_SHEET)
            .ok_or_else(|| ConfgenError::MissingSheet(TEMPLATE_SHEET.to_string()))?;
        let variables_sheet = database
            .sheet(VARIABLES_SHEET)
            .ok_or_else(|| ConfgenError::MissingSheet(VARIABLES_SHEET.to_string()))?;

        let templates = extract_templates(template_sheet)?;
        let registry = build_registry(variables_sheet, options)?;
        debug!(
            templates = templates.len(),
            hosts = registry.len(),
            "session loaded"
        );

        Ok(Self::new(templates, registry))
    }

    pub fn new(templates: TemplateLibrary, registry: Registry) -> Self {
        Self {
            templates,
            registry,
        }
    }

    pub fn templates(&self) -> &TemplateLibrary {
        &self.templates
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Render and write every host in hostname order.
    ///
    /// `on_generated` is called after each file is written. The first host
    /// that fails to render or write stops the batch.
    pub fn generate_all<F>(
        &self,
        writer: &ConfigWriter,
        mut on_generated: F,
    ) -> ConfgenResult<Vec<GeneratedFile>>
    where
        F: FnMut(&GeneratedFile),
    {
        let mut generated = Vec::with_capacity(self.registry.len());
        for device in self.registry.iter() {
            let file = self.generate_device(device, writer)?;
            on_generated(&file);
            generated.push(file);
        }
        Ok(generated)
    }

    /// Render and write a single host, looked up ignoring case
    pub fn generate_host(&self, hostname: &str, writer: &ConfigWriter) -> ConfgenResult<GeneratedFile> {
        let device = self
            .registry
            .get_host(hostname)
            .ok_or_else(|| ConfgenError::UnknownHost(hostname.to_string()))?;
        self.generate_device(device, writer)
    }

    fn generate_device(&self, device: &DeviceRecord, writer: &ConfigWriter) -> ConfgenResult<GeneratedFile> {
        let rendered = render(device, &self.templates)?;
        let path = writer.write(device, &rendered)?;
        Ok(GeneratedFile {
            hostname: device.hostname().to_string(),
            path,
        })
    }
}
