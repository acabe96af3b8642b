use crate::error::{ConfgenError, ConfgenResult};
use crate::types::{Attribute, DeviceRecord, RenderedConfig};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const BANNER: &str = "=============================";

/// Summary block labels, in output order
const SUMMARY_FIELDS: [(&str, Attribute); 14] = [
    ("Template           ", Attribute::Template),
    ("Primary IP         ", Attribute::PrimaryIp),
    ("Primary Subnet     ", Attribute::PrimarySubnet),
    ("Primary Default    ", Attribute::PrimaryDefault),
    ("NTP                ", Attribute::Ntp),
    ("DNS                ", Attribute::Dns),
    ("Inpath0_0 IP       ", Attribute::Inpath00Ip),
    ("Inpath0_0 Subnet   ", Attribute::Inpath00Subnet),
    ("Inpath0_0 Default  ", Attribute::Inpath00Default),
    ("Inpath0_0 VLAN     ", Attribute::Inpath00Vlan),
    ("Inpath0_1 IP       ", Attribute::Inpath01Ip),
    ("Inpath0_1 Subnet   ", Attribute::Inpath01Subnet),
    ("Inpath0_1 Default  ", Attribute::Inpath01Default),
    ("Inpath0_1 VLAN     ", Attribute::Inpath01Vlan),
];

/// Writes one `<hostname>.txt` per device into an output directory
#[derive(Debug, Clone)]
pub struct ConfigWriter {
    output_dir: PathBuf,
}

impl ConfigWriter {
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Destination file for a host
    pub fn path_for(&self, hostname: &str) -> PathBuf {
        self.output_dir.join(format!("{hostname}.txt"))
    }

    /// Summary block followed by the rendered template, one line each
    pub fn format(device: &DeviceRecord, rendered: &RenderedConfig) -> String {
        let mut lines = vec![
            BANNER.to_string(),
            format!(" Values for host: '{}'      ", device.hostname()),
            BANNER.to_string(),
        ];
        for (label, attr) in SUMMARY_FIELDS {
            lines.push(format!("{label}: {}", device.get(attr)));
        }
        lines.push(BANNER.to_string());
        lines.push(format!(" Config template: '{}'       ", device.template()));
        lines.push(BANNER.to_string());
        lines.extend(rendered.lines.iter().cloned());

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    /// Write the host's file, replacing any previous one
    pub fn write(&self, device: &DeviceRecord, rendered: &RenderedConfig) -> ConfgenResult<PathBuf> {
        let path = self.path_for(device.hostname());
        fs::write(&path, Self::format(device, rendered)).map_err(|source| ConfgenError::Write {
            hostname: device.hostname().to_string(),
            source,
        })?;
        debug!(host = %device.hostname(), path = %path.display(), "configuration written");
        Ok(path)
    }
}
