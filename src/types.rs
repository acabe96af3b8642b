use std::collections::{BTreeMap, HashMap};
use std::fmt;

//==============================================================================
// Raw Spreadsheet Types
//==============================================================================

/// A single cell as read from the workbook
///
/// Numeric cells are truncated to integers on load, everything else is text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
}

impl CellValue {
    /// Whether the cell stringifies to something other than whitespace
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Text(s) => s.trim().is_empty(),
            CellValue::Integer(_) => false,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Integer(i) => write!(f, "{i}"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Integer(i)
    }
}

/// One data row: column header → cell
pub type Row = HashMap<String, CellValue>;

/// All data rows of one worksheet, header row excluded
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawSheet {
    pub name: String,
    pub rows: Vec<Row>,
}

impl RawSheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// 1-based spreadsheet row number for a data row index (header is row 1)
    pub fn spreadsheet_row(index: usize) -> usize {
        index + 2
    }
}

/// Every worksheet of a workbook, keyed by sheet name
#[derive(Debug, Clone, Default)]
pub struct RawDatabase {
    sheets: HashMap<String, RawSheet>,
}

impl RawDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_sheet(&mut self, sheet: RawSheet) {
        self.sheets.insert(sheet.name.clone(), sheet);
    }

    pub fn sheet(&self, name: &str) -> Option<&RawSheet> {
        self.sheets.get(name)
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.sheets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

//==============================================================================
// Templates
//==============================================================================

/// Named template bodies extracted from the `config-templates` sheet
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateLibrary {
    templates: HashMap<String, Vec<String>>,
}

impl TemplateLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a template, replacing any earlier body with the same name.
    /// Returns `true` if a previous body was replaced.
    pub fn insert(&mut self, name: impl Into<String>, lines: Vec<String>) -> bool {
        self.templates.insert(name.into(), lines).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.templates.get(name).map(Vec::as_slice)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Vec<String>> {
        self.templates.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

//==============================================================================
// Devices
//==============================================================================

/// The fixed attribute set of a device, in declared order.
///
/// Placeholder resolution walks attributes in exactly this order, so the
/// variant order is part of the template contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Hostname,
    Template,
    Inpath00Ip,
    Inpath00Subnet,
    Inpath00Default,
    Inpath00Vlan,
    Inpath01Ip,
    Inpath01Subnet,
    Inpath01Default,
    Inpath01Vlan,
    PrimaryIp,
    PrimarySubnet,
    PrimaryDefault,
    Dns,
    Ntp,
}

impl Attribute {
    pub const ALL: [Attribute; 15] = [
        Attribute::Hostname,
        Attribute::Template,
        Attribute::Inpath00Ip,
        Attribute::Inpath00Subnet,
        Attribute::Inpath00Default,
        Attribute::Inpath00Vlan,
        Attribute::Inpath01Ip,
        Attribute::Inpath01Subnet,
        Attribute::Inpath01Default,
        Attribute::Inpath01Vlan,
        Attribute::PrimaryIp,
        Attribute::PrimarySubnet,
        Attribute::PrimaryDefault,
        Attribute::Dns,
        Attribute::Ntp,
    ];

    /// Attribute name matched against placeholders
    pub fn name(self) -> &'static str {
        match self {
            Attribute::Hostname => "hostname",
            Attribute::Template => "template",
            Attribute::Inpath00Ip => "inpath0_0_ip",
            Attribute::Inpath00Subnet => "inpath0_0_subnet",
            Attribute::Inpath00Default => "inpath0_0_default",
            Attribute::Inpath00Vlan => "inpath0_0_vlan",
            Attribute::Inpath01Ip => "inpath0_1_ip",
            Attribute::Inpath01Subnet => "inpath0_1_subnet",
            Attribute::Inpath01Default => "inpath0_1_default",
            Attribute::Inpath01Vlan => "inpath0_1_vlan",
            Attribute::PrimaryIp => "primary_ip",
            Attribute::PrimarySubnet => "primary_subnet",
            Attribute::PrimaryDefault => "primary_default",
            Attribute::Dns => "dns",
            Attribute::Ntp => "ntp",
        }
    }

    /// Column header in the `variables` sheet
    pub fn column(self) -> &'static str {
        match self {
            Attribute::Hostname => "HOSTNAME",
            Attribute::Template => "TEMPLATE",
            Attribute::Inpath00Ip => "INPATH0_0_IP",
            Attribute::Inpath00Subnet => "INPATH0_0_SUBNET_MASK",
            Attribute::Inpath00Default => "INPATH0_0_DEFAULT_GATEWAY",
            Attribute::Inpath00Vlan => "INPATH0_0_VLAN",
            Attribute::Inpath01Ip => "INPATH0_1_IP",
            Attribute::Inpath01Subnet => "INPATH0_1_SUBNET_MASK",
            Attribute::Inpath01Default => "INPATH0_1_DEFAULT_GATEWAY",
            Attribute::Inpath01Vlan => "INPATH0_1_VLAN",
            Attribute::PrimaryIp => "PRIMARY_IP",
            Attribute::PrimarySubnet => "PRIMARY_SUBNET",
            Attribute::PrimaryDefault => "PRIMARY_DEFAULT",
            Attribute::Dns => "DNS",
            Attribute::Ntp => "NTP",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// One appliance: hostname, template name and network parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceRecord {
    values: [String; 15],
}

impl DeviceRecord {
    /// Create a device with every network parameter empty
    pub fn new(hostname: impl Into<String>, template: impl Into<String>) -> Self {
        let mut values: [String; 15] = Default::default();
        values[Attribute::Hostname.index()] = hostname.into();
        values[Attribute::Template.index()] = template.into();
        Self { values }
    }

    /// Build a device by asking `value_of` for every attribute in declared order
    pub fn try_from_fn<E, F>(mut value_of: F) -> Result<Self, E>
    where
        F: FnMut(Attribute) -> Result<String, E>,
    {
        let mut values: [String; 15] = Default::default();
        for attr in Attribute::ALL {
            values[attr.index()] = value_of(attr)?;
        }
        Ok(Self { values })
    }

    pub fn with(mut self, attr: Attribute, value: impl Into<String>) -> Self {
        self.values[attr.index()] = value.into();
        self
    }

    pub fn get(&self, attr: Attribute) -> &str {
        &self.values[attr.index()]
    }

    pub fn hostname(&self) -> &str {
        self.get(Attribute::Hostname)
    }

    pub fn template(&self) -> &str {
        self.get(Attribute::Template)
    }

    /// All attributes as (name, value) pairs, in declared order
    pub fn attributes(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        Attribute::ALL
            .into_iter()
            .map(move |attr| (attr.name(), self.get(attr)))
    }
}

/// Deduplicated devices keyed by hostname, iterated in sorted order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    devices: BTreeMap<String, DeviceRecord>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a device unless its hostname is already registered.
    /// Returns `false` when the device was ignored.
    pub fn insert_if_absent(&mut self, device: DeviceRecord) -> bool {
        let hostname = device.hostname().to_string();
        if self.devices.contains_key(&hostname) {
            return false;
        }
        self.devices.insert(hostname, device);
        true
    }

    /// Exact-match hostname lookup ignoring case
    pub fn get_host(&self, hostname: &str) -> Option<&DeviceRecord> {
        self.devices.get(hostname).or_else(|| {
            self.devices
                .iter()
                .find(|(name, _)| name.to_lowercase() == hostname.to_lowercase())
                .map(|(_, device)| device)
        })
    }

    pub fn hostnames(&self) -> impl Iterator<Item = &str> {
        self.devices.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DeviceRecord> {
        self.devices.values()
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

/// A device's template with every placeholder resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedConfig {
    pub hostname: String,
    pub lines: Vec<String>,
}
