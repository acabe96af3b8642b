//! End-to-end tests: real .xlsx workbooks through load → render → write

use pretty_assertions::assert_eq;
use riverbed_confgen::core::{RegistryOptions, Session, UNRESOLVED_MARKER};
use riverbed_confgen::parser::TEMPLATE_COLUMN;
use riverbed_confgen::writer::ConfigWriter;
use riverbed_confgen::{Attribute, ConfgenError};
use rust_xlsxwriter::{Workbook, Worksheet};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const VARIABLE_COLUMNS: [&str; 15] = [
    "HOSTNAME",
    "TEMPLATE",
    "INPATH0_0_IP",
    "INPATH0_0_SUBNET_MASK",
    "INPATH0_0_DEFAULT_GATEWAY",
    "INPATH0_0_VLAN",
    "INPATH0_1_IP",
    "INPATH0_1_SUBNET_MASK",
    "INPATH0_1_DEFAULT_GATEWAY",
    "INPATH0_1_VLAN",
    "PRIMARY_IP",
    "PRIMARY_SUBNET",
    "PRIMARY_DEFAULT",
    "DNS",
    "NTP",
];

/// Blank cells are left unwritten, numeric text is stored as a number
fn write_cell(sheet: &mut Worksheet, row: u32, col: u16, value: &str) {
    if value.is_empty() {
        return;
    }
    match value.parse::<f64>() {
        Ok(n) => sheet.write_number(row, col, n).unwrap(),
        Err(_) => sheet.write_string(row, col, value).unwrap(),
    };
}

fn write_workbook(path: &Path, devices: &[[&str; 15]], template_lines: &[&str]) {
    let mut workbook = Workbook::new();

    let variables = workbook.add_worksheet();
    variables.set_name("variables").unwrap();
    for (col, header) in VARIABLE_COLUMNS.iter().enumerate() {
        write_cell(variables, 0, col as u16, header);
    }
    for (row, device) in devices.iter().enumerate() {
        for (col, value) in device.iter().enumerate() {
            write_cell(variables, row as u32 + 1, col as u16, value);
        }
    }

    let templates = workbook.add_worksheet();
    templates.set_name("config-templates").unwrap();
    write_cell(templates, 0, 0, TEMPLATE_COLUMN);
    for (row, line) in template_lines.iter().enumerate() {
        write_cell(templates, row as u32 + 1, 0, line);
    }

    let notes = workbook.add_worksheet();
    notes.set_name("notes").unwrap();
    write_cell(notes, 0, 0, "Anything here is ignored");

    workbook.save(path).unwrap();
}

fn device<'a>(hostname: &'a str, template: &'a str, primary_ip: &'a str) -> [&'a str; 15] {
    [
        hostname,
        template,
        "192.168.1.10",
        "255.255.255.0",
        "192.168.1.1",
        "10",
        "",
        "",
        "",
        "",
        primary_ip,
        "255.255.255.0",
        "10.0.0.254",
        "10.0.0.53",
        "10.0.0.123",
    ]
}

fn generate(dir: &TempDir, devices: &[[&str; 15]], template_lines: &[&str]) -> Vec<PathBuf> {
    let database = dir.path().join("database.xlsx");
    write_workbook(&database, devices, template_lines);

    let session = Session::load(&database, RegistryOptions::default()).unwrap();
    let writer = ConfigWriter::new(dir.path());
    session
        .generate_all(&writer, |_| {})
        .unwrap()
        .into_iter()
        .map(|file| file.path)
        .collect()
}

// ═══════════════════════════════════════════════════════════════════════════
// FULL PIPELINE
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn e2e_single_host_summary_and_body() {
    let dir = TempDir::new().unwrap();
    let files = generate(
        &dir,
        &[device("host1", "A", "10.0.0.1")],
        &[
            "Config Template: [A]",
            "hostname [HOSTNAME]",
            "ip=[PRIMARY_IP]",
        ],
    );

    assert_eq!(files, vec![dir.path().join("host1.txt")]);
    let content = fs::read_to_string(&files[0]).unwrap();
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines[1], " Values for host: 'host1'      ");
    assert_eq!(lines[4], "Primary IP         : 10.0.0.1");
    assert_eq!(lines[12], "Inpath0_0 VLAN     : 10");
    assert_eq!(lines[18], " Config template: 'A'       ");
    assert_eq!(&lines[20..], ["hostname host1", "ip=10.0.0.1"]);
}

#[test]
fn e2e_ip_placeholder_takes_first_declared_attribute() {
    let dir = TempDir::new().unwrap();
    let files = generate(
        &dir,
        &[device("host1", "A", "10.0.0.1")],
        &["Config Template: [A]", "ip=[IP]"],
    );

    let content = fs::read_to_string(&files[0]).unwrap();
    // inpath0_0_ip is declared before primary_ip
    assert_eq!(content.lines().last(), Some("ip=192.168.1.10"));
}

#[test]
fn e2e_unresolved_and_empty_values_render_marker() {
    let dir = TempDir::new().unwrap();
    let files = generate(
        &dir,
        &[device("host1", "A", "10.0.0.1")],
        &[
            "Config Template: [A]",
            "snmp-server community [COMMUNITY] ro",
            "in-path1_0 ip [INPATH0_1_IP]",
        ],
    );

    let content = fs::read_to_string(&files[0]).unwrap();
    let body: Vec<&str> = content.lines().skip(20).collect();
    assert_eq!(
        body,
        vec![
            format!("snmp-server community {UNRESOLVED_MARKER} ro"),
            format!("in-path1_0 ip {UNRESOLVED_MARKER}"),
        ]
    );
}

#[test]
fn e2e_hosts_sorted_deduplicated_and_filtered() {
    let dir = TempDir::new().unwrap();
    let files = generate(
        &dir,
        &[
            device("zeta", "A", "10.0.0.9"),
            device("alpha", "A", "10.0.0.1"),
            device("zeta", "A", "10.9.9.9"),
            device("", "A", "10.0.0.2"),
            device("orphan", "", "10.0.0.3"),
        ],
        &["Config Template: [A]", "ip [PRIMARY_IP]"],
    );

    assert_eq!(
        files,
        vec![dir.path().join("alpha.txt"), dir.path().join("zeta.txt")]
    );
    let zeta = fs::read_to_string(dir.path().join("zeta.txt")).unwrap();
    assert!(zeta.ends_with("ip 10.0.0.9\n"));
    assert!(!dir.path().join("orphan.txt").exists());
}

#[test]
fn e2e_templates_split_and_overwritten() {
    let dir = TempDir::new().unwrap();
    let database = dir.path().join("database.xlsx");
    write_workbook(
        &database,
        &[device("host1", "B", "10.0.0.1")],
        &[
            "Config Template: [A]",
            "a-line",
            "",
            "Config Template: [B]",
            "old-b",
            "config template: [B]",
            "new-b [DNS]",
        ],
    );

    let session = Session::load(&database, RegistryOptions::default()).unwrap();
    assert_eq!(session.templates().names(), vec!["A", "B"]);
    assert_eq!(session.templates().get("B").unwrap(), ["new-b [DNS]"]);
    assert_eq!(
        session
            .registry()
            .get_host("HOST1")
            .unwrap()
            .get(Attribute::Inpath00Vlan),
        "10"
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// FAILURES
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn e2e_unreadable_workbook() {
    let dir = TempDir::new().unwrap();
    let database = dir.path().join("database.xlsx");
    fs::write(&database, b"this is not a spreadsheet").unwrap();

    let err = Session::load(&database, RegistryOptions::default()).unwrap_err();
    assert!(matches!(err, ConfgenError::SourceUnreadable { .. }));
}

#[test]
fn e2e_missing_workbook() {
    let dir = TempDir::new().unwrap();
    let err = Session::load(dir.path().join("database.xls"), RegistryOptions::default())
        .unwrap_err();
    assert!(matches!(err, ConfgenError::SourceUnreadable { .. }));
}

#[test]
fn e2e_unknown_template_aborts() {
    let dir = TempDir::new().unwrap();
    let database = dir.path().join("database.xlsx");
    write_workbook(
        &database,
        &[device("host1", "missing", "10.0.0.1")],
        &["Config Template: [A]", "x"],
    );

    let session = Session::load(&database, RegistryOptions::default()).unwrap();
    let err = session
        .generate_all(&ConfigWriter::new(dir.path()), |_| {})
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Host 'host1' references unknown template 'missing'"
    );
    assert!(!dir.path().join("host1.txt").exists());
}

#[test]
fn e2e_body_before_template_header() {
    let dir = TempDir::new().unwrap();
    let database = dir.path().join("database.xlsx");
    write_workbook(
        &database,
        &[device("host1", "A", "10.0.0.1")],
        &["stray line", "Config Template: [A]"],
    );

    let err = Session::load(&database, RegistryOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        ConfgenError::TemplateBodyWithoutHeader { row: 2, .. }
    ));
}
