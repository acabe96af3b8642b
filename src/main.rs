use clap::Parser;
use riverbed_confgen::cli;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "confgen")]
#[command(about = "Generate per-appliance configuration files from a spreadsheet inventory")]
#[command(long_about = "confgen - Spreadsheet-driven appliance configuration

Reads the 'variables' and 'config-templates' sheets of a workbook and writes
one <hostname>.txt per device, with every [PLACEHOLDER] in the device's
template replaced by the matching column value.

TEMPLATES:
  Config Template: [branch]
  hostname [HOSTNAME]
  interface primary ip address [PRIMARY_IP] [PRIMARY_SUBNET]

  Placeholders match device columns by case-insensitive substring, first
  match in column order wins. Unmatched or empty values render as
  [ERROR DYNAMIC VARIABLE VALUE NOT FOUND].

EXAMPLES:
  confgen                                   # database.xls → ./<host>.txt
  confgen -i inventory.xlsx -o out/         # Custom input and output
  confgen --host branch-01                  # Regenerate one host

LOGGING:
  RUST_LOG=confgen=debug confgen            # Trace templates and skipped rows")]
#[command(version)]
struct Cli {
    /// Inventory workbook (.xls, .xlsx, .xlsb or .ods)
    #[arg(short, long, env = "CONFGEN_DATABASE", default_value = "database.xls")]
    input: PathBuf,

    /// Directory receiving the <hostname>.txt files
    #[arg(short, long, env = "CONFGEN_OUTPUT_DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Only generate this host (case-insensitive)
    #[arg(long)]
    host: Option<String>,

    /// Render missing device columns as "None" instead of failing
    #[arg(long)]
    lenient: bool,

    /// Show verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "confgen=debug,riverbed_confgen=debug"
    } else {
        "confgen=warn,riverbed_confgen=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    cli::generate(cli.input, cli.output_dir, cli.host, cli.lenient, cli.verbose)?;
    Ok(())
}
