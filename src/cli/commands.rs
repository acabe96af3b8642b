use crate::core::{RegistryOptions, Session};
use crate::error::{ConfgenError, ConfgenResult};
use crate::writer::ConfigWriter;
use colored::Colorize;
use std::path::PathBuf;

/// Execute the generate command
pub fn generate(
    input: PathBuf,
    output_dir: PathBuf,
    host: Option<String>,
    lenient: bool,
    verbose: bool,
) -> ConfgenResult<()> {
    if verbose {
        println!("{}", "📖 Reading workbook...".cyan());
        println!("   Input:  {}", input.display());
        println!("   Output: {}\n", output_dir.display());
    }

    let session = match Session::load(&input, RegistryOptions { lenient }) {
        Ok(session) => session,
        Err(e @ ConfgenError::SourceUnreadable { .. }) => {
            println!(
                "{}",
                format!("Cannot open {} file, aborting script", input.display()).red()
            );
            return Err(e);
        }
        Err(e) => return Err(e),
    };

    if verbose {
        println!(
            "   Found {} templates: {:?}",
            session.templates().len(),
            session.templates().names()
        );
        println!("   Found {} hosts\n", session.registry().len());
    }

    let writer = ConfigWriter::new(&output_dir);
    println!("Generating configuration files.....");

    let count = match host {
        Some(name) => {
            let file = session.generate_host(&name, &writer)?;
            print_generated(&file.hostname);
            1
        }
        None => session
            .generate_all(&writer, |file| print_generated(&file.hostname))?
            .len(),
    };

    println!(
        "{}",
        format!(
            "✅ {} configuration file(s) written to {}",
            count,
            output_dir.display()
        )
        .bold()
        .green()
    );
    Ok(())
}

fn print_generated(hostname: &str) {
    println!("  {} {}.txt generated", "++".green(), hostname);
}
