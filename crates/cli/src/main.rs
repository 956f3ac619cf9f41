//! pm2oa CLI
//!
//! Command-line interface for converting Postman collections to OpenAPI
//! specifications.

use anyhow::Result;
use clap::Parser;
use colored::*;
use pm2oa_core::{collection, input, output, InputSource, OutputFormat};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "pm2oa")]
#[command(version, about = "Convert Postman collections to OpenAPI specifications", long_about = None)]
#[command(after_help = "EXAMPLES:\n  \
    # Convert a local collection to stdout\n  \
    pm2oa collection.json\n\n  \
    # Fetch a collection over HTTP and write YAML\n  \
    pm2oa https://example.com/collection.json -o openapi.yaml\n\n  \
    # Pipe a collection through, forcing a format\n  \
    cat collection.json | pm2oa --format yaml")]
struct Cli {
    /// Input file path or URL to a Postman collection (reads stdin when omitted)
    input: Option<String>,

    /// Output file path (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format: "json" or "yaml" (defaults derived from the output extension, else json)
    #[arg(short, long, value_name = "FORMAT")]
    format: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    // The fetch capability must exist before any work happens, argument
    // parsing included.
    let client = match input::http_client() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    // Usage errors exit 1 like every other failure; --help and --version
    // keep clap's exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    if let Err(e) = convert_command(&cli, &client) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn convert_command(cli: &Cli, client: &input::HttpClient) -> Result<()> {
    // Resolved once, before any conversion work is spent on it.
    let format = OutputFormat::resolve(cli.format.as_deref(), cli.output.as_deref())?;

    let source = InputSource::from_arg(cli.input.as_deref());

    if cli.verbose {
        eprintln!("{} Reading collection from {}", "→".cyan(), source);
        eprintln!("{} Output format: {}", "→".cyan(), format.to_string().yellow());
    }

    let raw = source.resolve(client)?;
    let parsed = collection::parse(&raw)?;

    if cli.verbose {
        eprintln!("{} Converting collection...", "→".cyan());
    }

    let document = collection::convert(&parsed)?;

    if cli.verbose {
        let paths = document["paths"].as_object().map_or(0, |p| p.len());
        eprintln!("{} Converted {} path(s)", "✓".green(), paths);
    }

    let rendered = output::render(&document, format)?;

    match &cli.output {
        Some(path) => {
            output::write_file(path, &rendered)?;
            eprintln!(
                "{} OpenAPI specification written to {}",
                "✓".green(),
                path.display()
            );
        }
        None => {
            print!("{rendered}");
        }
    }

    Ok(())
}
