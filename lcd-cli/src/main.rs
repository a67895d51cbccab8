//! lcd command-line checker
//!
//! Loads a JSON document through one of the built-in record types, then
//! prints either its canonical dump or the validation errors.
//!
//! Usage:
//!   lcd-cli check --schema widget widget.json
//!   cat person.json | lcd-cli check --schema person --pretty -
//!   lcd-cli fields --schema person

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lcd_cli::{CheckReport, SchemaName, check_document, describe_fields, read_input};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "lcd-cli")]
#[command(about = "Load, check, and dump documents against lcd record types")]
struct Args {
    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a document and print its canonical form
    Check {
        /// Record type to load the document as
        #[arg(short, long, value_enum)]
        schema: SchemaName,

        /// Indent the dumped output
        #[arg(long)]
        pretty: bool,

        /// Document path, or `-` for stdin
        path: PathBuf,
    },
    /// List a record type's declared fields
    Fields {
        #[arg(short, long, value_enum)]
        schema: SchemaName,
    },
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match args.command {
        Command::Check {
            schema,
            pretty,
            path,
        } => {
            let raw = read_input(&path)?;
            info!(path = %path.display(), ?schema, "checking document");
            let report = check_document(schema, &raw, pretty)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            println!("{report}");
            Ok(match report {
                CheckReport::Valid(_) => ExitCode::SUCCESS,
                CheckReport::Invalid(_) => ExitCode::FAILURE,
            })
        }
        Command::Fields { schema } => {
            for line in describe_fields(schema) {
                println!("{line}");
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
