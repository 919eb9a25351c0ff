//! FormDiff CLI
//!
//! Command-line interface for the form revision diff engine

use clap::{Parser, Subcommand};
use formdiff_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "formdiff")]
#[command(about = "FormDiff - Structural diffs between form revisions", long_about = None)]
struct Cli {
    /// Log output format on stderr (human or json)
    #[arg(long, global = true, default_value = "human")]
    log_format: Profile,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Diff two snapshot files and print the report
    Diff(commands::diff::DiffArgs),
    /// Print the content digest of a snapshot file
    Digest(commands::digest::DigestArgs),
    /// Print the effective defaults table
    Defaults(commands::defaults::DefaultsArgs),
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.log_format);

    let result = match cli.command {
        Commands::Diff(args) => commands::diff::execute(args),
        Commands::Digest(args) => commands::digest::execute(args),
        Commands::Defaults(args) => commands::defaults::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
