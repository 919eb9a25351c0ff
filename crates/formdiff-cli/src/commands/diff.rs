//! Diff command

use clap::Args;
use formdiff_core::{diff_snapshots, DiffOptions};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Snapshot file for the prior revision
    pub before: PathBuf,

    /// Snapshot file for the proposed revision
    pub after: PathBuf,

    /// JSON document overriding the built-in defaults table
    #[arg(long)]
    pub defaults: Option<PathBuf>,

    /// Extra property keys to ignore at every depth
    #[arg(long = "ignore", value_name = "KEY")]
    pub ignore: Vec<String>,

    #[arg(long)]
    pub pretty: bool,
}

pub fn execute(args: DiffArgs) -> Result<(), Box<dyn std::error::Error>> {
    let before = super::read_file(&args.before, "diff")?;
    let after = super::read_file(&args.after, "diff")?;
    let table = super::load_table(args.defaults.as_deref(), "diff")?;

    let options = DiffOptions {
        table,
        ignored_keys: args.ignore,
    };
    let report = diff_snapshots(&before, &after, &options)?;

    let out = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", out);
    Ok(())
}
