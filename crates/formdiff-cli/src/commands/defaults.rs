//! Defaults command

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DefaultsArgs {
    /// JSON document overriding the built-in defaults table
    #[arg(long)]
    pub defaults: Option<PathBuf>,
}

pub fn execute(args: DefaultsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let table = super::load_table(args.defaults.as_deref(), "defaults")?;
    println!("{}", serde_json::to_string_pretty(&table)?);
    Ok(())
}
