//! Digest command

use clap::Args;
use formdiff_core::errors::ExError;
use formdiff_core::{compute_snapshot_digest, parse_snapshot_bytes};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DigestArgs {
    /// Snapshot file to hash
    pub snapshot: PathBuf,
}

pub fn execute(args: DigestArgs) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = super::read_file(&args.snapshot, "digest")?;
    let snapshot = parse_snapshot_bytes(&bytes)?;
    let digest = compute_snapshot_digest(&snapshot).map_err(|e| ExError::from(e).with_op("digest"))?;
    println!("{}", digest);
    Ok(())
}
