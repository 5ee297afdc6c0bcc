//! The `apply` subcommand: merge a candidate into a document on disk.

use super::utils::resolve_keys;
use crate::document;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct ApplyArgs {
    /// Candidate YAML document supplying replacement values
    new: PathBuf,

    /// Document to merge into; created wholesale from the candidate if missing
    #[arg(long)]
    into: PathBuf,

    /// Dot-path pattern to merge along (repeatable, applied in order)
    #[arg(short, long = "key")]
    keys: Vec<String>,

    /// Config file carrying default keys (ymerge.toml / ymerge.yaml)
    #[arg(long)]
    config: Option<PathBuf>,
}

pub fn run(args: ApplyArgs) -> Result<()> {
    let patterns = resolve_keys(&args.keys, args.config.as_deref())?;

    let new = document::load(&args.new)?;
    document::merge_into_file(&args.into, &new, &patterns)?;
    tracing::info!(path = %args.into.display(), "document updated");
    Ok(())
}
