//! The `merge` subcommand: baseline + candidate -> stdout or a file.

use super::utils::resolve_keys;
use crate::{document, merge::merge_by_patterns};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct MergeArgs {
    /// Baseline YAML document
    #[arg(long)]
    old: PathBuf,

    /// Candidate YAML document supplying replacement values
    #[arg(long)]
    new: PathBuf,

    /// Dot-path pattern to merge along (repeatable, applied in order)
    #[arg(short, long = "key")]
    keys: Vec<String>,

    /// Config file carrying default keys (ymerge.toml / ymerge.yaml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the merged document here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn run(args: MergeArgs) -> Result<()> {
    let patterns = resolve_keys(&args.keys, args.config.as_deref())?;

    let old = document::load(&args.old)?;
    let new = document::load(&args.new)?;
    let merged = merge_by_patterns(&old, &new, &patterns);

    match args.output {
        Some(path) => {
            document::save(&path, &merged)?;
            tracing::info!(path = %path.display(), "merged document written");
        }
        None => {
            let text = document::to_string(&merged)?;
            print!("{text}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn merges_two_files_into_output() {
        let tmp = TempDir::new().expect("tmp");
        let old = tmp.path().join("old.yaml");
        let new = tmp.path().join("new.yaml");
        let out = tmp.path().join("out.yaml");
        fs::write(&old, "info:\n  name: Old\n  version: '1.0'\n").expect("old");
        fs::write(&new, "info:\n  name: New\n").expect("new");

        run(MergeArgs {
            old,
            new,
            keys: vec!["info.name".to_string()],
            config: None,
            output: Some(out.clone()),
        })
        .expect("merge");

        let merged = document::load(&out).expect("reload");
        assert_eq!(merged.get("info").and_then(|i| i.get("name")).and_then(|v| v.as_str()), Some("New"));
        assert_eq!(
            merged.get("info").and_then(|i| i.get("version")).and_then(|v| v.as_str()),
            Some("1.0")
        );
    }

    #[test]
    fn missing_baseline_file_is_an_error() {
        let tmp = TempDir::new().expect("tmp");
        let new = tmp.path().join("new.yaml");
        fs::write(&new, "a: 1\n").expect("new");

        let result = run(MergeArgs {
            old: tmp.path().join("absent.yaml"),
            new,
            keys: vec!["a".to_string()],
            config: None,
            output: None,
        });
        assert!(result.is_err());
    }
}
