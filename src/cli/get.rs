//! The `get` subcommand: strict dotted-path extraction from a document.

use crate::{document, lookup::extract_field};
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde_yaml::Value;
use std::path::PathBuf;

#[derive(Args)]
pub struct GetArgs {
    /// YAML document to read
    file: PathBuf,

    /// Dot-delimited path, list indices allowed (e.g. "items.0.title")
    path: String,

    /// Output format for structured values
    #[arg(long, value_enum, default_value = "yaml")]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Format {
    Yaml,
    Json,
}

pub fn run(args: GetArgs) -> Result<()> {
    let tree = document::load(&args.file)?;
    let found = extract_field(&tree, &args.path)
        .with_context(|| format!("no value at '{}' in {}", args.path, args.file.display()))?;

    println!("{}", render(found, args.format)?);
    Ok(())
}

fn render(value: &Value, format: Format) -> Result<String> {
    match format {
        Format::Yaml => match value {
            // Bare scalars print without quoting or a trailing document marker.
            Value::String(s) => Ok(s.clone()),
            other => Ok(serde_yaml::to_string(other)
                .context("failed to serialize value")?
                .trim_end()
                .to_string()),
        },
        Format::Json => serde_json::to_string_pretty(value).context("failed to serialize value"),
    }
}
