//! Merge-key configuration loading
//!
//! A `ymerge.toml` / `ymerge.yaml` file can carry the default key patterns
//! so callers don't have to repeat `--key` flags. Explicit `--config` paths
//! fail hard on parse errors; auto-discovered files only warn and fall back
//! to defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MergeConfig {
    /// Dot-path patterns applied in order, e.g. `["info.name", "models.*.type"]`.
    #[serde(default)]
    pub keys: Vec<String>,
}

pub fn load_config(work_dir: &Path, config_path: Option<&Path>) -> Result<MergeConfig> {
    let config_path_provided = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(work_dir),
    };

    let Some(config_file) = discovered else {
        return Ok(MergeConfig::default());
    };

    let content = fs::read_to_string(&config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))?;

    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    let parsed = match ext.as_str() {
        "toml" => parse_toml_config(&content, &config_file),
        "yaml" | "yml" => parse_yaml_config(&content, &config_file),
        other => Err(anyhow::anyhow!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        )),
    };

    match parsed {
        Ok(cfg) => Ok(cfg),
        Err(e) if config_path_provided => Err(e),
        Err(e) => {
            // Auto-discovered: warn and keep going with defaults.
            tracing::warn!(
                "Failed to parse auto-discovered config {}: {}",
                config_file.display(),
                e
            );
            Ok(MergeConfig::default())
        }
    }
}

fn parse_toml_config(content: &str, config_file: &Path) -> Result<MergeConfig> {
    toml::from_str(content)
        .with_context(|| format!("Invalid TOML config: {}", config_file.display()))
}

fn parse_yaml_config(content: &str, config_file: &Path) -> Result<MergeConfig> {
    serde_yaml::from_str(content)
        .with_context(|| format!("Invalid YAML config: {}", config_file.display()))
}

fn discover_config(work_dir: &Path) -> Option<PathBuf> {
    let candidates = [
        "ymerge.toml",
        ".ymerge.toml",
        "ymerge.yaml",
        ".ymerge.yaml",
        "ymerge.yml",
        ".ymerge.yml",
    ];

    for candidate in candidates {
        let path = work_dir.join(candidate);
        if path.exists() {
            return Some(path);
        }
    }

    None
}
