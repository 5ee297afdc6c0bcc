//! Shared CLI utilities.

use crate::config::load_config;
use crate::pattern::Pattern;
use anyhow::{bail, Context, Result};
use std::path::Path;

/// Resolve the merge-key patterns for a run.
///
/// `--key` flags take precedence; without them the config file (explicit or
/// auto-discovered in the working directory) supplies the keys. At least one
/// key must come from somewhere.
pub fn resolve_keys(cli_keys: &[String], config_path: Option<&Path>) -> Result<Vec<Pattern>> {
    let raw_keys = if cli_keys.is_empty() {
        let work_dir = std::env::current_dir().context("cannot determine working directory")?;
        load_config(&work_dir, config_path)?.keys
    } else {
        cli_keys.to_vec()
    };

    if raw_keys.is_empty() {
        bail!("No merge keys specified: pass --key or provide a ymerge config file");
    }

    Pattern::parse_all(&raw_keys).context("invalid merge key pattern")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn cli_keys_take_precedence_over_config() {
        let tmp = TempDir::new().expect("tmp");
        let config = tmp.path().join("ymerge.toml");
        fs::write(&config, "keys = [\"from.config\"]\n").expect("write");

        let keys =
            resolve_keys(&["info.name".to_string()], Some(&config)).expect("keys");
        assert_eq!(keys.len(), 1);
        assert_eq!(keys[0].to_string(), "info.name");
    }

    #[test]
    fn invalid_cli_key_is_an_error() {
        assert!(resolve_keys(&["a..b".to_string()], None).is_err());
    }
}
