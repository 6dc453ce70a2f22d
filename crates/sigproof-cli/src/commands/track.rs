//! `sigproof track` — add request files to the configured verify list.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config::{load_config_or_default, save_config};

/// Append `paths` to the `requests` list of the config at `config_path`.
///
/// Paths already listed are skipped, and `strict` only ever switches strict
/// mode on. The config file and its directory are created when missing.
///
/// # Errors
///
/// Returns an error if the existing config cannot be read, the updated config
/// cannot be written, or writing to `out` fails.
pub fn run_track<W: Write>(
    config_path: &Path,
    paths: &[PathBuf],
    strict: bool,
    out: &mut W,
) -> Result<()> {
    let mut cfg = load_config_or_default(config_path)?;
    let mut added = 0;
    for path in paths {
        if !cfg.requests.contains(path) {
            cfg.requests.push(path.clone());
            added += 1;
        }
    }
    cfg.strict |= strict;
    save_config(&cfg, config_path)?;

    writeln!(
        out,
        "Tracking {} request file(s) ({added} added) in {}",
        cfg.requests.len(),
        config_path.display()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config;
    use tempfile::tempdir;

    #[test]
    fn track_creates_config_and_skips_duplicates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let first = PathBuf::from("assets/IN-CU006/request.json");
        let second = PathBuf::from("assets/IN-CU007/request.json");

        let mut out = Vec::new();
        run_track(&path, &[first.clone()], false, &mut out).unwrap();
        run_track(&path, &[first.clone(), second.clone()], true, &mut out).unwrap();

        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.requests, [first, second]);
        assert!(cfg.strict);
        let text = String::from_utf8(out).unwrap();
        assert!(text.lines().last().unwrap().starts_with("Tracking 2 request file(s) (1 added)"));
    }

    #[test]
    fn track_without_strict_keeps_existing_setting() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "strict = true\n").unwrap();

        run_track(&path, &[], false, &mut Vec::new()).unwrap();
        assert!(load_config(&path).unwrap().strict);
    }
}
