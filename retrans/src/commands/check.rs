//! `check` command: loads and validates a mapping file.

use anyhow::Result;
use log::info;
use std::path::Path;

use retrans_core::TransliterationConfig;

/// Loads `path`, which validates every mapping, and returns the summary line.
pub fn run_check(path: &Path) -> Result<String> {
    let config = TransliterationConfig::load_from_file(path)?;
    info!("Mapping file {} is valid.", path.display());
    Ok(format!(
        "OK: {} mapping(s), {} rule(s)",
        config.mappings.len(),
        config.rule_count()
    ))
}
