use std::path::Path;

use crate::error::InputError;

/// Parse a targets list: one per line, `#` starts a comment line, blank lines are skipped.
/// CSV rows contribute their first column.
pub fn parse_targets(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.split(',').next().unwrap_or(line).trim().to_string())
        .filter(|target| !target.is_empty())
        .collect()
}

pub fn read_targets_file(path: &Path) -> Result<Vec<String>, InputError> {
    let content = std::fs::read_to_string(path).map_err(|source| InputError::ReadTargets {
        path: path.to_path_buf(),
        source,
    })?;
    let targets = parse_targets(&content);
    log::info!("Read {} targets from {}", targets.len(), path.display());
    Ok(targets)
}
