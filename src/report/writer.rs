use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};

use super::build_report;
use crate::error::ReportError;
use crate::http_probe::result::ProbeResult;
use crate::resolver::Resolve;

const FILENAME_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// `website_report_<YYYY-MM-DD_HH-MM-SS>.txt`
pub fn report_filename<Tz>(generated_at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!("website_report_{}.txt", generated_at.format(FILENAME_FORMAT))
}

/// Render and write the report into `dir`.
/// Returns `Ok(None)` without touching the filesystem when there is nothing to report.
pub async fn save_report<Tz, R>(
    dir: &Path,
    results: &[ProbeResult],
    generated_at: &DateTime<Tz>,
    resolver: &R,
) -> Result<Option<PathBuf>, ReportError>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
    R: Resolve,
{
    if results.is_empty() {
        log::debug!("No results, skipping report");
        return Ok(None);
    }

    let report = build_report(results, generated_at, resolver).await;

    fs::create_dir_all(dir).map_err(|source| ReportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(report_filename(generated_at));
    fs::write(&path, report).map_err(|source| ReportError::Write {
        path: path.clone(),
        source,
    })?;

    log::info!("Wrote report for {} targets to {}", results.len(), path.display());
    Ok(Some(path))
}
