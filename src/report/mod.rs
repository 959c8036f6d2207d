use std::fmt::Write;

use chrono::{DateTime, TimeZone};

use crate::http_probe::result::{Category, ProbeResult};
use crate::resolver::Resolve;

pub mod writer;

const HEADER: &str = "\
╔══════════════════════════════════════════════════════════════╗
║                    WEBSITE STATUS REPORT                     ║
╚══════════════════════════════════════════════════════════════╝";
const SEPARATOR_WIDTH: usize = 60;
const GENERATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Aggregate counts over one batch of results.
/// `online` and `offline` are disjoint; redirects and HTTP errors only count towards `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub online: usize,
    pub offline: usize,
    pub errors: usize,
}

impl Summary {
    pub fn from_results(results: &[ProbeResult]) -> Self {
        results.iter().fold(Summary::default(), |mut summary, result| {
            summary.total += 1;
            match result.category() {
                Category::Online => summary.online += 1,
                Category::Offline => summary.offline += 1,
                category if category.is_error() => summary.errors += 1,
                _ => {}
            }
            summary
        })
    }
}

/// Render the plain-text report. IP addresses are looked up while rendering.
pub async fn build_report<Tz, R>(
    results: &[ProbeResult],
    generated_at: &DateTime<Tz>,
    resolver: &R,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
    R: Resolve,
{
    let summary = Summary::from_results(results);
    let mut report = String::new();

    let _ = writeln!(report, "{HEADER}");
    let _ = writeln!(report);
    let _ = writeln!(report, "Generated: {}", generated_at.format(GENERATED_FORMAT));
    let _ = writeln!(report);
    let _ = writeln!(report, "📊 SUMMARY:");
    let _ = writeln!(report, "• Websites Checked: {}", summary.total);
    let _ = writeln!(report, "• Online: {}", summary.online);
    let _ = writeln!(report, "• Offline: {}", summary.offline);
    let _ = writeln!(report, "• Errors: {}", summary.errors);
    let _ = writeln!(report);
    let _ = writeln!(report, "📋 DETAILED RESULTS:");

    for (index, result) in results.iter().enumerate() {
        let ip = resolver.resolve(&result.target).await;

        let _ = writeln!(report);
        let _ = writeln!(report, "{}", "=".repeat(SEPARATOR_WIDTH));
        let _ = writeln!(report, "[{}] Website: {}", index + 1, result.target);
        let _ = writeln!(report, "    Status: {}", result.category());
        let _ = writeln!(report, "    HTTP Code: {}", result.code_text());
        let _ = writeln!(report, "    Response Time: {}", result.response_time_text());
        let _ = writeln!(report, "    IP Address: {ip}");
    }

    report
}
