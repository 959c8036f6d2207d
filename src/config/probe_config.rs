use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use serde::Deserialize;

use crate::http_probe::batch::DEFAULT_DELAY;
use crate::http_probe::probe::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};

/// Probe and report settings, read from the YAML config file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProbeConfig {
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Pause between two consecutive probes, in milliseconds. Zero disables it.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Number of probes allowed in flight at once. 1 probes strictly one after another.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Directory the report files are written to.
    #[serde(default = "default_report_dir")]
    pub report_dir: PathBuf,

    /// Targets checked by the "default websites" action.
    #[serde(default = "default_targets")]
    pub default_targets: Vec<String>,
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

fn default_delay_ms() -> u64 {
    DEFAULT_DELAY.as_millis() as u64
}

fn default_concurrency() -> usize {
    1
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_report_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_targets() -> Vec<String> {
    [
        "google.com",
        "github.com",
        "youtube.com",
        "facebook.com",
        "twitter.com",
        "instagram.com",
        "linkedin.com",
        "wikipedia.org",
        "amazon.com",
        "netflix.com",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout_seconds(),
            delay_ms: default_delay_ms(),
            concurrency: default_concurrency(),
            user_agent: default_user_agent(),
            report_dir: default_report_dir(),
            default_targets: default_targets(),
        }
    }
}

impl ProbeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn apply(&mut self, overrides: &ProbeOverrides) {
        if let Some(timeout) = overrides.timeout_secs {
            self.timeout_seconds = timeout;
        }
        if let Some(delay) = overrides.delay_ms {
            self.delay_ms = delay;
        }
        if let Some(concurrency) = overrides.concurrency {
            self.concurrency = concurrency;
        }
        if let Some(dir) = &overrides.report_dir {
            self.report_dir = dir.clone();
        }
    }
}

/// Command line flags that take precedence over the config file.
#[derive(Debug, Clone, Default, Args)]
pub struct ProbeOverrides {
    /// Per-request timeout in seconds
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Delay between probes in milliseconds (0 disables it)
    #[arg(long, global = true)]
    pub delay_ms: Option<u64>,

    /// Number of probes run in parallel; results keep input order
    #[arg(long, global = true)]
    pub concurrency: Option<usize>,

    /// Directory where reports are written
    #[arg(long, global = true)]
    pub report_dir: Option<PathBuf>,
}
