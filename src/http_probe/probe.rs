use std::time::{Duration, Instant};

use reqwest::Client;
use reqwest::redirect::Policy;

use super::error_chain;
use super::prelude::*;
use crate::error::ConfigError;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_USER_AGENT: &str = concat!("webcheck/", env!("CARGO_PKG_VERSION"));
const MAX_REDIRECTS: usize = 30;

/// Prefix `https://` unless the target already names an http(s) scheme.
pub fn normalize_url(target: &str) -> String {
    if target.starts_with("http://") || target.starts_with("https://") {
        target.to_string()
    } else {
        format!("https://{target}")
    }
}

fn to_millis(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 100_000.0).round() / 100.0
}

/// Issues one timed GET per target and classifies what came back.
#[derive(Debug, Clone)]
pub struct Prober {
    client: Client,
}

impl Prober {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Probe a single target. Every transport failure is folded into an unreachable result.
    pub async fn probe(&self, target: &str) -> ProbeResult {
        let url = normalize_url(target);

        let start = Instant::now();
        let fetched = self.fetch(&url).await;
        let elapsed = start.elapsed();

        match fetched {
            Ok(status_code) => {
                let response_time_ms = to_millis(elapsed);
                log::debug!("{url} answered {status_code} in {response_time_ms:.2}ms");
                ProbeResult::responded(target, &url, status_code, response_time_ms)
            }
            Err(e) => {
                log::debug!("{url} unreachable: {}", error_chain(&e));
                ProbeResult::unreachable(target, &url)
            }
        }
    }

    // The body is drained inside the timed window so a stalled transfer counts as a failure.
    async fn fetch(&self, url: &str) -> Result<u16, reqwest::Error> {
        let response = self.client.get(url).send().await?;
        let status_code = response.status().as_u16();
        response.bytes().await?;
        Ok(status_code)
    }
}
