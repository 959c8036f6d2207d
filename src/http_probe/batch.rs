use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;
use tokio::time::sleep;

use super::prelude::*;

pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);

/// Runs the prober over a list of targets, handing results back in input order.
#[derive(Debug, Clone)]
pub struct BatchRunner {
    prober: Prober,
    delay: Duration,
    concurrency: usize,
}

impl BatchRunner {
    pub fn new(prober: Prober) -> Self {
        Self {
            prober,
            delay: DEFAULT_DELAY,
            concurrency: 1,
        }
    }

    /// Pause inserted after each probe. Zero disables it.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Probe every target once. `on_result` is called for each result as soon as it is
    /// available in input order.
    pub async fn probe_all<F>(&self, targets: &[String], mut on_result: F) -> Vec<ProbeResult>
    where
        F: FnMut(&ProbeResult),
    {
        log::debug!(
            "Probing {} targets (concurrency {}, delay {:?})",
            targets.len(),
            self.concurrency,
            self.delay
        );

        if self.concurrency == 1 {
            self.probe_sequential(targets, &mut on_result).await
        } else {
            self.probe_concurrent(targets, &mut on_result).await
        }
    }

    async fn probe_sequential<F>(&self, targets: &[String], on_result: &mut F) -> Vec<ProbeResult>
    where
        F: FnMut(&ProbeResult),
    {
        let mut results = Vec::with_capacity(targets.len());

        for (index, target) in targets.iter().enumerate() {
            let result = self.prober.probe(target).await;
            on_result(&result);
            results.push(result);

            let is_last = index + 1 == targets.len();
            if !is_last && !self.delay.is_zero() {
                sleep(self.delay).await;
            }
        }

        results
    }

    async fn probe_concurrent<F>(&self, targets: &[String], on_result: &mut F) -> Vec<ProbeResult>
    where
        F: FnMut(&ProbeResult),
    {
        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let mut handles = Vec::with_capacity(targets.len());

        for target in targets {
            let prober = self.prober.clone();
            let semaphore = semaphore.clone();
            let target = target.clone();
            let delay = self.delay;

            let handle = tokio::spawn(async move {
                let _permit = semaphore.acquire_owned().await.ok();
                let result = prober.probe(&target).await;
                if !delay.is_zero() {
                    sleep(delay).await;
                }
                result
            });

            handles.push(handle);
        }

        // Awaiting the handles in spawn order keeps the output aligned with the input.
        let mut results = Vec::with_capacity(targets.len());
        for (handle, target) in handles.into_iter().zip(targets) {
            let result = match handle.await {
                Ok(result) => result,
                Err(e) => {
                    log::error!("Probe task for {target} failed: {e}");
                    ProbeResult::unreachable(target, &normalize_url(target))
                }
            };
            on_result(&result);
            results.push(result);
        }

        results
    }
}
