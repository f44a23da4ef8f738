//! Crawl orchestration.
//!
//! Fans a URL list out to one spawned fetch-validate task per URL, with a
//! semaphore bounding how many run at once, then waits for all of them.
//! Results land in a slot indexed by input position, so the output order is
//! the input order no matter which task finishes first.

mod pipeline;

use std::sync::Arc;

use futures::stream::FuturesUnordered;
use futures::StreamExt;
use log::{info, warn};
use tokio::sync::Semaphore;

use crate::config::Config;
use crate::error_handling::{ErrorType, InitializationError, ProcessingStats};
use crate::fetch::{HttpFetcher, PageFetcher};
use crate::initialization::{init_client, init_semaphore};
use crate::report::{CrawlReport, ValidationOutcome};

/// Concurrent product page checker.
///
/// A `Crawler` keeps no state between crawls apart from its statistics
/// counters; calling [`Crawler::crawl`] twice on unchanged pages yields the
/// same report.
pub struct Crawler<F: PageFetcher = HttpFetcher> {
    fetcher: Arc<F>,
    semaphore: Arc<Semaphore>,
    stats: Arc<ProcessingStats>,
    max_concurrency: usize,
    include_trace: bool,
}

impl Crawler<HttpFetcher> {
    /// Builds a crawler that fetches over HTTP with the configured client.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the client cannot be
    /// built.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        let client = init_client(config)?;
        Ok(Self::with_fetcher(HttpFetcher::new(client), config))
    }
}

impl<F: PageFetcher> Crawler<F> {
    /// Builds a crawler around any fetch implementation.
    ///
    /// `max_concurrency` is clamped to at least 1.
    pub fn with_fetcher(fetcher: F, config: &Config) -> Self {
        let max_concurrency = config.max_concurrency.max(1);
        Self {
            fetcher: Arc::new(fetcher),
            semaphore: init_semaphore(max_concurrency),
            stats: Arc::new(ProcessingStats::new()),
            max_concurrency,
            include_trace: config.include_trace,
        }
    }

    /// Error and validation-failure counters accumulated so far.
    pub fn stats(&self) -> &ProcessingStats {
        &self.stats
    }

    /// Checks every URL and aggregates the outcomes into a report.
    pub async fn crawl<I, S>(&self, urls: I) -> CrawlReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        CrawlReport::from_outcomes(self.crawl_outcomes(urls).await)
    }

    /// Checks every URL, returning one outcome per URL in input order.
    pub async fn crawl_outcomes<I, S>(&self, urls: I) -> Vec<ValidationOutcome>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let targets: Vec<Arc<str>> = urls.into_iter().map(|u| Arc::from(u.as_ref())).collect();
        if targets.is_empty() {
            info!("No URLs to crawl");
            return Vec::new();
        }

        info!(
            "Crawling {} URLs (max {} concurrent)",
            targets.len(),
            self.max_concurrency
        );
        let start_time = std::time::Instant::now();

        let mut slots: Vec<Option<ValidationOutcome>> = vec![None; targets.len()];
        let mut tasks = FuturesUnordered::new();

        for (index, url) in targets.iter().enumerate() {
            let permit = match Arc::clone(&self.semaphore).acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => {
                    warn!("Semaphore closed, not crawling URL: {url}");
                    self.stats.increment_error(ErrorType::TaskFailure);
                    slots[index] = Some(ValidationOutcome::failed(
                        url.to_string(),
                        "crawl aborted before the page was fetched",
                    ));
                    continue;
                }
            };

            let fetcher = Arc::clone(&self.fetcher);
            let stats = Arc::clone(&self.stats);
            let url = Arc::clone(url);
            let include_trace = self.include_trace;

            let handle = tokio::spawn(async move {
                let _permit = permit;
                pipeline::check_url(&*fetcher, &url, &stats, include_trace).await
            });
            tasks.push(async move { (index, handle.await) });
        }

        while let Some((index, joined)) = tasks.next().await {
            let outcome = match joined {
                Ok(outcome) => outcome,
                Err(join_error) => {
                    warn!("Crawl task for {} failed: {:?}", targets[index], join_error);
                    self.stats.increment_error(ErrorType::TaskFailure);
                    ValidationOutcome::failed(
                        targets[index].to_string(),
                        format!("crawl task failed: {join_error}"),
                    )
                }
            };
            slots[index] = Some(outcome);
        }

        let outcomes: Vec<ValidationOutcome> = slots
            .into_iter()
            .zip(&targets)
            .map(|(slot, url)| {
                slot.unwrap_or_else(|| {
                    ValidationOutcome::failed(url.to_string(), "no result recorded")
                })
            })
            .collect();

        let successful = outcomes.iter().filter(|o| o.success).count();
        info!(
            "Crawled {} URLs in {:.2} seconds ({} passed, {} failed)",
            outcomes.len(),
            start_time.elapsed().as_secs_f64(),
            successful,
            outcomes.len() - successful
        );

        outcomes
    }
}
