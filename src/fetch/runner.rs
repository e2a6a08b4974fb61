use super::collector::Collector;
use super::dispatcher::{DispatchReport, Dispatcher};
use super::types::{FetchFailure, FetchSuccess, Outcome};
use crate::config::FetchConfig;
use crate::error::{validate_params, BatchError};
use crate::urls::prepare_urls;
use anyhow::{Context, Result as AnyhowResult};
use log::{info, warn};
use tokio::sync::mpsc;

/// Entry point for batch runs.
///
/// Holds the configuration and the HTTP client built from it. The client is cheap to clone and
/// is shared by every worker of every batch started from this runner.
pub struct BatchRunner {
    config: FetchConfig,
    client: reqwest::Client,
}

impl BatchRunner {
    /// Builds a runner and its HTTP client.
    ///
    /// # Returns
    ///
    /// * `Ok(BatchRunner)` - Ready to start batches.
    /// * `Err(anyhow::Error)` - The HTTP client could not be constructed.
    pub fn new(config: FetchConfig) -> AnyhowResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Validates parameters and URLs, then starts fetching.
    ///
    /// Parameter checks run first and synchronously: a worker count below one or an empty URL
    /// list is rejected before any task is spawned or request sent. URLs that stay invalid after
    /// scheme repair are excluded from dispatch and reported through `Batch::invalid_urls`.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Arguments
    ///
    /// * `urls` - The caller-supplied URL strings.
    ///
    /// # Returns
    ///
    /// * `Ok(Batch)` - The running batch.
    /// * `Err(BatchError)` - A parameter was rejected; nothing was started.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use url_hasher::config::FetchConfig;
    /// use url_hasher::fetch::BatchRunner;
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let runner = BatchRunner::new(FetchConfig::default().with_workers(3))?;
    ///     let mut batch = runner.start(&["https://example.com", "example.org"])?;
    ///     for url in batch.invalid_urls() {
    ///         println!("Invalid url: {:?}", url);
    ///     }
    ///     while let Some(outcome) = batch.next_outcome().await {
    ///         println!("{}", outcome);
    ///     }
    ///     batch.finish().await;
    ///     Ok(())
    /// }
    /// ```
    pub fn start<S: AsRef<str>>(&self, urls: &[S]) -> Result<Batch, BatchError> {
        validate_params(self.config.workers, urls)?;

        let prepared = prepare_urls(urls, &self.config.default_scheme);
        for invalid in &prepared.invalid {
            warn!("Invalid url: {:?}", invalid);
        }

        let expected = prepared.valid.len();
        info!(
            "Dispatching {} url(s) to {} worker(s), {} invalid",
            expected,
            self.config.workers,
            prepared.invalid.len()
        );

        let (dispatcher, streams) = Dispatcher::spawn(
            self.config.workers,
            self.client.clone(),
            self.config.digest,
            prepared.valid.clone(),
        );

        Ok(Batch {
            dispatched: prepared.valid,
            invalid: prepared.invalid,
            collector: Collector::new(streams.results, streams.failures, expected),
            dispatcher,
        })
    }

    /// Starts a batch and waits for all of its outcomes.
    pub async fn run<S: AsRef<str>>(&self, urls: &[S]) -> Result<BatchOutput, BatchError> {
        let mut batch = self.start(urls)?;
        let outcomes = batch.collect().await;
        let invalid = batch.invalid.clone();
        let report = batch.finish().await;
        Ok(BatchOutput {
            invalid,
            outcomes,
            report,
        })
    }
}

/// Everything a finished batch produced.
#[derive(Debug, Clone)]
pub struct BatchOutput {
    /// URLs rejected before dispatch, in their original form.
    pub invalid: Vec<String>,
    /// One outcome per dispatched URL, in arrival order.
    pub outcomes: Vec<Outcome>,
    /// Task-level counts.
    pub report: DispatchReport,
}

/// A running batch.
pub struct Batch {
    dispatched: Vec<String>,
    invalid: Vec<String>,
    collector: Collector,
    dispatcher: Dispatcher,
}

impl Batch {
    /// URLs that failed validation before and after repair; they are never fetched.
    pub fn invalid_urls(&self) -> &[String] {
        &self.invalid
    }

    /// URLs handed to the workers, in submission order.
    pub fn dispatched_urls(&self) -> &[String] {
        &self.dispatched
    }

    /// Number of outcomes this batch will yield.
    pub fn expected(&self) -> usize {
        self.collector.expected()
    }

    /// Waits for the next outcome; `None` once every dispatched URL has one.
    pub async fn next_outcome(&mut self) -> Option<Outcome> {
        self.collector.next_outcome().await
    }

    /// Waits for every remaining outcome.
    pub async fn collect(&mut self) -> Vec<Outcome> {
        self.collector.collect().await
    }

    /// Waits for the feeder and worker tasks to exit.
    ///
    /// Call after the outcomes have been drained; the workers exit once the work channel is
    /// closed and empty.
    pub async fn finish(self) -> DispatchReport {
        // Dropping the receivers first lets any worker still blocked on a send exit.
        drop(self.collector);
        let report = self.dispatcher.join().await;
        info!(
            "Batch finished: {} submitted, {} processed",
            report.submitted, report.processed
        );
        report
    }

    /// Hands the raw outcome streams to the caller, who must drain `expected()` items in total.
    ///
    /// The spawned tasks keep running detached and exit on their own once the work is done or
    /// the returned receivers are dropped.
    pub fn into_streams(self) -> (mpsc::Receiver<FetchSuccess>, mpsc::Receiver<FetchFailure>) {
        self.collector.into_streams()
    }
}
