use super::types::{FetchFailure, FetchSuccess, Outcome};
use log::error;
use tokio::sync::mpsc;

/// Drains the success and failure streams of a batch.
///
/// The collector knows how many URLs were dispatched and stops after observing exactly that
/// many outcomes. Outcomes are yielded in arrival order, whichever stream is ready first; no
/// relation to submission order is assumed. If both streams close early (every worker gone)
/// the collector stops rather than waiting forever.
pub struct Collector {
    results: mpsc::Receiver<FetchSuccess>,
    failures: mpsc::Receiver<FetchFailure>,
    expected: usize,
    observed: usize,
}

impl Collector {
    /// Creates a collector expecting `expected` outcomes across both streams.
    pub fn new(
        results: mpsc::Receiver<FetchSuccess>,
        failures: mpsc::Receiver<FetchFailure>,
        expected: usize,
    ) -> Self {
        Self {
            results,
            failures,
            expected,
            observed: 0,
        }
    }

    /// Number of outcomes the collector waits for in total.
    pub fn expected(&self) -> usize {
        self.expected
    }

    /// Number of outcomes observed so far.
    pub fn observed(&self) -> usize {
        self.observed
    }

    /// Waits for the next outcome from either stream.
    ///
    /// # Returns
    ///
    /// * `Some(Outcome)` - The next outcome to arrive.
    /// * `None` - All expected outcomes were observed, or both streams closed first.
    pub async fn next_outcome(&mut self) -> Option<Outcome> {
        if self.observed >= self.expected {
            return None;
        }

        let outcome = tokio::select! {
            Some(success) = self.results.recv() => Outcome::Success(success),
            Some(failure) = self.failures.recv() => Outcome::Failure(failure),
            else => {
                error!(
                    "Outcome streams closed after {} of {} outcome(s)",
                    self.observed, self.expected
                );
                self.expected = self.observed;
                return None;
            }
        };

        self.observed += 1;
        Some(outcome)
    }

    /// Waits for every remaining outcome.
    pub async fn collect(&mut self) -> Vec<Outcome> {
        let mut outcomes = Vec::with_capacity(self.expected - self.observed);
        while let Some(outcome) = self.next_outcome().await {
            outcomes.push(outcome);
        }
        outcomes
    }

    /// Gives back the raw streams, for callers that drain them directly.
    pub fn into_streams(self) -> (mpsc::Receiver<FetchSuccess>, mpsc::Receiver<FetchFailure>) {
        (self.results, self.failures)
    }
}
