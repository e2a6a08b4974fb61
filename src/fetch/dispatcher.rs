use super::types::{FetchFailure, FetchSuccess};
use super::worker::{FetchWorker, WorkQueue};
use crate::utils::DigestAlgorithm;
use futures::future::join_all;
use log::{debug, error};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;

/// Counts reported once every task of a batch has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchReport {
    /// URLs placed on the work channel.
    pub submitted: usize,
    /// URLs claimed by workers, summed over the pool.
    pub processed: usize,
    /// Tasks that panicked instead of returning.
    pub panicked: usize,
}

/// Output side of a running dispatch: the two outcome streams.
pub(crate) struct OutcomeStreams {
    pub(crate) results: mpsc::Receiver<FetchSuccess>,
    pub(crate) failures: mpsc::Receiver<FetchFailure>,
}

/// Handles to the tasks spawned for one batch.
///
/// The feeder task submits URLs into a work channel of capacity `workers`; the worker tasks
/// consume it. Dropping the feeder's sender after the last URL closes the channel, which is the
/// only signal that ends the workers.
pub(crate) struct Dispatcher {
    feeder: JoinHandle<usize>,
    workers: Vec<JoinHandle<usize>>,
}

impl Dispatcher {
    /// Starts `workers` fetch workers and a feeder for `urls`.
    ///
    /// All three channels (work, results, failures) are bounded to the worker count, so a
    /// burst of simultaneously finishing workers always fits while the collector drains.
    ///
    /// # Arguments
    ///
    /// * `workers` - Pool size; must be at least one.
    /// * `client` - HTTP client shared by the pool.
    /// * `digest` - Digest algorithm for response bodies.
    /// * `urls` - Validated URLs, submitted in this order.
    pub(crate) fn spawn(
        workers: usize,
        client: reqwest::Client,
        digest: DigestAlgorithm,
        urls: Vec<String>,
    ) -> (Self, OutcomeStreams) {
        let (work_tx, work_rx) = mpsc::channel::<String>(workers);
        let (results_tx, results_rx) = mpsc::channel(workers);
        let (failures_tx, failures_rx) = mpsc::channel(workers);
        let queue: WorkQueue = Arc::new(Mutex::new(work_rx));

        let worker_handles = (0..workers)
            .map(|id| {
                let worker = FetchWorker {
                    id,
                    client: client.clone(),
                    digest,
                    queue: Arc::clone(&queue),
                    results: results_tx.clone(),
                    failures: failures_tx.clone(),
                };
                tokio::spawn(worker.run())
            })
            .collect();

        // Only the workers hold senders now, so the streams close when the pool is done.
        drop(results_tx);
        drop(failures_tx);

        let feeder = tokio::spawn(submit_all(urls, work_tx));

        (
            Dispatcher {
                feeder,
                workers: worker_handles,
            },
            OutcomeStreams {
                results: results_rx,
                failures: failures_rx,
            },
        )
    }

    /// Waits for the feeder and every worker to finish.
    pub(crate) async fn join(self) -> DispatchReport {
        let mut report = DispatchReport::default();

        match self.feeder.await {
            Ok(submitted) => report.submitted = submitted,
            Err(e) => {
                error!("Feeder task panicked: {:?}", e);
                report.panicked += 1;
            }
        }

        for (i, result) in join_all(self.workers).await.into_iter().enumerate() {
            match result {
                Ok(processed) => report.processed += processed,
                Err(e) => {
                    error!("Worker {} panicked: {:?}", i, e);
                    report.panicked += 1;
                }
            }
        }

        report
    }
}

/// Submits every URL in order, then closes the work channel by dropping the sender.
///
/// # Returns
///
/// The number of URLs submitted. This is less than `urls.len()` only when every worker has
/// already gone away.
async fn submit_all(urls: Vec<String>, work_tx: mpsc::Sender<String>) -> usize {
    let total = urls.len();
    let mut submitted = 0;
    for url in urls {
        if work_tx.send(url).await.is_err() {
            error!("Work channel closed after {} of {} url(s)", submitted, total);
            break;
        }
        submitted += 1;
    }
    debug!("Submitted {} url(s), closing work channel", submitted);
    submitted
}
