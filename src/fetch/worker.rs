use super::types::{FetchFailure, FetchSuccess, Outcome};
use crate::error::FailureKind;
use crate::utils::{compute_digest, DigestAlgorithm};
use log::{debug, warn};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};

/// Receiving end of the work channel, shared by every worker of a batch.
///
/// The lock is held only while waiting for the next URL, so a URL is handed to exactly one
/// worker and the fetch itself runs without holding it.
pub(crate) type WorkQueue = Arc<Mutex<mpsc::Receiver<String>>>;

/// One member of the fetch pool.
pub(crate) struct FetchWorker {
    pub(crate) id: usize,
    pub(crate) client: reqwest::Client,
    pub(crate) digest: DigestAlgorithm,
    pub(crate) queue: WorkQueue,
    pub(crate) results: mpsc::Sender<FetchSuccess>,
    pub(crate) failures: mpsc::Sender<FetchFailure>,
}

impl FetchWorker {
    /// Processes URLs until the work channel is closed and drained.
    ///
    /// Every claimed URL produces exactly one outcome on either the results or the failures
    /// channel. The loop also ends early if the collector side has been dropped, since nobody is
    /// left to read further outcomes.
    ///
    /// # Returns
    ///
    /// The number of URLs this worker claimed.
    pub(crate) async fn run(self) -> usize {
        let mut processed = 0;
        loop {
            let next = {
                let mut queue = self.queue.lock().await;
                queue.recv().await
            };
            let Some(url) = next else {
                break;
            };
            processed += 1;
            debug!("Worker {} claimed {}", self.id, url);

            let delivered = match fetch_digest(&self.client, self.digest, &url).await {
                Outcome::Success(success) => self.results.send(success).await.is_ok(),
                Outcome::Failure(failure) => {
                    warn!("Worker {} failed to fetch {}: {}", self.id, failure.url, failure.cause);
                    self.failures.send(failure).await.is_ok()
                }
            };
            if !delivered {
                warn!("Worker {} stopping: outcome receiver dropped", self.id);
                break;
            }
        }
        debug!("Worker {} finished after {} url(s)", self.id, processed);
        processed
    }
}

/// Fetches a single URL and digests its body.
///
/// Issues a GET through `client` (which carries the request timeout), reads the whole body and
/// hashes the raw bytes. The HTTP status is not inspected; any body that arrives in full is
/// digested.
///
/// # Arguments
///
/// * `client` - The shared HTTP client.
/// * `algorithm` - The digest to compute.
/// * `url` - The URL to fetch.
///
/// # Returns
///
/// `Outcome::Success` with the digest, or `Outcome::Failure` tagged with the failing stage.
///
/// # Examples
///
/// ```rust,no_run
/// use std::time::Duration;
/// use url_hasher::fetch::fetch_digest;
/// use url_hasher::utils::DigestAlgorithm;
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let client = reqwest::Client::builder().timeout(Duration::from_secs(3)).build()?;
///     let outcome = fetch_digest(&client, DigestAlgorithm::Md5, "https://example.com").await;
///     println!("{}", outcome);
///     Ok(())
/// }
/// ```
pub async fn fetch_digest(client: &reqwest::Client, algorithm: DigestAlgorithm, url: &str) -> Outcome {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(err) => return failure(url, classify(&err, FailureKind::Transport), &err),
    };

    let body = match response.bytes().await {
        Ok(body) => body,
        Err(err) => return failure(url, classify(&err, FailureKind::BodyRead), &err),
    };

    let digest = compute_digest(algorithm, &body);
    Outcome::Success(FetchSuccess {
        url: url.to_string(),
        digest_hex: hex::encode(&digest),
        digest,
    })
}

/// Refines the stage-based failure kind: a timeout wins over the stage it happened in.
fn classify(err: &reqwest::Error, stage: FailureKind) -> FailureKind {
    if err.is_timeout() {
        FailureKind::Timeout
    } else {
        stage
    }
}

fn failure(url: &str, kind: FailureKind, err: &reqwest::Error) -> Outcome {
    Outcome::Failure(FetchFailure {
        url: url.to_string(),
        kind,
        cause: err.to_string(),
    })
}
