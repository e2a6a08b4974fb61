//! Configuration for a batch run.
//!
//! Every tunable of the pipeline lives in [`FetchConfig`] and is handed explicitly to the
//! runner, so two runs in the same process (or two tests) never share settings.

use crate::urls::DEFAULT_SCHEME;
use crate::utils::DigestAlgorithm;
use std::time::Duration;

/// Default number of parallel fetch workers.
pub const DEFAULT_WORKERS: usize = 10;

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(3);

/// Settings for one batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Number of fetch workers; also the capacity of every channel in the pipeline.
    pub workers: usize,
    /// Timeout applied by the HTTP client to each individual request, body included.
    pub request_timeout: Duration,
    /// Prefix prepended to URLs that are missing a scheme.
    pub default_scheme: String,
    /// Hash applied to each response body.
    pub digest: DigestAlgorithm,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            default_scheme: DEFAULT_SCHEME.to_string(),
            digest: DigestAlgorithm::default(),
        }
    }
}

impl FetchConfig {
    /// Returns a copy with a different worker count.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Returns a copy with a different request timeout.
    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    /// Returns a copy with a different digest algorithm.
    pub fn with_digest(mut self, digest: DigestAlgorithm) -> Self {
        self.digest = digest;
        self
    }
}
