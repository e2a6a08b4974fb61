//! Error taxonomy for batch runs.
//!
//! Per-URL problems (transport, timeout, body read) never surface as `Err`; they travel as
//! [`FetchFailure`](crate::fetch::FetchFailure) values tagged with a [`FailureKind`]. Only the
//! parameter checks performed before any work starts produce a [`BatchError`].

use std::fmt;
use thiserror::Error;

/// Category of a failure, shared by per-URL failures and pre-dispatch errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Connection, DNS, unsupported scheme or other request-level failure.
    Transport,
    /// The request did not complete within the configured timeout.
    Timeout,
    /// The response arrived but streaming its body failed.
    BodyRead,
    /// The URL did not parse, before or after scheme repair.
    Validation,
    /// The batch parameters were rejected.
    Parameter,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureKind::Transport => "transport",
            FailureKind::Timeout => "timeout",
            FailureKind::BodyRead => "body-read",
            FailureKind::Validation => "validation",
            FailureKind::Parameter => "parameter",
        };
        f.write_str(name)
    }
}

/// Errors that reject a batch before anything is dispatched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BatchError {
    /// The worker count was below one.
    #[error("Invalid number of parallel workers: {0}")]
    InvalidWorkerCount(usize),

    /// No URLs were supplied.
    #[error("List of urls to visit is empty")]
    EmptyUrlList,
}

impl BatchError {
    /// The failure category of this error.
    pub fn kind(&self) -> FailureKind {
        match self {
            BatchError::InvalidWorkerCount(_) | BatchError::EmptyUrlList => FailureKind::Parameter,
        }
    }
}

/// Result type for batch setup.
pub type Result<T> = std::result::Result<T, BatchError>;

/// Checks the batch parameters.
///
/// # Arguments
///
/// * `workers` - Number of fetch workers; must be at least one.
/// * `urls` - The URLs to visit; must not be empty.
///
/// # Returns
///
/// * `Ok(())` - Both parameters are acceptable.
/// * `Err(BatchError)` - The first rejected parameter.
pub fn validate_params<S: AsRef<str>>(workers: usize, urls: &[S]) -> Result<()> {
    if workers < 1 {
        return Err(BatchError::InvalidWorkerCount(workers));
    }
    if urls.is_empty() {
        return Err(BatchError::EmptyUrlList);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_params_accepts_valid_input() {
        assert_eq!(validate_params(10, &["https://www.test1.com"]), Ok(()));
    }

    #[test]
    fn test_validate_params_rejects_zero_workers() {
        let err = validate_params(0, &["https://www.test1.com"]).unwrap_err();
        assert_eq!(err, BatchError::InvalidWorkerCount(0));
        assert_eq!(err.kind(), FailureKind::Parameter);
    }

    #[test]
    fn test_validate_params_rejects_empty_list() {
        let urls: [&str; 0] = [];
        let err = validate_params(10, &urls).unwrap_err();
        assert_eq!(err, BatchError::EmptyUrlList);
        assert_eq!(err.to_string(), "List of urls to visit is empty");
    }

    #[test]
    fn test_worker_count_checked_first() {
        let urls: [&str; 0] = [];
        assert_eq!(validate_params(0, &urls), Err(BatchError::InvalidWorkerCount(0)));
    }
}
