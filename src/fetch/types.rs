use crate::error::FailureKind;
use std::fmt;

/// A URL whose body was fetched and digested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSuccess {
    /// The URL as it was dispatched.
    pub url: String,
    /// Raw digest bytes (16 for MD5, 32 for SHA-256).
    pub digest: Vec<u8>,
    /// `digest` rendered as lowercase hexadecimal.
    pub digest_hex: String,
}

/// A URL whose fetch failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    /// The URL as it was dispatched.
    pub url: String,
    /// Which stage failed.
    pub kind: FailureKind,
    /// Description of the underlying error.
    pub cause: String,
}

/// The single result produced for one dispatched URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(FetchSuccess),
    Failure(FetchFailure),
}

impl Outcome {
    /// The URL this outcome belongs to.
    pub fn url(&self) -> &str {
        match self {
            Outcome::Success(success) => &success.url,
            Outcome::Failure(failure) => &failure.url,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }
}

impl fmt::Display for FetchSuccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.url, self.digest_hex)
    }
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.url, self.cause)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(success) => fmt::Display::fmt(success, f),
            Outcome::Failure(failure) => fmt::Display::fmt(failure, f),
        }
    }
}
