//! # Utility Functions for URL Hashing
//!
//! This module provides general utility functions used throughout the application,
//! chiefly the content digest computed over each fetched response body.
//!
//! ## Submodules
//!
//! - **digest**: Contains the MD5 and SHA-256 digest helpers and the `DigestAlgorithm` selector.

mod digest;

pub use digest::{compute_digest, compute_digest_hex, DigestAlgorithm};
