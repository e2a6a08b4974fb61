//! URL Hasher Library
//!
//! This library fetches a batch of URLs concurrently with a fixed pool of workers, computes a
//! content digest of each response body, and reports either the digest or the failure reason
//! for every URL.
//!

pub mod config;
pub mod error;
pub mod fetch;
pub mod urls;
pub mod utils;
