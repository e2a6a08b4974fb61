//! # Preparing Caller-Supplied URLs for Dispatch
//!
//! This module turns the raw list of URL strings handed to a batch run into the list that is
//! actually dispatched to fetch workers. Strings are validated syntactically; the ones that fail
//! get a second chance after a default scheme is prepended, and whatever still fails is reported
//! back to the caller as invalid and never fetched.
//!
//! ## Usage
//!
//! The main entry point is `prepare_urls`, which runs both validation passes and returns a
//! `ValidationOutcome`. `validate_urls` and `repair_urls` are exposed for callers that need a
//! single pass.
//!
//! ## Submodules
//!
//! - **normalize**: Prepends the default scheme to URLs without a recognized one.
//! - **validate**: Partitions URLs into valid and invalid subsets.
//! - **types**: Defines the `ValidationOutcome` partition.

mod normalize;
mod types;
mod validate;

pub use normalize::{has_recognized_scheme, repair_urls, DEFAULT_SCHEME, RECOGNIZED_SCHEMES};
pub use types::ValidationOutcome;
pub use validate::{is_valid_url, prepare_urls, validate_urls};
