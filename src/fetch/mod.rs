//! # Concurrent Fetching and Digesting of URL Batches
//!
//! This module runs the fetch pipeline for a batch of URLs. Validated URLs are fed into a
//! bounded work channel, a fixed pool of workers claims them one at a time, fetches each with
//! a per-request timeout and digests the body, and a collector drains the success and failure
//! streams until every dispatched URL has produced exactly one outcome.
//!
//! ## Usage
//!
//! Build a `BatchRunner` from a `FetchConfig`, then call `start` for streaming consumption or
//! `run` to wait for the whole batch.
//!
//! ## Submodules
//!
//! - **collector**: Multiplexed drain of the two outcome streams.
//! - **dispatcher**: Work channel, worker pool and feeder task.
//! - **runner**: The batch entry point.
//! - **types**: Success, failure and outcome records.
//! - **worker**: The per-URL fetch and digest loop.

mod collector;
mod dispatcher;
mod runner;
mod types;
mod worker;

pub use collector::Collector;
pub use dispatcher::DispatchReport;
pub use runner::{Batch, BatchOutput, BatchRunner};
pub use types::{FetchFailure, FetchSuccess, Outcome};
pub use worker::fetch_digest;
