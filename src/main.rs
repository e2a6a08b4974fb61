//! URL Hasher: Fetch a Batch of URLs and Print a Digest per Response Body
//!
//! This application fetches every URL given on the command line with a fixed pool of parallel
//! workers and prints, for each one, either the digest of the response body or the reason the
//! fetch failed.
//!
//! ## Design Overview
//! - **Validation**: URLs are checked syntactically; ones missing a scheme get `http://`
//!   prepended and are checked again. URLs that still fail are reported and skipped.
//! - **Fetching**: A bounded pool of workers fetches the remaining URLs via the `fetch` module.
//! - **Reporting**: Outcomes are printed as they arrive, so the output order does not follow
//!   the input order.
//!
//! ## Usage
//! ```sh
//! cargo run -- --parallel 3 https://example.com example.org
//! ```
//! Configuration can also come from the environment:
//! ```sh
//! export URL_HASHER_PARALLEL=3
//! export URL_HASHER_TIMEOUT_SECS=5
//! cargo run -- https://example.com
//! ```
//! Logs go to stderr and are controlled by the `RUST_LOG` environment variable:
//! ```sh
//! RUST_LOG=debug cargo run -- https://example.com
//! ```

use anyhow::Result;
use clap::Parser;
use log::info;
use serde_json::json;
use std::time::Duration;
use url_hasher::config::FetchConfig;
use url_hasher::fetch::{BatchRunner, Outcome};
use url_hasher::utils::DigestAlgorithm;

/// Command-line arguments for the URL hasher.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of parallel workers.
    #[clap(long, env = "URL_HASHER_PARALLEL", default_value_t = 10)]
    parallel: usize,

    /// Per-request timeout in seconds.
    #[clap(long, env = "URL_HASHER_TIMEOUT_SECS", default_value_t = 3)]
    timeout_secs: u64,

    /// Scheme prepended to URLs that lack one.
    #[clap(long, env = "URL_HASHER_SCHEME", default_value = "http://")]
    scheme: String,

    /// Digest algorithm applied to each response body ("md5" or "sha256").
    #[clap(long, env = "URL_HASHER_DIGEST", default_value = "md5")]
    digest: DigestAlgorithm,

    /// Print one JSON object per line instead of plain text.
    #[clap(long, action)]
    json: bool,

    /// URLs to visit, separated by whitespace.
    urls: Vec<String>,
}

impl Args {
    fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            workers: self.parallel,
            request_timeout: Duration::from_secs(self.timeout_secs),
            default_scheme: self.scheme.clone(),
            digest: self.digest,
        }
    }
}

/// Renders an outcome as one output line.
fn render(outcome: &Outcome, as_json: bool) -> String {
    if !as_json {
        return outcome.to_string();
    }
    match outcome {
        Outcome::Success(success) => json!({
            "url": success.url,
            "digest": success.digest_hex,
        })
        .to_string(),
        Outcome::Failure(failure) => json!({
            "url": failure.url,
            "error": failure.cause,
            "kind": failure.kind.to_string(),
        })
        .to_string(),
    }
}

/// Validates the arguments, runs the batch and prints each outcome as it arrives.
///
/// # Returns
/// - `Ok(())` once every dispatched URL has been reported.
/// - `Err(anyhow::Error)` if the parameters are rejected or the HTTP client cannot be built.
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let tool = std::env::args().next().unwrap_or_else(|| "url_hasher".to_string());
    info!("Starting URL hasher with {} worker(s)", args.parallel);

    let runner = BatchRunner::new(args.fetch_config())?;
    let mut batch = runner.start(&args.urls).map_err(|err| {
        anyhow::anyhow!("{}. Use \"{} --help\" for more information.", err, tool)
    })?;

    for invalid in batch.invalid_urls() {
        if args.json {
            println!("{}", json!({ "url": invalid, "error": "invalid url", "kind": "validation" }));
        } else {
            println!("Invalid url: \"{}\"", invalid);
        }
    }

    while let Some(outcome) = batch.next_outcome().await {
        println!("{}", render(&outcome, args.json));
    }

    let report = batch.finish().await;
    info!("Processed {} url(s)", report.processed);

    Ok(())
}
