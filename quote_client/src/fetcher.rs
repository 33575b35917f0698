//! One-shot request to the quote server.
//!
//! `run` performs a single GET under one overall deadline, extracts the bid, and writes
//! `Dólar: <bid>` to the output file. Any failure aborts before the file is touched, so
//! a previous run's output is never replaced by partial data.
use std::path::PathBuf;
use std::time::{Duration, Instant};

use log::{debug, info};
use quote_common::net::{SERVER_PORT, quote_url};
use quote_common::timing::DEFAULT_CLIENT_DEADLINE;
use quote_common::{BidResponse, QuoteError, Result};

/// Default output file, relative to the working directory.
pub const OUTPUT_FILE: &str = "cotacao.txt";

/// Where to ask, how long to wait, and where to write.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Full URL of the quote endpoint.
    pub url: String,
    /// Budget for the whole request, body included.
    pub deadline: Duration,
    /// File receiving the formatted quote.
    pub output: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: quote_url("localhost", SERVER_PORT),
            deadline: DEFAULT_CLIENT_DEADLINE,
            output: PathBuf::from(OUTPUT_FILE),
        }
    }
}

/// Text written to the output file for `bid`.
pub fn format_quote(bid: &str) -> String {
    format!("Dólar: {}\n", bid)
}

/// Fetch the current bid and write it to `config.output`.
///
/// Returns the text written.
pub async fn run(config: &ClientConfig) -> Result<String> {
    let client = reqwest::Client::new();
    let started = Instant::now();

    let quote = tokio::time::timeout(config.deadline, request_bid(&client, &config.url))
        .await
        .map_err(|_| QuoteError::Timeout(config.deadline))??;

    let text = format_quote(&quote.bid);
    let elapsed = started.elapsed();
    info!("{} elapsed={}ms", text.trim_end(), elapsed.as_millis());

    tokio::fs::write(&config.output, &text).await?;
    debug!("Wrote {}", config.output.display());
    Ok(text)
}

async fn request_bid(client: &reqwest::Client, url: &str) -> Result<BidResponse> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| QuoteError::Unavailable(format!("GET {}: {}", url, e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(QuoteError::Unavailable(format!("server answered {}", status)));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| QuoteError::Unavailable(format!("reading server body: {}", e)))?;
    BidResponse::from_json_slice(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_line_uses_portuguese_label() {
        assert_eq!(format_quote("5.43"), "Dólar: 5.43\n");
    }

    #[test]
    fn default_config_targets_local_server() {
        let config = ClientConfig::default();
        assert_eq!(config.url, "http://localhost:8080/cotacao");
        assert_eq!(config.deadline, Duration::from_millis(300));
        assert_eq!(config.output, PathBuf::from("cotacao.txt"));
    }
}
