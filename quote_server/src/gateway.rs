//! Outbound call to the exchange-rate provider.
//!
//! `QuoteSource` is the seam the handler talks to; `ProviderGateway` is the live
//! implementation over `reqwest`. One call issues exactly one GET, bounded by the deadline
//! passed in by the caller. Dropping the future on expiry aborts the connection.
use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use quote_common::net::PROVIDER_PATH;
use quote_common::quote::PAIR_KEY;
use quote_common::{QuoteError, QuoteRecord, Result};

/// Anything able to produce the current USD/BRL quote.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Fetch one quote, giving up once `deadline` has elapsed.
    async fn fetch(&self, deadline: Duration) -> Result<QuoteRecord>;
}

/// `QuoteSource` backed by the public provider's HTTP API.
pub struct ProviderGateway {
    client: reqwest::Client,
    url: String,
}

impl ProviderGateway {
    /// Gateway targeting `{base_url}/json/last/USD-BRL`.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("quote_server/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| QuoteError::Unavailable(e.to_string()))?;

        Ok(Self {
            client,
            url: format!("{}{}", base_url.trim_end_matches('/'), PROVIDER_PATH),
        })
    }

    /// URL requested on every fetch.
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn request(&self) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| QuoteError::Unavailable(format!("GET {}: {}", self.url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::Unavailable(format!(
                "provider answered {} for {}",
                status, self.url
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| QuoteError::Unavailable(format!("reading provider body: {}", e)))?;
        Ok(body.to_vec())
    }
}

#[async_trait]
impl QuoteSource for ProviderGateway {
    async fn fetch(&self, deadline: Duration) -> Result<QuoteRecord> {
        let body = tokio::time::timeout(deadline, self.request())
            .await
            .map_err(|_| QuoteError::Timeout(deadline))??;

        debug!("Provider answered with {} bytes", body.len());
        parse_payload(&body)
    }
}

/// Pull the USD/BRL record out of a provider body.
///
/// The body must be a JSON object keyed by pair code. Only `USDBRL` is consulted; a
/// missing key or an empty `bid` is reported as `Malformed`.
pub fn parse_payload(body: &[u8]) -> Result<QuoteRecord> {
    let mut pairs: HashMap<String, QuoteRecord> = serde_json::from_slice(body)?;

    let record = pairs
        .remove(PAIR_KEY)
        .ok_or_else(|| QuoteError::Malformed(format!("payload has no {} entry", PAIR_KEY)))?;

    if record.bid.trim().is_empty() {
        return Err(QuoteError::Malformed(format!("{} entry has an empty bid", PAIR_KEY)));
    }
    Ok(record)
}
