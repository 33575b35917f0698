//! Quote data model shared by client and server.
//!
//! A `QuoteRecord` is one USD/BRL snapshot as published by the provider. Every field
//! stays textual exactly as received; only the store interprets `timestamp` as an
//! integer. `BidResponse` is the trimmed payload the server hands to clients.
use serde::{Deserialize, Serialize};

use crate::Result;

/// Key of the USD/BRL entry in the provider payload.
pub const PAIR_KEY: &str = "USDBRL";

/// One currency-pair price snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    /// Base currency code (e.g., `USD`).
    pub code: String,
    /// Quote currency code (e.g., `BRL`), when the provider sends it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codein: Option<String>,
    /// Display name of the pair.
    pub name: String,
    /// Session high.
    pub high: String,
    /// Session low.
    pub low: String,
    /// Absolute variation of the bid.
    #[serde(rename = "varBid")]
    pub var_bid: String,
    /// Percentage change.
    #[serde(rename = "pctChange")]
    pub pct_change: String,
    /// Bid price.
    pub bid: String,
    /// Ask price.
    pub ask: String,
    /// Epoch seconds, as text.
    pub timestamp: String,
}

/// Body returned by `GET /cotacao`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidResponse {
    /// Bid price, copied verbatim from the stored record.
    pub bid: String,
}

impl BidResponse {
    /// Encode the response to JSON bytes.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decode a server body. A missing or non-string `bid` is rejected.
    pub fn from_json_slice(body: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }
}

impl From<&QuoteRecord> for BidResponse {
    fn from(record: &QuoteRecord) -> Self {
        BidResponse {
            bid: record.bid.clone(),
        }
    }
}
