//!
//! Common types and utilities shared by the quote server and client.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` used across the workspace.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `quote` — the `QuoteRecord` snapshot and the `BidResponse` wire body.
//! - `net` — ports, paths, and URL helpers.
//! - `timing` — default stage deadlines for both sides.
#![warn(missing_docs)]
pub mod error;
pub mod net;
pub mod quote;
pub mod result;
pub mod timing;

pub use error::QuoteError;
pub use quote::{BidResponse, QuoteRecord};
pub use result::Result;
