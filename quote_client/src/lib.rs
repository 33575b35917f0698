//! Quote Client — calls the quote server once and records the dollar bid in a file.
//!
//! - `fetcher` — the one-shot `run` and its `ClientConfig`.
//! - `args` — command-line configuration.
#![warn(missing_docs)]
pub mod args;
pub mod fetcher;

pub use fetcher::{ClientConfig, run};
