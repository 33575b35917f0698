//! Command-line arguments for the quote client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use quote_common::net::{SERVER_PORT, quote_url};
use quote_common::timing::DEFAULT_CLIENT_DEADLINE;

use crate::fetcher::{ClientConfig, OUTPUT_FILE};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Quote endpoint to call.
    #[clap(long, default_value_t = quote_url("localhost", SERVER_PORT))]
    pub url: String,

    /// Deadline for the whole request, in milliseconds.
    #[clap(long, default_value_t = DEFAULT_CLIENT_DEADLINE.as_millis() as u64)]
    pub timeout_ms: u64,

    /// File to write the quote to. Overwritten on success.
    #[clap(long, default_value = OUTPUT_FILE)]
    pub output: PathBuf,
}

impl From<Args> for ClientConfig {
    fn from(args: Args) -> Self {
        ClientConfig {
            url: args.url,
            deadline: Duration::from_millis(args.timeout_ms),
            output: args.output,
        }
    }
}
