//! Command-line arguments for the quote server.
use std::time::Duration;

use clap::Parser;
use quote_common::net::{PROVIDER_BASE_URL, SERVER_PORT};
use quote_common::timing::{DEFAULT_FETCH_DEADLINE, DEFAULT_PERSIST_DEADLINE};

use crate::app::StageDeadlines;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Interface to bind the HTTP listener on.
    #[clap(long, default_value = "0.0.0.0")]
    pub bind_ip: String,

    /// Port serving `GET /cotacao`.
    #[clap(long, default_value_t = SERVER_PORT)]
    pub port: u16,

    /// SQLite database receiving every fetched quote.
    #[clap(long, default_value = "sqlite://sqlite.db")]
    pub database_url: String,

    /// Base URL of the exchange-rate provider.
    #[clap(long, default_value = PROVIDER_BASE_URL)]
    pub provider_url: String,

    /// Deadline for the provider call, in milliseconds.
    #[clap(long, default_value_t = DEFAULT_FETCH_DEADLINE.as_millis() as u64)]
    pub fetch_timeout_ms: u64,

    /// Deadline for the database insert, in milliseconds.
    #[clap(long, default_value_t = DEFAULT_PERSIST_DEADLINE.as_millis() as u64)]
    pub persist_timeout_ms: u64,
}

impl Args {
    /// Stage budgets selected on the command line.
    pub fn deadlines(&self) -> StageDeadlines {
        StageDeadlines {
            fetch: Duration::from_millis(self.fetch_timeout_ms),
            persist: Duration::from_millis(self.persist_timeout_ms),
        }
    }
}
