//! Quote Client binary.
//!
//! Usage example (CLI):
//! ```bash
//! quote_client --url http://localhost:8080/cotacao --timeout-ms 300 --output cotacao.txt
//! ```
//!
//! Any transport, deadline, or decode failure is returned from `main`, so the process
//! exits non-zero without writing the output file.
use clap::Parser;
use quote_client::args::Args;
use quote_client::{ClientConfig, run};
use quote_common::Result;

#[tokio::main]
async fn main() -> Result<()> {
    init_logger();
    let config = ClientConfig::from(Args::parse());
    run(&config).await?;
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
