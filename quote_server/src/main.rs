//! Quote HTTP server binary.
//!
//! Opens the quote store, creates its table when absent, and serves `GET /cotacao`
//! until Ctrl+C. Failing to open or initialise the store is fatal: the error is
//! returned from `main` and the process exits non-zero.
use std::sync::Arc;

use clap::Parser;
use log::{info, warn};
use quote_common::Result;
use quote_common::net::{QUOTE_PATH, addr};
use quote_server::app::{AppState, create_app};
use quote_server::args::Args;
use quote_server::gateway::ProviderGateway;
use quote_server::store::QuoteStore;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    init_logger();
    let args = Args::parse();

    let store = QuoteStore::open(&args.database_url).await?;
    store.ensure_schema().await?;

    let gateway = ProviderGateway::new(&args.provider_url)?;
    info!("Provider endpoint: {}", gateway.url());

    let deadlines = args.deadlines();
    info!(
        "Stage deadlines: fetch={:?} persist={:?}",
        deadlines.fetch, deadlines.persist
    );
    let state = AppState::new(Arc::new(gateway), store.clone(), deadlines);

    let listener = TcpListener::bind(addr(&args.bind_ip, args.port)).await?;
    info!(
        "HTTP server listening on http://{}{}",
        listener.local_addr()?,
        QUOTE_PATH
    );

    axum::serve(listener, create_app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Ctrl+C received. Shutting down server..."),
        Err(e) => {
            warn!("Cannot listen for Ctrl+C ({}), serving until killed", e);
            std::future::pending::<()>().await
        }
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
