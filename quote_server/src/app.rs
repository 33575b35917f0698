//! Application state and routing.
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::routing::get;
use quote_common::net::QUOTE_PATH;
use quote_common::timing::{DEFAULT_FETCH_DEADLINE, DEFAULT_PERSIST_DEADLINE};

use crate::gateway::QuoteSource;
use crate::handler;
use crate::store::QuoteStore;

/// Per-stage budgets allocated afresh for every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageDeadlines {
    /// Bound on the provider call.
    pub fetch: Duration,
    /// Bound on the database insert.
    pub persist: Duration,
}

impl Default for StageDeadlines {
    fn default() -> Self {
        Self {
            fetch: DEFAULT_FETCH_DEADLINE,
            persist: DEFAULT_PERSIST_DEADLINE,
        }
    }
}

/// Collaborators shared by every request, built once in `main`.
#[derive(Clone)]
pub struct AppState {
    /// Where quotes come from.
    pub source: Arc<dyn QuoteSource>,
    /// Where quotes are recorded.
    pub store: QuoteStore,
    /// Stage budgets.
    pub deadlines: StageDeadlines,
}

impl AppState {
    /// Bundle the collaborators for the router.
    pub fn new(source: Arc<dyn QuoteSource>, store: QuoteStore, deadlines: StageDeadlines) -> Self {
        Self {
            source,
            store,
            deadlines,
        }
    }
}

/// Router exposing `GET /cotacao`.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route(QUOTE_PATH, get(handler::get_quote))
        .with_state(state)
}
