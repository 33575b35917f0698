//! `GET /cotacao` request pipeline.
//!
//! Each request walks `Fetching -> Persisting -> Responding`, strictly in that order.
//! Every stage runs under its own deadline taken from `StageDeadlines`. The first failing
//! stage ends the request with a bare 500: the fetched quote is only returned once it has
//! been stored.
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use log::{debug, error};
use quote_common::{BidResponse, QuoteError};
use strum_macros::Display;
use thiserror::Error;

use crate::app::AppState;

/// Pipeline stage a request is in when something goes wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Stage {
    /// Calling the provider.
    Fetching,
    /// Writing the quote to the store.
    Persisting,
    /// Serialising the response body.
    Responding,
}

/// A `QuoteError` tagged with the stage that raised it.
#[derive(Debug, Error)]
#[error("{stage} failed: {source}")]
pub struct StageFailure {
    /// Stage that failed.
    pub stage: Stage,
    /// Underlying error.
    pub source: QuoteError,
}

impl StageFailure {
    fn at(stage: Stage) -> impl FnOnce(QuoteError) -> Self {
        move |source| StageFailure { stage, source }
    }
}

/// Axum handler for `GET /cotacao`.
pub async fn get_quote(State(state): State<AppState>) -> Response {
    match serve_quote(&state).await {
        Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(failure) => {
            error!("GET /cotacao: {}", failure);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Run the three stages and return the JSON body to send.
pub async fn serve_quote(state: &AppState) -> Result<Vec<u8>, StageFailure> {
    let deadlines = state.deadlines;

    let record = state
        .source
        .fetch(deadlines.fetch)
        .await
        .map_err(StageFailure::at(Stage::Fetching))?;

    state
        .store
        .save(&record, deadlines.persist)
        .await
        .map_err(StageFailure::at(Stage::Persisting))?;

    let body = BidResponse::from(&record)
        .to_json_bytes()
        .map_err(StageFailure::at(Stage::Responding))?;

    debug!("Serving bid {}", record.bid);
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{StageDeadlines, create_app};
    use crate::gateway::QuoteSource;
    use crate::store::QuoteStore;
    use async_trait::async_trait;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use quote_common::{QuoteRecord, Result};
    use std::sync::Arc;
    use std::time::Duration;
    use tempfile::TempDir;
    use tower::ServiceExt;

    struct FixedSource(QuoteRecord);

    #[async_trait]
    impl QuoteSource for FixedSource {
        async fn fetch(&self, _deadline: Duration) -> Result<QuoteRecord> {
            Ok(self.0.clone())
        }
    }

    struct TimedOutSource;

    #[async_trait]
    impl QuoteSource for TimedOutSource {
        async fn fetch(&self, deadline: Duration) -> Result<QuoteRecord> {
            Err(QuoteError::Timeout(deadline))
        }
    }

    fn record(bid: &str) -> QuoteRecord {
        QuoteRecord {
            code: "USD".into(),
            codein: Some("BRL".into()),
            name: "Dólar Americano/Real Brasileiro".into(),
            high: "5.47".into(),
            low: "5.42".into(),
            var_bid: "0.01".into(),
            pct_change: "0.2".into(),
            bid: bid.into(),
            ask: "5.44".into(),
            timestamp: "1718037599".into(),
        }
    }

    async fn temp_store(dir: &TempDir) -> QuoteStore {
        let url = format!("sqlite://{}", dir.path().join("quotes.db").display());
        let store = QuoteStore::open(&url).await.unwrap();
        store.ensure_schema().await.unwrap();
        store
    }

    async fn call(state: AppState) -> (StatusCode, Option<String>, Vec<u8>) {
        let response = create_app(state)
            .oneshot(Request::get("/cotacao").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, body.to_vec())
    }

    #[tokio::test]
    async fn stored_quote_is_served_as_bid_json() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir).await;
        let state = AppState::new(
            Arc::new(FixedSource(record("5.4301"))),
            store.clone(),
            StageDeadlines::default(),
        );

        let (status, content_type, body) = call(state).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(body, br#"{"bid":"5.4301"}"#);
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn fetch_failure_is_an_empty_500() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir).await;
        let state = AppState::new(
            Arc::new(TimedOutSource),
            store.clone(),
            StageDeadlines::default(),
        );

        let (status, _, body) = call(state).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.is_empty());
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn unstored_quote_is_never_served() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir).await;
        store.close().await;
        let state = AppState::new(
            Arc::new(FixedSource(record("5.4301"))),
            store,
            StageDeadlines::default(),
        );

        let (status, _, body) = call(state).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!String::from_utf8_lossy(&body).contains("5.4301"));
    }

    #[tokio::test]
    async fn failures_name_their_stage() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir).await;
        let state = AppState::new(Arc::new(TimedOutSource), store, StageDeadlines::default());

        let failure = serve_quote(&state).await.unwrap_err();

        assert_eq!(failure.stage, Stage::Fetching);
        assert!(failure.source.is_timeout());
        assert!(failure.to_string().starts_with("fetching failed"));
    }
}
