//! Quote HTTP server.
//!
//! Serves the current USD/BRL bid on `GET /cotacao`. Every request fetches a fresh quote
//! from the provider, appends it to a SQLite table, and only then answers with the bid.
//! The building blocks:
//!
//! - `gateway` — `QuoteSource` trait and the `reqwest` provider client.
//! - `store` — `QuoteStore`, the append-only `sqlx` SQLite table.
//! - `handler` — the per-request `Fetching -> Persisting -> Responding` pipeline.
//! - `app` — shared state, stage deadlines, and the `axum` router.
//! - `args` — command-line configuration.
#![warn(missing_docs)]
pub mod app;
pub mod args;
pub mod gateway;
pub mod handler;
pub mod store;
