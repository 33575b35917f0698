//! Error types shared between client and server.
//!
//! `QuoteError` covers every failure a stage of the quote pipeline can report:
//! exceeded deadlines, unexpected payload shapes, unreachable peers, and storage
//! that cannot be initialised. Both binaries propagate it with `?`.
use std::io;
use std::time::Duration;

use thiserror::Error;

/// Unified error type shared by client and server.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// A stage deadline expired before the operation finished.
    #[error("deadline of {0:?} exceeded")]
    Timeout(Duration),

    /// The peer answered, but not with the shape we expect.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// Transport-level failure reaching the provider, the database, or the server.
    #[error("unavailable: {0}")]
    Unavailable(String),

    /// Storage could not be opened or its schema could not be created.
    #[error("storage initialisation failed: {0}")]
    SchemaFatal(String),

    /// Local I/O error (listener sockets, output files).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<serde_json::Error> for QuoteError {
    fn from(err: serde_json::Error) -> Self {
        QuoteError::Malformed(err.to_string())
    }
}

impl QuoteError {
    /// True for deadline failures, whatever the stage.
    pub fn is_timeout(&self) -> bool {
        matches!(self, QuoteError::Timeout(_))
    }
}
