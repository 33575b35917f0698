//! Default stage deadlines.
//!
//! The server bounds its provider call and its database write separately; the client
//! bounds the whole round trip. The client's budget sits above either server stage but
//! below their sum, so a slow server stage surfaces as a client timeout first.
use std::time::Duration;

/// Budget for the outbound provider call.
pub const DEFAULT_FETCH_DEADLINE: Duration = Duration::from_millis(200);
/// Budget for persisting one quote.
pub const DEFAULT_PERSIST_DEADLINE: Duration = Duration::from_millis(250);
/// Budget for the client's single request to the server.
pub const DEFAULT_CLIENT_DEADLINE: Duration = Duration::from_millis(300);
