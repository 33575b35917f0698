//! Shared networking constants and helpers used by client and server.

/// TCP port the quote server listens on by default.
pub const SERVER_PORT: u16 = 8080;
/// Route serving the current USD/BRL bid.
pub const QUOTE_PATH: &str = "/cotacao";
/// Base URL of the public exchange-rate provider.
pub const PROVIDER_BASE_URL: &str = "https://economia.awesomeapi.com.br";
/// Provider path for the last USD/BRL quote.
pub const PROVIDER_PATH: &str = "/json/last/USD-BRL";

/// Helper to format an address with a port like "ip:port".
pub fn addr(ip: &str, port: u16) -> String {
    format!("{}:{}", ip, port)
}

/// Full URL of the quote endpoint on a server reachable at `host:port`.
pub fn quote_url(host: &str, port: u16) -> String {
    format!("http://{}{}", addr(host, port), QUOTE_PATH)
}
