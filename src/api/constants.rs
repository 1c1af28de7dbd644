//! API Constants for the calculator service

/// Base URL used when no configuration overrides it
pub const DEFAULT_BASE_URL: &str = "http://localhost:8089/calculadora-fast-api";

/// Two-operand sum endpoint (legacy)
pub const SUM_ENDPOINT: &str = "sum";

/// History listing endpoint
pub const HISTORY_ENDPOINT: &str = "history";

/// Batch endpoint for multi-operation requests
pub const BATCH_ENDPOINT: &str = "batch_operations";

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("calc-cli/", env!("CARGO_PKG_VERSION"));

/// HTTP methods for logging
pub mod methods {
    pub const GET: &str = "GET";
    pub const POST: &str = "POST";
}

/// Join the base URL and an endpoint path, tolerating a trailing slash
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path)
}

pub fn sum_endpoint(base_url: &str) -> String {
    endpoint(base_url, SUM_ENDPOINT)
}

pub fn history_endpoint(base_url: &str) -> String {
    endpoint(base_url, HISTORY_ENDPOINT)
}

pub fn batch_endpoint(base_url: &str) -> String {
    endpoint(base_url, BATCH_ENDPOINT)
}
