// src/config.rs

use lazy_static::lazy_static;

use crate::logging::PROJECT_NAME;

/// Local fallback used when no base URL is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

lazy_static! {
    pub static ref API_URL_ENV: String = format!("{}_API_URL", *PROJECT_NAME);
}

/// Resolves the scan service base URL. One environment value with a fixed
/// local fallback; not otherwise configurable at runtime.
pub fn api_base_url() -> String {
    std::env::var(API_URL_ENV.as_str()).unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}
