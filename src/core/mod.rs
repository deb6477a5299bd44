// src/core/mod.rs

/// Credential collaborator: sign-in, sign-out, and persisted-session
/// resolution. The rest of the crate only consumes the resulting `Session`.
pub mod auth;

/// HTTP client for the remote detection service.
pub mod client;

/// Error taxonomy: client-local validation failures and service/transport
/// failures.
pub mod errors;

/// Data structures shared across the application: sessions, scan modes,
/// requests, reports, and history rows.
pub mod models;

/// Form state and the pure request builder that validates it.
pub mod request;
