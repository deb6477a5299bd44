// src/core/errors.rs

use thiserror::Error;

/// Client-local validation failures. These never reach the network: a failed
/// validation leaves the held report and history untouched and is surfaced
/// inline until the operator re-submits.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Select a file before scanning.")]
    MissingFile,

    #[error("Enter a database connection string.")]
    MissingConnectionString,

    #[error("Enter an AWS access key.")]
    MissingAccessKey,
}

/// Failures talking to the scan service.
///
/// `Service` carries the structured `detail` message the service attaches to
/// non-success responses; everything else falls back to a generic transport
/// message. None of these are retried automatically.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The service rejected the request and explained why.
    #[error("{0}")]
    Service(String),

    /// The request never completed (connect, TLS, or decode failure).
    #[error("Scan service unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    /// The selected file could not be read for upload, or the exported
    /// artifact could not be saved.
    #[error("File error: {0}")]
    File(#[from] std::io::Error),
}
