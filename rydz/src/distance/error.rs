//! Distance lookup error types.

use crate::domain::AddressError;

/// Errors that can occur while looking up a distance.
#[derive(Debug, thiserror::Error)]
pub enum DistanceError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The request URL could not be built
    #[error("invalid request URL: {0}")]
    Url(String),

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// The service answered but refused the request (bad key, quota, ...)
    #[error("distance lookup rejected: {status}")]
    Rejected {
        status: String,
        message: Option<String>,
    },

    /// No route is known between the two addresses
    #[error("no route between addresses: {status}")]
    NoRoute { status: String },

    /// No API key was supplied
    #[error("distance lookup not configured: missing API key")]
    NotConfigured,

    /// An address could not be used as a lookup key
    #[error("{0}")]
    Address(#[from] AddressError),
}
