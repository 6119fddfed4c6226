//! Google Distance Matrix response DTOs.
//!
//! These types map directly to the JSON the API returns. Fields the API
//! omits on failure are defaulted rather than made mandatory.

use serde::Deserialize;

/// Top-level Distance Matrix response.
#[derive(Debug, Clone, Deserialize)]
pub struct DistanceMatrixResponse {
    /// "OK" or a request-level failure such as "REQUEST_DENIED".
    pub status: String,

    /// Human-readable explanation, present on some failures.
    #[serde(default)]
    pub error_message: Option<String>,

    /// Addresses as the service resolved them.
    #[serde(default)]
    pub origin_addresses: Vec<String>,

    #[serde(default)]
    pub destination_addresses: Vec<String>,

    /// One row per origin.
    #[serde(default)]
    pub rows: Vec<MatrixRow>,
}

/// A row of the matrix: one element per destination.
#[derive(Debug, Clone, Deserialize)]
pub struct MatrixRow {
    #[serde(default)]
    pub elements: Vec<MatrixElement>,
}

/// A single origin/destination pair.
#[derive(Debug, Clone, Deserialize)]
pub struct MatrixElement {
    /// "OK", "NOT_FOUND" or "ZERO_RESULTS".
    pub status: String,

    pub distance: Option<TextValue>,

    pub duration: Option<TextValue>,
}

/// A measurement as both display text and a raw value.
///
/// Distances are in metres, durations in seconds.
#[derive(Debug, Clone, Deserialize)]
pub struct TextValue {
    pub text: String,
    pub value: u64,
}
