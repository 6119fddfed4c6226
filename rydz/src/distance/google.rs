//! Google Distance Matrix client.
//!
//! Looks up a single origin/destination pair per request, in imperial
//! units. Addresses are sent as their one-line rendering and geocoded by the
//! service.

use std::time::Duration;

use reqwest::Url;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::domain::Address;

use super::error::DistanceError;
use super::types::DistanceMatrixResponse;
use super::{Distance, DistanceSource};

/// Default endpoint for the Distance Matrix API.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/distancematrix/json";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the Google distance client.
#[derive(Debug, Clone)]
pub struct GoogleDistanceConfig {
    /// API key, sent as the `key` query parameter
    pub api_key: String,
    /// Endpoint URL (defaults to the public API)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GoogleDistanceConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom endpoint URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Blocking client for the Distance Matrix API.
#[derive(Debug, Clone)]
pub struct GoogleDistanceClient {
    http: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
}

impl GoogleDistanceClient {
    /// Create a new client with the given configuration.
    pub fn new(config: GoogleDistanceConfig) -> Result<Self, DistanceError> {
        if config.api_key.trim().is_empty() {
            return Err(DistanceError::NotConfigured);
        }

        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }

    /// The request URL for a pair of addresses.
    pub fn url(&self, origin: &Address, destination: &Address) -> Result<Url, DistanceError> {
        Url::parse_with_params(
            &self.base_url,
            &[
                ("units", "imperial".to_string()),
                ("origins", origin.to_string()),
                ("destinations", destination.to_string()),
                ("key", self.api_key.clone()),
            ],
        )
        .map_err(|e| DistanceError::Url(e.to_string()))
    }

    /// Look up the route between two addresses.
    pub fn lookup(&self, origin: &Address, destination: &Address) -> Result<Distance, DistanceError> {
        let url = self.url(origin, destination)?;

        let response = self.http.get(url).send()?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            warn!(status = status.as_u16(), "Distance Matrix request failed");
            return Err(DistanceError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text()?;
        let distance = parse_response(&body)?;

        debug!(
            origin = %origin,
            destination = %destination,
            distance = %distance.dist_text,
            "Distance Matrix lookup"
        );

        Ok(distance)
    }
}

impl DistanceSource for GoogleDistanceClient {
    fn distance(&self, origin: &Address, destination: &Address) -> Result<Decimal, DistanceError> {
        self.lookup(origin, destination).map(|d| d.miles())
    }
}

/// Decode a Distance Matrix response body into the first route it holds.
pub fn parse_response(body: &str) -> Result<Distance, DistanceError> {
    let response: DistanceMatrixResponse =
        serde_json::from_str(body).map_err(|e| DistanceError::Json {
            message: e.to_string(),
        })?;

    if response.status != "OK" {
        return Err(DistanceError::Rejected {
            status: response.status,
            message: response.error_message,
        });
    }

    let element = response
        .rows
        .into_iter()
        .next()
        .and_then(|row| row.elements.into_iter().next())
        .ok_or_else(|| DistanceError::Json {
            message: "response has no matrix elements".to_string(),
        })?;

    if element.status != "OK" {
        return Err(DistanceError::NoRoute {
            status: element.status,
        });
    }

    match (element.distance, element.duration) {
        (Some(distance), Some(duration)) => Ok(Distance {
            dist_text: distance.text,
            dist_value: distance.value,
            time_text: duration.text,
            time_value: duration.value,
        }),
        _ => Err(DistanceError::Json {
            message: "matrix element is missing distance or duration".to_string(),
        }),
    }
}
