//! Journey quoting.
//!
//! The pricer asks a rate book for a price and turns the outcome into a
//! [`Quote`]. Rate book failures become short, user-facing reasons; the
//! exact wording is part of the external contract.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::domain::{Address, Journey, Side};
use crate::ratebook::{RateBook, RateLookupError};

/// Reason given when an address has no postcode.
pub const REASON_POSTCODE_REQUIRED: &str = "postcode required for pricing";
/// Reason given when the origin's postcode area has no rates.
pub const REASON_ORIGIN_NOT_FOUND: &str = "origin postcode not found";
/// Reason given when the destination's postcode area has no rates.
pub const REASON_DESTINATION_NOT_FOUND: &str = "destination postcode not found";
/// Reason given when no distance could be found for the journey.
pub const REASON_DISTANCE_UNAVAILABLE: &str = "distance unavailable";

/// Result of pricing a journey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status")]
pub enum QuoteStatus {
    /// Priced successfully.
    #[serde(rename = "OK")]
    Ok {
        #[serde(with = "rust_decimal::serde::float")]
        price: Decimal,
    },

    /// Could not be priced.
    #[serde(rename = "ERROR")]
    Error { reason: String },
}

/// The priced or rejected outcome of a journey request.
///
/// Serializes as `{"origin", "destination", "status", "price"}` or
/// `{"origin", "destination", "status", "reason"}`. A quote is never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub origin: Address,
    pub destination: Address,
    #[serde(flatten)]
    pub status: QuoteStatus,
}

impl Quote {
    /// The price, if the quote succeeded.
    pub fn price(&self) -> Option<Decimal> {
        match &self.status {
            QuoteStatus::Ok { price } => Some(*price),
            QuoteStatus::Error { .. } => None,
        }
    }

    /// The failure reason, if the quote failed.
    pub fn reason(&self) -> Option<&str> {
        match &self.status {
            QuoteStatus::Ok { .. } => None,
            QuoteStatus::Error { reason } => Some(reason),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self.status, QuoteStatus::Ok { .. })
    }
}

/// The user-facing reason for a rate book failure.
pub fn failure_reason(err: &RateLookupError) -> String {
    match err {
        RateLookupError::MissingPostcode(_) => REASON_POSTCODE_REQUIRED.to_string(),
        RateLookupError::UnknownArea {
            side: Side::Origin,
            ..
        } => REASON_ORIGIN_NOT_FOUND.to_string(),
        RateLookupError::UnknownArea {
            side: Side::Destination,
            ..
        } => REASON_DESTINATION_NOT_FOUND.to_string(),
        RateLookupError::Address { source, .. } => source.to_string(),
        RateLookupError::Distance(_) => REASON_DISTANCE_UNAVAILABLE.to_string(),
    }
}

/// Quotes journeys using a rate book.
///
/// The pricer does not care which rate book it is given.
#[derive(Debug, Clone)]
pub struct Pricer<R> {
    ratebook: R,
}

impl<R: RateBook> Pricer<R> {
    pub fn new(ratebook: R) -> Self {
        Self { ratebook }
    }

    pub fn ratebook(&self) -> &R {
        &self.ratebook
    }

    /// Price a journey.
    ///
    /// Never fails: a journey that cannot be priced yields an `ERROR` quote
    /// carrying the reason.
    pub fn quote(&self, journey: &Journey) -> Quote {
        let status = match self.ratebook.price(&journey.origin, &journey.destination) {
            Ok(price) => QuoteStatus::Ok { price },
            Err(err) => {
                debug!(error = %err, "journey could not be priced");
                QuoteStatus::Error {
                    reason: failure_reason(&err),
                }
            }
        };

        debug!(
            origin = %journey.origin,
            destination = %journey.destination,
            ?status,
            "quote"
        );

        Quote {
            origin: journey.origin.clone(),
            destination: journey.destination.clone(),
            status,
        }
    }
}
