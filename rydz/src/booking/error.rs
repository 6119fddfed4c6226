//! Booking error types.

use crate::domain::{AddressError, PickupTimeError, Side};

use super::BookingId;

/// Reasons a booking operation was refused.
///
/// `Display` is the user-facing reason: a field name, the pickup time
/// parser's message, a pricing reason, or "no booking for id".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    /// A required request field is absent
    #[error("{0}")]
    MissingField(&'static str),

    /// The origin or destination failed its country policy
    #[error("{source}")]
    Address {
        side: Side,
        #[source]
        source: AddressError,
    },

    /// The pickup time is not `YYYY-MM-DD HH:MM`
    #[error("{0}")]
    PickupTime(#[from] PickupTimeError),

    /// The journey could not be priced
    #[error("{0}")]
    Pricing(String),

    /// No booking has this id
    #[error("no booking for id")]
    NotFound(BookingId),
}
