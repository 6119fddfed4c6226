//! Data transfer objects for requests and responses.
//!
//! Every response carries a `status` of "OK" or "ERROR"; errors carry a
//! `reason`.

use serde::{Deserialize, Serialize};

use crate::booking::{Booking, BookingError, BookingId, BookingRequest};
use crate::domain::Journey;
use crate::pricer::Quote;

/// A request, tagged by its `action` field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Request {
    /// Price a journey: `{"action": "quote", "origin": {..}, "destination": {..}}`
    Quote(Journey),

    /// Create a booking from the request fields
    Book(BookingRequest),

    /// List all bookings
    List,

    /// Fetch one booking
    Get { booking_id: BookingId },

    /// Cancel a booking
    Cancel { booking_id: BookingId },

    /// Replace a booking; the new version gets a new id
    Rebook {
        booking_id: BookingId,
        #[serde(flatten)]
        booking: BookingRequest,
    },
}

/// Outcome marker shared by all responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "ERROR")]
    Error,
}

/// A response to one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Response {
    /// A quote already carries its own status
    Quote(Quote),

    Booking {
        status: Status,
        booking: Booking,
    },

    Bookings {
        status: Status,
        bookings: Vec<Booking>,
    },

    Error {
        status: Status,
        reason: String,
        /// Set when the request named a booking that does not exist
        #[serde(skip_serializing_if = "Option::is_none")]
        booking_id: Option<BookingId>,
    },
}

impl Response {
    pub fn booking(booking: Booking) -> Self {
        Response::Booking {
            status: Status::Ok,
            booking,
        }
    }

    pub fn bookings(bookings: Vec<Booking>) -> Self {
        Response::Bookings {
            status: Status::Ok,
            bookings,
        }
    }

    pub fn error(reason: impl Into<String>) -> Self {
        Response::Error {
            status: Status::Error,
            reason: reason.into(),
            booking_id: None,
        }
    }
}

impl From<Result<Booking, BookingError>> for Response {
    fn from(result: Result<Booking, BookingError>) -> Self {
        match result {
            Ok(booking) => Response::booking(booking),
            Err(BookingError::NotFound(id)) => Response::Error {
                status: Status::Error,
                reason: BookingError::NotFound(id).to_string(),
                booking_id: Some(id),
            },
            Err(err) => Response::error(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_quote_request() {
        let request: Request = serde_json::from_value(json!({
            "action": "quote",
            "origin": {"postcode": "NW1 1AB", "country": "UK"},
            "destination": {"postcode": "RM14 2CD", "country": "UK"}
        }))
        .unwrap();
        match request {
            Request::Quote(journey) => {
                assert_eq!(journey.origin.postcode.as_deref(), Some("NW1 1AB"));
            }
            other => panic!("unexpected request: {other:?}"),
        }
    }

    #[test]
    fn parse_booking_requests() {
        let request: Request = serde_json::from_value(json!({
            "action": "book",
            "booker": "a.booker@acompany.com",
            "pickup_time": "2017-09-15 15:30"
        }))
        .unwrap();
        match request {
            Request::Book(b) => {
                assert_eq!(b.booker.as_deref(), Some("a.booker@acompany.com"));
                assert!(b.origin.is_none());
            }
            other => panic!("unexpected request: {other:?}"),
        }

        let request: Request =
            serde_json::from_value(json!({"action": "cancel", "booking_id": 3})).unwrap();
        assert_eq!(
            request,
            Request::Cancel {
                booking_id: BookingId::new(3)
            }
        );

        let request: Request = serde_json::from_value(json!({"action": "list"})).unwrap();
        assert_eq!(request, Request::List);

        let request: Request = serde_json::from_value(json!({
            "action": "rebook",
            "booking_id": 1,
            "booker": "someone.else@acompany.com"
        }))
        .unwrap();
        match request {
            Request::Rebook {
                booking_id,
                booking,
            } => {
                assert_eq!(booking_id, BookingId::new(1));
                assert_eq!(booking.booker.as_deref(), Some("someone.else@acompany.com"));
            }
            other => panic!("unexpected request: {other:?}"),
        }
    }

    #[test]
    fn reject_unknown_action() {
        assert!(serde_json::from_value::<Request>(json!({"action": "pay"})).is_err());
        assert!(serde_json::from_value::<Request>(json!({"booking_id": 1})).is_err());
    }

    #[test]
    fn serialize_errors() {
        assert_eq!(
            serde_json::to_value(Response::error("booker")).unwrap(),
            json!({"status": "ERROR", "reason": "booker"})
        );

        let not_found = Response::from(Err::<Booking, _>(BookingError::NotFound(BookingId::new(4))));
        assert_eq!(
            serde_json::to_value(not_found).unwrap(),
            json!({"status": "ERROR", "reason": "no booking for id", "booking_id": 4})
        );
    }

    #[test]
    fn serialize_empty_listing() {
        assert_eq!(
            serde_json::to_value(Response::bookings(vec![])).unwrap(),
            json!({"status": "OK", "bookings": []})
        );
    }
}
