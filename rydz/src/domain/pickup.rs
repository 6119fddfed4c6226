//! Pickup times.
//!
//! Bookings carry a local pickup time in `YYYY-MM-DD HH:MM` form. No time
//! zone is attached; the time is whatever the booker wrote.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The only accepted pickup time format.
pub const PICKUP_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Error returned when a pickup time does not parse.
///
/// Carries the parser's own message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct PickupTimeError {
    message: String,
}

/// A validated pickup time.
///
/// # Examples
///
/// ```
/// use rydz::domain::PickupTime;
///
/// let t = PickupTime::parse("2017-09-15 15:30").unwrap();
/// assert_eq!(t.to_string(), "2017-09-15 15:30");
///
/// assert!(PickupTime::parse("2017-09-15").is_err());
/// assert!(PickupTime::parse("15/09/2017 15:30").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PickupTime(NaiveDateTime);

impl PickupTime {
    /// Parse a pickup time in `YYYY-MM-DD HH:MM` form.
    pub fn parse(s: &str) -> Result<Self, PickupTimeError> {
        NaiveDateTime::parse_from_str(s, PICKUP_TIME_FORMAT)
            .map(Self)
            .map_err(|e| PickupTimeError {
                message: e.to_string(),
            })
    }

    /// Returns the underlying date and time.
    pub fn datetime(&self) -> NaiveDateTime {
        self.0
    }
}

impl fmt::Debug for PickupTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PickupTime({})", self)
    }
}

impl fmt::Display for PickupTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(PICKUP_TIME_FORMAT))
    }
}

impl Serialize for PickupTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PickupTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        PickupTime::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parse_valid() {
        let t = PickupTime::parse("2017-09-15 15:30").unwrap();
        let dt = t.datetime();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2017, 9, 15));
        assert_eq!((dt.hour(), dt.minute()), (15, 30));
    }

    #[test]
    fn display_roundtrip() {
        let t = PickupTime::parse("2024-03-05 07:05").unwrap();
        assert_eq!(t.to_string(), "2024-03-05 07:05");
        assert_eq!(format!("{:?}", t), "PickupTime(2024-03-05 07:05)");
    }

    #[test]
    fn reject_wrong_format() {
        assert!(PickupTime::parse("").is_err());
        assert!(PickupTime::parse("2017-09-15").is_err());
        assert!(PickupTime::parse("15:30").is_err());
        assert!(PickupTime::parse("2017-09-15T15:30").is_err());
        assert!(PickupTime::parse("2017-09-15 15:30:00").is_err());
        assert!(PickupTime::parse("15/09/2017 15:30").is_err());
    }

    #[test]
    fn reject_impossible_dates() {
        assert!(PickupTime::parse("2017-02-30 10:00").is_err());
        assert!(PickupTime::parse("2017-09-15 25:00").is_err());
        assert!(PickupTime::parse("2017-09-15 10:60").is_err());
    }

    #[test]
    fn error_carries_parser_message() {
        let err = PickupTime::parse("2017-09-15").unwrap_err();
        let expected = NaiveDateTime::parse_from_str("2017-09-15", PICKUP_TIME_FORMAT)
            .unwrap_err()
            .to_string();
        assert_eq!(err.to_string(), expected);
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn serde_as_string() {
        let t = PickupTime::parse("2017-09-15 15:30").unwrap();
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"2017-09-15 15:30\"");

        let back: PickupTime = serde_json::from_str("\"2017-09-15 15:30\"").unwrap();
        assert_eq!(back, t);

        assert!(serde_json::from_str::<PickupTime>("\"tomorrow\"").is_err());
    }
}
