//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. Their
//! `Display` output is user-facing: a field error renders as the bare field
//! name, so callers can report it verbatim as a failure reason.

use super::AddressField;

/// An address failed its country policy.
///
/// Only the first violation is ever reported, in the order defined by the
/// country policy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    /// A field the policy requires is absent.
    #[error("{0}")]
    Missing(AddressField),

    /// A field is present but not in the format the policy requires.
    ///
    /// Reported under the same field name as a missing value.
    #[error("{0}")]
    Malformed(AddressField),

    /// The `country` field names a country with no policy.
    #[error("Unsupported country: {0}")]
    UnsupportedCountry(String),
}

impl AddressError {
    /// The offending field, if the error is about a single field.
    pub fn field(&self) -> Option<AddressField> {
        match self {
            AddressError::Missing(field) | AddressError::Malformed(field) => Some(*field),
            AddressError::UnsupportedCountry(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = AddressError::Missing(AddressField::Town);
        assert_eq!(err.to_string(), "town");

        let err = AddressError::Malformed(AddressField::Postcode);
        assert_eq!(err.to_string(), "postcode");

        let err = AddressError::UnsupportedCountry("FR".into());
        assert_eq!(err.to_string(), "Unsupported country: FR");
    }

    #[test]
    fn malformed_and_missing_name_the_same_field() {
        assert_eq!(
            AddressError::Missing(AddressField::Postcode).field(),
            AddressError::Malformed(AddressField::Postcode).field()
        );
        assert_eq!(AddressError::UnsupportedCountry("FR".into()).field(), None);
    }
}
