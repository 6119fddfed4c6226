//! Addresses and the per-country policies that validate them.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::error::AddressError;
use super::postcode::{PostcodeArea, is_uk_postcode, is_us_zip, uk_area, us_area};
use super::us_state::is_us_state;

/// A field of an [`Address`], as named in validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressField {
    Number,
    Street,
    Town,
    State,
    Postcode,
    Country,
}

impl AddressField {
    /// The field's wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressField::Number => "number",
            AddressField::Street => "street",
            AddressField::Town => "town",
            AddressField::State => "state",
            AddressField::Postcode => "postcode",
            AddressField::Country => "country",
        }
    }
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A country with an address policy.
///
/// Adding a country means adding a variant here; every policy decision is an
/// exhaustive `match`, so the compiler points at each one that needs a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Country {
    Uk,
    Us,
}

impl Country {
    /// Parse a country code as it appears in the `country` field.
    ///
    /// # Examples
    ///
    /// ```
    /// use rydz::domain::Country;
    ///
    /// assert_eq!(Country::parse("UK").unwrap(), Country::Uk);
    /// assert_eq!(Country::parse("US").unwrap(), Country::Us);
    /// assert_eq!(
    ///     Country::parse("FR").unwrap_err().to_string(),
    ///     "Unsupported country: FR"
    /// );
    /// ```
    pub fn parse(code: &str) -> Result<Self, AddressError> {
        match code {
            "UK" => Ok(Country::Uk),
            "US" => Ok(Country::Us),
            other => Err(AddressError::UnsupportedCountry(other.to_string())),
        }
    }

    /// The country code.
    pub fn code(&self) -> &'static str {
        match self {
            Country::Uk => "UK",
            Country::Us => "US",
        }
    }

    /// Check `address` against this country's rules, stopping at the first
    /// violation.
    fn validate(self, address: &Address) -> Result<(), AddressError> {
        match self {
            // number -> street -> town -> postcode
            Country::Uk => {
                require(&address.number, AddressField::Number)?;
                require(&address.street, AddressField::Street)?;
                require(&address.town, AddressField::Town)?;
                let postcode = require(&address.postcode, AddressField::Postcode)?;
                if !is_uk_postcode(postcode) {
                    return Err(AddressError::Malformed(AddressField::Postcode));
                }
                Ok(())
            }
            // number -> street -> postcode -> state (town and state optional)
            Country::Us => {
                require(&address.number, AddressField::Number)?;
                require(&address.street, AddressField::Street)?;
                let postcode = require(&address.postcode, AddressField::Postcode)?;
                if !is_us_zip(postcode) {
                    return Err(AddressError::Malformed(AddressField::Postcode));
                }
                if present(&address.state).is_some_and(|state| !is_us_state(state)) {
                    return Err(AddressError::Malformed(AddressField::State));
                }
                Ok(())
            }
        }
    }

    /// The rate-table key for a postcode in this country.
    pub fn postcode_area(self, postcode: &str) -> PostcodeArea {
        match self {
            Country::Uk => uk_area(postcode),
            Country::Us => us_area(postcode),
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A postal address as supplied by a client.
///
/// Every field is optional; what is required depends on the country policy
/// selected by `country`. The core never mutates an address.
///
/// # Examples
///
/// ```
/// use rydz::domain::Address;
///
/// let address = Address::new()
///     .with_number("56")
///     .with_street("King Edward Road")
///     .with_town("Teddington")
///     .with_postcode("TW11 9BC")
///     .with_country("UK");
///
/// assert!(address.validate().is_ok());
/// assert_eq!(address.postcode_area().unwrap().as_str(), "TW11");
/// assert_eq!(
///     address.to_string(),
///     "56, King Edward Road, Teddington, TW11 9BC, UK"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    /// House number. Clients send it as either a string or an integer.
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,

    /// Town or city.
    #[serde(default, alias = "city", skip_serializing_if = "Option::is_none")]
    pub town: Option<String>,

    /// US state code (ignored by the UK policy).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,

    /// Country code used to select the address policy ("UK", "US").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Address {
    /// An address with no fields set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }

    pub fn with_street(mut self, street: impl Into<String>) -> Self {
        self.street = Some(street.into());
        self
    }

    pub fn with_town(mut self, town: impl Into<String>) -> Self {
        self.town = Some(town.into());
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn with_postcode(mut self, postcode: impl Into<String>) -> Self {
        self.postcode = Some(postcode.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// The policy country for this address.
    pub fn country(&self) -> Result<Country, AddressError> {
        let code = require(&self.country, AddressField::Country)?;
        Country::parse(code)
    }

    /// Validate this address against its country policy.
    ///
    /// Reports only the first violation. The check is pure: validating the
    /// same address twice gives the same answer.
    pub fn validate(&self) -> Result<(), AddressError> {
        self.country()?.validate(self)
    }

    /// The rate-table key for this address.
    ///
    /// Does not validate the address, but fails instead of inventing an
    /// area when the country or postcode is missing.
    pub fn postcode_area(&self) -> Result<PostcodeArea, AddressError> {
        let country = self.country()?;
        let postcode = require(&self.postcode, AddressField::Postcode)?;
        Ok(country.postcode_area(postcode))
    }
}

/// One-line rendering: the present fields, comma separated, in the order
/// number, street, town, postcode, country.
impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = [
            &self.number,
            &self.street,
            &self.town,
            &self.postcode,
            &self.country,
        ];
        let mut first = true;
        for part in parts.into_iter().filter_map(present) {
            if !first {
                f.write_str(", ")?;
            }
            f.write_str(part)?;
            first = false;
        }
        Ok(())
    }
}

/// The value of a field as given, treating blank as absent.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn require(value: &Option<String>, field: AddressField) -> Result<&str, AddressError> {
    present(value).ok_or(AddressError::Missing(field))
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forth_road() -> Address {
        Address::new()
            .with_number("14")
            .with_street("Forth Road")
            .with_town("Upminster")
            .with_postcode("RM14 2QY")
            .with_country("UK")
    }

    fn hutton_drive() -> Address {
        Address::new()
            .with_number("52")
            .with_street("Hutton Drive")
            .with_postcode("90210")
            .with_country("US")
    }

    fn field_of(result: Result<(), AddressError>) -> String {
        result.unwrap_err().to_string()
    }

    #[test]
    fn postcode_area_uk() {
        let a = Address::new().with_postcode("RM14 1PX").with_country("UK");
        assert_eq!(a.postcode_area().unwrap().as_str(), "RM14");
    }

    #[test]
    fn postcode_area_us() {
        let a = Address::new().with_postcode("90210").with_country("US");
        assert_eq!(a.postcode_area().unwrap().as_str(), "902");
    }

    #[test]
    fn postcode_area_needs_country_and_postcode() {
        let no_postcode = Address::new().with_country("UK");
        assert_eq!(
            no_postcode.postcode_area().unwrap_err(),
            AddressError::Missing(AddressField::Postcode)
        );

        let no_country = Address::new().with_postcode("RM14 1PX");
        assert_eq!(
            no_country.postcode_area().unwrap_err(),
            AddressError::Missing(AddressField::Country)
        );

        let france = Address::new().with_postcode("75001").with_country("FR");
        assert_eq!(
            france.postcode_area().unwrap_err(),
            AddressError::UnsupportedCountry("FR".into())
        );
    }

    #[test]
    fn str_full() {
        let a = Address::new()
            .with_number("56")
            .with_street("King Edward Road")
            .with_town("Teddington")
            .with_postcode("TW11 9BC")
            .with_country("UK");
        assert_eq!(
            a.to_string(),
            "56, King Edward Road, Teddington, TW11 9BC, UK"
        );
    }

    #[test]
    fn str_partial() {
        let a = Address::new()
            .with_number("56")
            .with_street("King Edward Road")
            .with_postcode("TW11 9BC");
        assert_eq!(a.to_string(), "56, King Edward Road, TW11 9BC");

        let town_only = Address::new().with_town("London").with_country("UK");
        assert_eq!(town_only.to_string(), "London, UK");

        assert_eq!(Address::new().to_string(), "");
    }

    #[test]
    fn empty_address_reports_country() {
        assert_eq!(field_of(Address::new().validate()), "country");
    }

    #[test]
    fn unsupported_country() {
        let a = forth_road().with_country("FR");
        assert_eq!(field_of(a.validate()), "Unsupported country: FR");
    }

    #[test]
    fn valid_uk() {
        assert!(forth_road().validate().is_ok());
    }

    #[test]
    fn missing_number() {
        let a = Address {
            number: None,
            ..forth_road()
        };
        assert_eq!(field_of(a.validate()), "number");
    }

    #[test]
    fn missing_street() {
        let a = Address {
            street: None,
            ..forth_road()
        };
        assert_eq!(field_of(a.validate()), "street");
    }

    #[test]
    fn padded_postcode_is_malformed() {
        let a = forth_road().with_postcode(" RM14 1PX ");
        assert_eq!(
            a.validate().unwrap_err(),
            AddressError::Malformed(AddressField::Postcode)
        );

        let a = Address::new()
            .with_number("52")
            .with_street("Hutton Drive")
            .with_postcode("90210 ")
            .with_country("US");
        assert_eq!(field_of(a.validate()), "postcode");
    }

    #[test]
    fn missing_town() {
        let a = Address {
            town: None,
            ..forth_road()
        };
        assert_eq!(field_of(a.validate()), "town");
    }

    #[test]
    fn missing_country() {
        let a = Address {
            country: None,
            ..forth_road()
        };
        assert_eq!(field_of(a.validate()), "country");
    }

    #[test]
    fn malformed_postcode_uk() {
        let a = forth_road().with_postcode("90210");
        assert_eq!(
            a.validate().unwrap_err(),
            AddressError::Malformed(AddressField::Postcode)
        );
        assert_eq!(field_of(a.validate()), "postcode");
    }

    #[test]
    fn blank_field_is_missing() {
        let a = forth_road().with_street("   ");
        assert_eq!(field_of(a.validate()), "street");
    }

    #[test]
    fn uk_detection_order() {
        // Everything wrong: number is reported first
        let a = Address::new().with_postcode("bad").with_country("UK");
        assert_eq!(field_of(a.validate()), "number");

        let a = a.with_number("1");
        assert_eq!(field_of(a.validate()), "street");

        let a = a.with_street("High Street");
        assert_eq!(field_of(a.validate()), "town");

        let a = a.with_town("Upminster");
        assert_eq!(field_of(a.validate()), "postcode");

        let a = a.with_postcode("RM14 2QY");
        assert!(a.validate().is_ok());
    }

    #[test]
    fn uk_ignores_state() {
        let a = forth_road().with_state("Essex");
        assert!(a.validate().is_ok());
    }

    #[test]
    fn valid_us() {
        let a = Address::new()
            .with_number("1202")
            .with_street("42nd Street")
            .with_town("New York")
            .with_state("NY")
            .with_postcode("01234")
            .with_country("US");
        assert!(a.validate().is_ok());
    }

    #[test]
    fn minimal_us() {
        assert!(hutton_drive().validate().is_ok());
    }

    #[test]
    fn missing_number_us() {
        let a = Address {
            number: None,
            ..hutton_drive()
        };
        assert_eq!(field_of(a.validate()), "number");
    }

    #[test]
    fn missing_street_us() {
        let a = Address {
            street: None,
            ..hutton_drive()
        };
        assert_eq!(field_of(a.validate()), "street");
    }

    #[test]
    fn missing_postcode_us() {
        let a = Address {
            postcode: None,
            ..hutton_drive()
        };
        assert_eq!(field_of(a.validate()), "postcode");
    }

    #[test]
    fn malformed_postcodes_us() {
        for postcode in ["0123", "012345", "01w35"] {
            let a = hutton_drive().with_state("NY").with_postcode(postcode);
            assert_eq!(field_of(a.validate()), "postcode", "postcode {postcode}");
        }
    }

    #[test]
    fn unknown_state_us() {
        let a = hutton_drive().with_state("XX");
        assert_eq!(
            a.validate().unwrap_err(),
            AddressError::Malformed(AddressField::State)
        );
    }

    #[test]
    fn us_postcode_reported_before_state() {
        let a = hutton_drive().with_state("XX").with_postcode("0123");
        assert_eq!(field_of(a.validate()), "postcode");
    }

    #[test]
    fn us_town_optional() {
        let a = hutton_drive();
        assert!(a.town.is_none());
        assert!(a.validate().is_ok());
    }

    #[test]
    fn deserialize_number_as_integer_or_string() {
        let a: Address = serde_json::from_str(
            r#"{"number": 55, "street": "King Edward Road", "town": "Teddington",
                "postcode": "TW11 1AB", "country": "UK"}"#,
        )
        .unwrap();
        assert_eq!(a.number.as_deref(), Some("55"));
        assert!(a.validate().is_ok());

        let b: Address = serde_json::from_str(r#"{"number": "55A"}"#).unwrap();
        assert_eq!(b.number.as_deref(), Some("55A"));
    }

    #[test]
    fn deserialize_city_alias() {
        let a: Address = serde_json::from_str(
            r#"{"number": 1202, "street": "42nd Street", "city": "New York",
                "state": "NY", "postcode": "01234", "country": "US"}"#,
        )
        .unwrap();
        assert_eq!(a.town.as_deref(), Some("New York"));
        assert!(a.validate().is_ok());
    }

    #[test]
    fn serialize_skips_absent_fields() {
        let a = Address::new().with_postcode("NW1 1AB").with_country("UK");
        assert_eq!(
            serde_json::to_value(&a).unwrap(),
            serde_json::json!({"postcode": "NW1 1AB", "country": "UK"})
        );
    }

    #[test]
    fn country_code_roundtrip() {
        for country in [Country::Uk, Country::Us] {
            assert_eq!(Country::parse(country.code()).unwrap(), country);
        }
    }
}
