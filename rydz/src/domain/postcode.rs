//! Postcode formats and postcode areas.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The coarse prefix of a postcode used as a rate-table key.
///
/// UK areas are the outward code ("RM14" for "RM14 1PX"); US areas are the
/// first three digits of the ZIP code ("902" for "90210").
///
/// # Examples
///
/// ```
/// use rydz::domain::PostcodeArea;
///
/// let area = PostcodeArea::new("NW1");
/// assert_eq!(area.as_str(), "NW1");
/// assert_eq!(area.to_string(), "NW1");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostcodeArea(String);

impl PostcodeArea {
    /// Wrap an area key.
    pub fn new(area: impl Into<String>) -> Self {
        Self(area.into())
    }

    /// Returns the area as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PostcodeArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PostcodeArea({})", self.0)
    }
}

impl fmt::Display for PostcodeArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether `s` is a UK postcode of the form `AA9 9AA` or `AA99 9AA`.
///
/// # Examples
///
/// ```
/// use rydz::domain::is_uk_postcode;
///
/// assert!(is_uk_postcode("RM14 1PX"));
/// assert!(is_uk_postcode("NW1 1AB"));
///
/// assert!(!is_uk_postcode("90210"));
/// assert!(!is_uk_postcode("rm14 1px"));
/// assert!(!is_uk_postcode("RM141PX"));
/// ```
pub fn is_uk_postcode(s: &str) -> bool {
    let bytes = s.as_bytes();

    // Outward code: 2 letters and 1-2 digits, so the space sits at 3 or 4
    let space = match bytes.iter().position(|&b| b == b' ') {
        Some(i @ (3 | 4)) => i,
        _ => return false,
    };
    let (outward, inward) = (&bytes[..space], &bytes[space + 1..]);

    if !outward[..2].iter().all(u8::is_ascii_uppercase) {
        return false;
    }
    if !outward[2..].iter().all(u8::is_ascii_digit) {
        return false;
    }

    // Inward code: 1 digit then 2 letters
    inward.len() == 3
        && inward[0].is_ascii_digit()
        && inward[1].is_ascii_uppercase()
        && inward[2].is_ascii_uppercase()
}

/// Whether `s` is a five-digit US ZIP code.
///
/// # Examples
///
/// ```
/// use rydz::domain::is_us_zip;
///
/// assert!(is_us_zip("90210"));
/// assert!(is_us_zip("01234"));
///
/// assert!(!is_us_zip("0123"));
/// assert!(!is_us_zip("012345"));
/// assert!(!is_us_zip("01w35"));
/// ```
pub fn is_us_zip(s: &str) -> bool {
    s.len() == 5 && s.bytes().all(|b| b.is_ascii_digit())
}

/// UK area: everything before the first space.
pub(crate) fn uk_area(postcode: &str) -> PostcodeArea {
    let outward = postcode.split(' ').next().unwrap_or(postcode);
    PostcodeArea::new(outward)
}

/// US area: the first three characters.
pub(crate) fn us_area(postcode: &str) -> PostcodeArea {
    PostcodeArea::new(postcode.chars().take(3).collect::<String>())
}
