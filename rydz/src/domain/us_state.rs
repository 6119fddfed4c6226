//! US state and territory codes.

/// USPS codes accepted in the `state` field of a US address.
///
/// The 50 states, the District of Columbia, the inhabited territories and
/// the armed forces codes.
const US_STATE_CODES: [&str; 59] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", //
    "HI", "ID", "IL", "IN", "IA", "KS", "KY", "LA", "ME", "MD", //
    "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ", //
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", //
    "SD", "TN", "TX", "UT", "VT", "VA", "WA", "WV", "WI", "WY", //
    "DC", // District of Columbia
    "AS", "GU", "MP", "PR", "VI", // Territories
    "AA", "AE", "AP", // Armed forces
];

/// Whether `code` is a recognised US state or territory code.
///
/// Codes are matched exactly; lowercase is rejected.
///
/// # Examples
///
/// ```
/// use rydz::domain::is_us_state;
///
/// assert!(is_us_state("NY"));
/// assert!(is_us_state("PR"));
/// assert!(!is_us_state("ny"));
/// assert!(!is_us_state("XX"));
/// ```
pub fn is_us_state(code: &str) -> bool {
    US_STATE_CODES.contains(&code)
}
