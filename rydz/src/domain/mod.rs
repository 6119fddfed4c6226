//! Domain types for journey pricing and booking.
//!
//! Addresses arrive unvalidated, exactly as a client sent them; the country
//! policies here decide whether they are usable. Derived values such as
//! postcode areas and pickup times are validated at construction.

mod address;
mod error;
mod journey;
mod pickup;
mod postcode;
mod us_state;

pub use address::{Address, AddressField, Country};
pub use error::AddressError;
pub use journey::{Journey, Side};
pub use pickup::{PICKUP_TIME_FORMAT, PickupTime, PickupTimeError};
pub use postcode::{PostcodeArea, is_uk_postcode, is_us_zip};
pub use us_state::is_us_state;
