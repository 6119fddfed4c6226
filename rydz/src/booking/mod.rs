//! Bookings: validated, priced journeys with sequential ids.

mod desk;
mod error;
mod model;
mod store;

pub use desk::BookingDesk;
pub use error::BookingError;
pub use model::{Booking, BookingDetails, BookingId, BookingRequest, ValidatedBooking};
pub use store::{BookingCollection, BookingStore, InMemoryBookings};
