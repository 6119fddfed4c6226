//! The booking workflow.
//!
//! A booking is accepted only if both addresses pass their country policy,
//! the pickup time parses, the booker and passengers are given and the
//! journey can be priced. Any failure stops the workflow before the store
//! is touched.

use tracing::{debug, info};

use crate::domain::Journey;
use crate::pricer::{Pricer, Quote, QuoteStatus};
use crate::ratebook::RateBook;

use super::error::BookingError;
use super::model::{Booking, BookingDetails, BookingId, BookingRequest};
use super::store::{BookingCollection, BookingStore, InMemoryBookings};

/// Quotes journeys and manages bookings against one pricer and one store.
pub struct BookingDesk<R, C = InMemoryBookings> {
    pricer: Pricer<R>,
    store: BookingStore<C>,
}

impl<R: RateBook> BookingDesk<R, InMemoryBookings> {
    /// A desk with an empty in-memory store.
    pub fn in_memory(pricer: Pricer<R>) -> Self {
        Self::new(pricer, BookingStore::in_memory())
    }
}

impl<R: RateBook, C: BookingCollection> BookingDesk<R, C> {
    pub fn new(pricer: Pricer<R>, store: BookingStore<C>) -> Self {
        Self { pricer, store }
    }

    pub fn pricer(&self) -> &Pricer<R> {
        &self.pricer
    }

    pub fn store(&self) -> &BookingStore<C> {
        &self.store
    }

    /// Price a journey without booking it.
    pub fn quote(&self, journey: &Journey) -> Quote {
        self.pricer.quote(journey)
    }

    /// Validate and price a request without storing it.
    pub fn prepare(&self, request: &BookingRequest) -> Result<BookingDetails, BookingError> {
        let valid = request.validate()?;

        match self.pricer.quote(&valid.journey).status {
            QuoteStatus::Ok { price } => Ok(valid.priced(price)),
            QuoteStatus::Error { reason } => Err(BookingError::Pricing(reason)),
        }
    }

    /// Validate, price and store a new booking.
    pub fn create(&mut self, request: &BookingRequest) -> Result<Booking, BookingError> {
        let details = self.prepare(request)?;
        let id = self.store.add(details);
        info!(%id, "booking created");
        self.store.get(id)
    }

    pub fn get(&self, id: BookingId) -> Result<Booking, BookingError> {
        self.store.get(id)
    }

    pub fn list(&self) -> Vec<Booking> {
        self.store.list()
    }

    /// Cancel a booking, returning what was cancelled.
    pub fn cancel(&mut self, id: BookingId) -> Result<Booking, BookingError> {
        let booking = self.store.pop(id)?;
        info!(%id, "booking cancelled");
        Ok(booking)
    }

    /// Replace a booking with a new version under a new id.
    ///
    /// The replacement is validated and priced before the old booking is
    /// removed, so a rejected rebook leaves the original in place.
    pub fn rebook(&mut self, id: BookingId, request: &BookingRequest) -> Result<Booking, BookingError> {
        self.store.get(id)?;
        let details = self.prepare(request)?;

        self.store.pop(id)?;
        let new_id = self.store.add(details);
        debug!(old = %id, new = %new_id, "booking replaced");
        self.store.get(new_id)
    }
}
