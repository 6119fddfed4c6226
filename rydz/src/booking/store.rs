//! Booking persistence.
//!
//! [`BookingCollection`] is the persistence seam: anything that can insert,
//! find, enumerate and remove records. [`InMemoryBookings`] is the
//! process-lifetime implementation; [`BookingStore`] is what the rest of the
//! crate talks to.

use std::collections::BTreeMap;

use tracing::debug;

use super::error::BookingError;
use super::model::{Booking, BookingDetails, BookingId};

/// Storage backend for bookings.
///
/// Implementations assign ids: each `insert` must return an id greater than
/// every id it returned before, and never reuse one.
pub trait BookingCollection {
    /// Store a booking under a fresh id.
    fn insert(&mut self, details: BookingDetails) -> BookingId;

    /// Fetch a booking by id.
    fn find_one(&self, id: BookingId) -> Option<Booking>;

    /// All current bookings, in ascending id order.
    fn all(&self) -> Vec<Booking>;

    /// Remove and return a booking.
    fn remove(&mut self, id: BookingId) -> Option<Booking>;
}

/// Bookings held in memory for the life of the process.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBookings {
    /// Last id handed out; 0 before the first insert.
    last_id: u64,
    rows: BTreeMap<BookingId, BookingDetails>,
}

impl InMemoryBookings {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookingCollection for InMemoryBookings {
    fn insert(&mut self, details: BookingDetails) -> BookingId {
        self.last_id += 1;
        let id = BookingId::new(self.last_id);
        self.rows.insert(id, details);
        id
    }

    fn find_one(&self, id: BookingId) -> Option<Booking> {
        self.rows.get(&id).map(|details| Booking {
            id,
            details: details.clone(),
        })
    }

    fn all(&self) -> Vec<Booking> {
        self.rows
            .iter()
            .map(|(id, details)| Booking {
                id: *id,
                details: details.clone(),
            })
            .collect()
    }

    fn remove(&mut self, id: BookingId) -> Option<Booking> {
        self.rows.remove(&id).map(|details| Booking { id, details })
    }
}

/// Sequential-id store of accepted bookings.
///
/// There is no update in place: changing a booking means removing it and
/// adding the new version, which gets a new id.
#[derive(Debug, Clone, Default)]
pub struct BookingStore<C = InMemoryBookings> {
    collection: C,
}

impl BookingStore<InMemoryBookings> {
    /// An empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(InMemoryBookings::new())
    }
}

impl<C: BookingCollection> BookingStore<C> {
    pub fn new(collection: C) -> Self {
        Self { collection }
    }

    /// Store a booking and return its new id.
    pub fn add(&mut self, details: BookingDetails) -> BookingId {
        let id = self.collection.insert(details);
        debug!(%id, "booking added");
        id
    }

    /// Fetch a booking.
    pub fn get(&self, id: BookingId) -> Result<Booking, BookingError> {
        self.collection
            .find_one(id)
            .ok_or(BookingError::NotFound(id))
    }

    /// Remove and return a booking.
    pub fn pop(&mut self, id: BookingId) -> Result<Booking, BookingError> {
        let booking = self
            .collection
            .remove(id)
            .ok_or(BookingError::NotFound(id))?;
        debug!(%id, "booking removed");
        Ok(booking)
    }

    /// All current bookings, in ascending id order.
    pub fn list(&self) -> Vec<Booking> {
        self.collection.all()
    }
}
