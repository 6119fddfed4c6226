//! Journey quoting and booking.
//!
//! Prices taxi journeys between two addresses, either from a postcode-area
//! rate table or from road distance at a flat rate, validates addresses
//! against per-country rules and keeps accepted bookings under sequential
//! ids.

pub mod booking;
pub mod cache;
pub mod cli;
pub mod config;
pub mod distance;
pub mod domain;
pub mod dto;
pub mod pricer;
pub mod ratebook;
