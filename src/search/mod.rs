//! # Flight Search
//!
//! Query parsing, filtering and ordering for the flight listing.

pub mod filter;
pub mod query;

pub use filter::{apply, matches, sort_by_departure};
pub use query::{FlightQuery, PriceCap};
