//! # Static Catalog
//!
//! Read-only reference tables: airports, aircraft, the route network
//! and the operator roster. Nothing here is mutated at runtime.

mod airport;
mod fleet;
mod network;

pub use airport::Airport;
pub use fleet::{Aircraft, AircraftCategory};
pub use network::Route;

use airport::AIRPORTS;
use fleet::AIRCRAFT;
use network::{OPERATORS, ROUTES};

/// All airports, in catalog order
pub fn airports() -> &'static [Airport] {
    &AIRPORTS
}

/// All aircraft, in catalog order
pub fn aircraft() -> &'static [Aircraft] {
    &AIRCRAFT
}

/// Every route flown by the empty-leg network
pub fn routes() -> &'static [Route] {
    &ROUTES
}

pub fn operators() -> &'static [&'static str] {
    &OPERATORS
}

/// Look up an airport by id (exact match)
pub fn find_airport(id: &str) -> Option<&'static Airport> {
    AIRPORTS.iter().find(|a| a.id == id)
}

/// Look up an aircraft by id (exact match)
pub fn find_aircraft(id: &str) -> Option<&'static Aircraft> {
    AIRCRAFT.iter().find(|a| a.id == id)
}
