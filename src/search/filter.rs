//! Listing filters and ordering

use crate::generator::Flight;

use super::query::FlightQuery;

/// Apply every set filter of `query`, in order: flight type, origin,
/// destination, date, per-seat price. The result is sorted by departure
/// date and time; ties keep generation order.
pub fn apply(flights: Vec<Flight>, query: &FlightQuery) -> Vec<Flight> {
    let mut flights: Vec<Flight> = flights
        .into_iter()
        .filter(|f| matches(f, query))
        .collect();

    sort_by_departure(&mut flights);
    flights
}

/// Checks a single flight against all filters (AND semantics)
pub fn matches(flight: &Flight, query: &FlightQuery) -> bool {
    if let Some(flight_type) = query.flight_type {
        if flight.flight_type != flight_type {
            return false;
        }
    }

    if let Some(origin) = &query.origin {
        if flight.departure_airport_id != origin.as_str() {
            return false;
        }
    }

    if let Some(destination) = &query.destination {
        if flight.arrival_airport_id != destination.as_str() {
            return false;
        }
    }

    if let Some(date) = &query.date {
        if flight.departure_date.format("%Y-%m-%d").to_string() != *date {
            return false;
        }
    }

    if let Some(cap) = query.max_price {
        // Whole-aircraft listings carry no seat price and never match
        match flight.price_per_seat {
            Some(per_seat) if cap.admits(per_seat) => {}
            _ => return false,
        }
    }

    true
}

/// Stable ascending sort on departure date+time
pub fn sort_by_departure(flights: &mut [Flight]) {
    flights.sort_by_key(|f| f.departs_at());
}
