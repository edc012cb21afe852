//! # Pricing
//!
//! Pure functions for distance, flight time and price. No state, no
//! error conditions: inputs are catalog values and always valid.

mod geo;
mod price;

pub use geo::{distance_km, estimate_duration_minutes, CRUISE_SPEED_KMH, EARTH_RADIUS_KM};
pub use price::{
    calculate_price, FlightType, ParseFlightTypeError, Price, EMPTY_LEG_FACTOR,
    FUEL_SURCHARGE_PER_KM, LANDING_FEE, OPERATOR_MARGIN,
};

use crate::catalog::Airport;

/// Distance between two catalog airports
pub fn airport_distance_km(from: &Airport, to: &Airport) -> u32 {
    distance_km(from.latitude, from.longitude, to.latitude, to.longitude)
}
