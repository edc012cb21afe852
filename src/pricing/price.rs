//! Charter and empty-leg price calculation

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::geo::estimate_duration_minutes;
use crate::catalog::Aircraft;

/// Fuel surcharge, USD per km
pub const FUEL_SURCHARGE_PER_KM: f64 = 0.8;

/// Flat landing fee, USD
pub const LANDING_FEE: f64 = 500.0;

/// Operator margin applied on the base (hourly) price
pub const OPERATOR_MARGIN: f64 = 0.25;

/// Share of the charter total charged for an empty leg
pub const EMPTY_LEG_FACTOR: f64 = 0.3;

/// How a flight is sold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlightType {
    /// Whole aircraft, custom route and schedule
    Charter,
    /// Repositioning flight, seats sold individually
    EmptyLeg,
}

impl FlightType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlightType::Charter => "charter",
            FlightType::EmptyLeg => "empty_leg",
        }
    }
}

impl fmt::Display for FlightType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown flight type: {0}")]
pub struct ParseFlightTypeError(pub String);

impl FromStr for FlightType {
    type Err = ParseFlightTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "charter" => Ok(FlightType::Charter),
            "empty_leg" => Ok(FlightType::EmptyLeg),
            other => Err(ParseFlightTypeError(other.to_string())),
        }
    }
}

/// Computed price in whole USD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Price {
    pub total: u64,
    /// Only set for empty legs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_seat: Option<u64>,
}

/// Price a flight of `distance_km` on `aircraft`.
///
/// The charter total is hourly cost (on the rounded duration) plus fuel
/// surcharge, landing fee and operator margin. Empty legs are sold at
/// [`EMPTY_LEG_FACTOR`] of that total and additionally carry a per-seat
/// price over the full cabin.
pub fn calculate_price(distance_km: u32, aircraft: &Aircraft, flight_type: FlightType) -> Price {
    let duration_hours = f64::from(estimate_duration_minutes(distance_km)) / 60.0;
    let base = duration_hours * f64::from(aircraft.hourly_rate);

    let fuel_surcharge = f64::from(distance_km) * FUEL_SURCHARGE_PER_KM;
    let margin = base * OPERATOR_MARGIN;

    let charter_total = (base + fuel_surcharge + LANDING_FEE + margin).round() as u64;

    match flight_type {
        FlightType::Charter => Price {
            total: charter_total,
            per_seat: None,
        },
        FlightType::EmptyLeg => {
            let total = (charter_total as f64 * EMPTY_LEG_FACTOR).round() as u64;
            let per_seat = (total as f64 / f64::from(aircraft.capacity)).round() as u64;
            Price {
                total,
                per_seat: Some(per_seat),
            }
        }
    }
}
