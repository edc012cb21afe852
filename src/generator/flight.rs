//! Flight record produced by the generator

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Serialize, Serializer};

use crate::catalog::{Aircraft, Airport};
use crate::pricing::FlightType;

/// Booking status of a listed flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlightStatus {
    Available,
}

/// A listed flight.
///
/// Ids always point into the static catalog; the embedded airport and
/// aircraft records are copies of the catalog entries for those ids.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Flight {
    pub id: String,
    pub flight_type: FlightType,
    pub aircraft_id: &'static str,
    pub aircraft: Aircraft,
    pub departure_airport_id: &'static str,
    pub departure_airport: Airport,
    pub arrival_airport_id: &'static str,
    pub arrival_airport: Airport,
    pub departure_date: NaiveDate,
    #[serde(serialize_with = "serialize_hhmm")]
    pub departure_time: NaiveTime,
    pub arrival_date: NaiveDate,
    #[serde(serialize_with = "serialize_hhmm")]
    pub arrival_time: NaiveTime,
    pub duration_minutes: u32,
    pub distance_km: u32,
    pub price_total: u64,
    pub price_per_seat: Option<u64>,
    pub available_seats: u32,
    pub status: FlightStatus,
    pub operator: &'static str,
}

impl Flight {
    /// Combined departure date and time, the listing sort key
    pub fn departs_at(&self) -> NaiveDateTime {
        self.departure_date.and_time(self.departure_time)
    }

    pub fn arrives_at(&self) -> NaiveDateTime {
        self.arrival_date.and_time(self.arrival_time)
    }
}

/// Times are listed as `HH:MM`
fn serialize_hhmm<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&time.format("%H:%M"))
}
