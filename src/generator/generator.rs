//! Synthetic empty-leg schedule generation

use chrono::{Days, Duration, NaiveDate, NaiveTime};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::config::GeneratorConfig;
use super::flight::{Flight, FlightStatus};
use crate::catalog;
use crate::pricing::{airport_distance_km, calculate_price, estimate_duration_minutes, FlightType};

/// First departure hour of the day
const FIRST_DEPARTURE_HOUR: u32 = 6;

/// Departures are drawn from hours before this one
const LAST_DEPARTURE_HOUR: u32 = 22;

/// Departure minutes fall on quarter hours
const DEPARTURE_SLOT_MINUTES: u32 = 15;

/// Seats held back from sale on every empty leg
const RESERVED_SEATS: u32 = 2;

/// Builds empty-leg listings from the catalog.
///
/// The random source is passed in so callers decide between a seeded
/// (reproducible) and an entropy-seeded run.
#[derive(Debug, Clone, Default)]
pub struct FlightGenerator {
    config: GeneratorConfig,
}

impl FlightGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Random source for one run: seeded from the config when a seed is
    /// set, from OS entropy otherwise.
    pub fn rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Generate listings for `config.days` days starting at `start`.
    ///
    /// Stops early once `config.max_flights` listings exist. Ids are
    /// assigned sequentially as `empty_leg_001`, `empty_leg_002`, ...
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R, start: NaiveDate) -> Vec<Flight> {
        let mut flights = Vec::with_capacity(self.config.max_flights);

        'days: for day_offset in 0..self.config.days {
            let Some(date) = start.checked_add_days(Days::new(u64::from(day_offset))) else {
                break;
            };

            let per_day = rng.gen_range(self.config.min_per_day..=self.config.max_per_day);
            for _ in 0..per_day {
                if flights.len() >= self.config.max_flights {
                    break 'days;
                }
                let sequence = flights.len() + 1;
                if let Some(flight) = Self::draw_flight(rng, date, sequence) {
                    flights.push(flight);
                }
            }
        }

        debug!(
            start = %start,
            count = flights.len(),
            "generated empty-leg flights"
        );
        flights
    }

    /// Draw a single empty leg departing on `date`
    fn draw_flight<R: Rng + ?Sized>(
        rng: &mut R,
        date: NaiveDate,
        sequence: usize,
    ) -> Option<Flight> {
        let route = catalog::routes().choose(rng)?;
        let aircraft = catalog::aircraft().choose(rng)?;
        let departure_airport = catalog::find_airport(route.origin)?;
        let arrival_airport = catalog::find_airport(route.destination)?;

        let distance_km = airport_distance_km(departure_airport, arrival_airport);
        let duration_minutes = estimate_duration_minutes(distance_km);
        let price = calculate_price(distance_km, aircraft, FlightType::EmptyLeg);

        let hour = rng.gen_range(FIRST_DEPARTURE_HOUR..LAST_DEPARTURE_HOUR);
        let minute = rng.gen_range(0..60 / DEPARTURE_SLOT_MINUTES) * DEPARTURE_SLOT_MINUTES;
        let departure_time = NaiveTime::from_hms_opt(hour, minute, 0)?;

        let departs_at = date.and_time(departure_time);
        let arrives_at = departs_at + Duration::minutes(i64::from(duration_minutes));

        let sellable_seats = aircraft.capacity.saturating_sub(RESERVED_SEATS).max(1);
        let available_seats = rng.gen_range(1..=sellable_seats);
        let operator = *catalog::operators().choose(rng)?;

        Some(Flight {
            id: format!("empty_leg_{:03}", sequence),
            flight_type: FlightType::EmptyLeg,
            aircraft_id: aircraft.id,
            aircraft: *aircraft,
            departure_airport_id: departure_airport.id,
            departure_airport: *departure_airport,
            arrival_airport_id: arrival_airport.id,
            arrival_airport: *arrival_airport,
            departure_date: date,
            departure_time,
            arrival_date: arrives_at.date(),
            arrival_time: arrives_at.time(),
            duration_minutes,
            distance_km,
            price_total: price.total,
            price_per_seat: price.per_seat,
            available_seats,
            status: FlightStatus::Available,
            operator,
        })
    }
}
