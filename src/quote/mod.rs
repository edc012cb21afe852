//! # Charter Quotes
//!
//! Prices a whole-aircraft charter between two catalog airports and
//! splits the total across the passenger count.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};
use thiserror::Error;

use crate::catalog::{self, Aircraft, Airport};
use crate::pricing::{airport_distance_km, calculate_price, estimate_duration_minutes, FlightType};

/// Why a quote request was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Unknown origin airport: {0}")]
    UnknownOrigin(String),

    #[error("Unknown destination airport: {0}")]
    UnknownDestination(String),

    #[error("Unknown aircraft: {0}")]
    UnknownAircraft(String),

    #[error("Passenger count must be a whole number of at least 1")]
    NoPassengers,
}

pub type QuoteResult<T> = Result<T, QuoteError>;

/// Body of `POST /quote`.
///
/// Decoding is lenient so that any well-formed JSON object reaches
/// [`compute`] and bad values surface as [`QuoteError`]:
/// - ids and date that are not strings are kept in their JSON text form,
///   which never matches a catalog id
/// - passengers accepts any whole non-negative number (`4`, `4.0`, `"4"`);
///   other values decode as 0
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub origin: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub destination: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub aircraft_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub passengers: Option<u32>,
    /// Requested travel date, echoed back unchanged
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: Option<String>,
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    let count = match Value::deserialize(deserializer)? {
        Value::Null => return Ok(None),
        Value::Number(n) => whole_count(&n),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    Ok(Some(count.unwrap_or(0)))
}

fn whole_count(n: &Number) -> Option<u32> {
    if let Some(v) = n.as_u64() {
        return u32::try_from(v).ok();
    }
    let v = n.as_f64()?;
    if v.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&v) {
        Some(v as u32)
    } else {
        None
    }
}

impl QuoteRequest {
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        aircraft_id: impl Into<String>,
        passengers: u32,
    ) -> Self {
        Self {
            origin: Some(origin.into()),
            destination: Some(destination.into()),
            aircraft_id: Some(aircraft_id.into()),
            passengers: Some(passengers),
            date: None,
        }
    }
}

/// A priced charter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub origin: Airport,
    pub destination: Airport,
    pub aircraft: Aircraft,
    pub distance_km: u32,
    pub duration_minutes: u32,
    pub total_price: u64,
    pub price_per_person: u64,
    pub passengers: u32,
    pub date: Option<String>,
}

/// Price a charter for `request`.
///
/// Airport and aircraft ids must match the catalog exactly.
pub fn compute(request: &QuoteRequest) -> QuoteResult<Quote> {
    let origin_id = request
        .origin
        .as_deref()
        .ok_or(QuoteError::MissingField("origin"))?;
    let destination_id = request
        .destination
        .as_deref()
        .ok_or(QuoteError::MissingField("destination"))?;
    let aircraft_id = request
        .aircraft_id
        .as_deref()
        .ok_or(QuoteError::MissingField("aircraft_id"))?;

    let origin = catalog::find_airport(origin_id)
        .ok_or_else(|| QuoteError::UnknownOrigin(origin_id.to_string()))?;
    let destination = catalog::find_airport(destination_id)
        .ok_or_else(|| QuoteError::UnknownDestination(destination_id.to_string()))?;
    let aircraft = catalog::find_aircraft(aircraft_id)
        .ok_or_else(|| QuoteError::UnknownAircraft(aircraft_id.to_string()))?;

    let passengers = request.passengers.ok_or(QuoteError::MissingField("passengers"))?;
    if passengers == 0 {
        return Err(QuoteError::NoPassengers);
    }

    let distance_km = airport_distance_km(origin, destination);
    let duration_minutes = estimate_duration_minutes(distance_km);
    let price = calculate_price(distance_km, aircraft, FlightType::Charter);
    let price_per_person = (price.total as f64 / f64::from(passengers)).round() as u64;

    Ok(Quote {
        origin: *origin,
        destination: *destination,
        aircraft: *aircraft,
        distance_km,
        duration_minutes,
        total_price: price.total,
        price_per_person,
        passengers,
        date: request.date.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_eze_cor() {
        let quote = compute(&QuoteRequest::new("eze", "cor", "citation_cj3", 4)).unwrap();
        assert!(quote.total_price > 0);
        assert!(quote.price_per_person > 0);
        assert_eq!(
            quote.price_per_person,
            (quote.total_price as f64 / 4.0).round() as u64
        );
        assert_eq!(quote.origin.code, "EZE");
        assert_eq!(quote.destination.code, "COR");
        assert_eq!(quote.passengers, 4);
    }

    #[test]
    fn test_quote_matches_charter_price() {
        let quote = compute(&QuoteRequest::new("arp", "brc", "falcon_2000", 1)).unwrap();
        let expected = calculate_price(
            quote.distance_km,
            catalog::find_aircraft("falcon_2000").unwrap(),
            FlightType::Charter,
        );
        assert_eq!(quote.total_price, expected.total);
        assert_eq!(quote.price_per_person, quote.total_price);
    }

    #[test]
    fn test_unknown_aircraft() {
        let err = compute(&QuoteRequest::new("eze", "cor", "concorde", 2)).unwrap_err();
        assert_eq!(err, QuoteError::UnknownAircraft("concorde".to_string()));
    }

    #[test]
    fn test_unknown_airports() {
        assert!(matches!(
            compute(&QuoteRequest::new("jfk", "cor", "citation_cj3", 2)),
            Err(QuoteError::UnknownOrigin(_))
        ));
        assert!(matches!(
            compute(&QuoteRequest::new("eze", "lhr", "citation_cj3", 2)),
            Err(QuoteError::UnknownDestination(_))
        ));
    }

    #[test]
    fn test_missing_fields() {
        let err = compute(&QuoteRequest::default()).unwrap_err();
        assert_eq!(err, QuoteError::MissingField("origin"));

        let request = QuoteRequest {
            passengers: None,
            ..QuoteRequest::new("eze", "cor", "citation_cj3", 1)
        };
        assert_eq!(
            compute(&request).unwrap_err(),
            QuoteError::MissingField("passengers")
        );
    }

    // ==================
    // Body Decoding
    // ==================

    fn decode(body: &str) -> QuoteRequest {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_non_string_ids_are_unknown() {
        let request =
            decode(r#"{"origin": "eze", "destination": "cor", "aircraft_id": 123, "passengers": 4}"#);
        assert_eq!(request.aircraft_id.as_deref(), Some("123"));
        assert_eq!(
            compute(&request).unwrap_err(),
            QuoteError::UnknownAircraft("123".to_string())
        );

        let request = decode(r#"{"origin": 7, "destination": "cor", "aircraft_id": "citation_cj3"}"#);
        assert!(matches!(compute(&request), Err(QuoteError::UnknownOrigin(_))));
    }

    #[test]
    fn test_null_fields_are_missing() {
        let request = decode(r#"{"origin": null, "passengers": null}"#);
        assert_eq!(request.origin, None);
        assert_eq!(request.passengers, None);
    }

    #[test]
    fn test_whole_passenger_counts_accepted() {
        assert_eq!(decode(r#"{"passengers": 2.0}"#).passengers, Some(2));
        assert_eq!(decode(r#"{"passengers": "3"}"#).passengers, Some(3));
        assert_eq!(decode(r#"{"passengers": 4}"#).passengers, Some(4));
    }

    #[test]
    fn test_invalid_passenger_counts_rejected() {
        for body in [
            r#"{"passengers": 2.5}"#,
            r#"{"passengers": -3}"#,
            r#"{"passengers": "many"}"#,
            r#"{"passengers": true}"#,
            r#"{"passengers": 10000000000}"#,
        ] {
            let request = QuoteRequest {
                passengers: decode(body).passengers,
                ..QuoteRequest::new("eze", "cor", "citation_cj3", 1)
            };
            assert_eq!(compute(&request).unwrap_err(), QuoteError::NoPassengers, "{}", body);
        }
    }

    #[test]
    fn test_zero_passengers_rejected() {
        let err = compute(&QuoteRequest::new("eze", "cor", "citation_cj3", 0)).unwrap_err();
        assert_eq!(err, QuoteError::NoPassengers);
    }

    #[test]
    fn test_date_echoed() {
        let request = QuoteRequest {
            date: Some("2026-12-24".into()),
            ..QuoteRequest::new("eze", "mdz", "learjet_75", 3)
        };
        let quote = compute(&request).unwrap();
        assert_eq!(quote.date.as_deref(), Some("2026-12-24"));
    }

    #[test]
    fn test_request_from_partial_json() {
        let request: QuoteRequest =
            serde_json::from_str(r#"{"origin": "eze", "passengers": 2}"#).unwrap();
        assert_eq!(request.origin.as_deref(), Some("eze"));
        assert!(request.destination.is_none());
    }
}
