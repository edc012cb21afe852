//! # Listing Query Parameters
//!
//! Parses the `GET /flights` query string into a [`FlightQuery`].
//!
//! Parsing never fails. Values that cannot be understood either drop the
//! filter (`type`) or turn it into one no flight satisfies (`maxPrice`).

use std::collections::HashMap;

use tracing::debug;

use crate::pricing::FlightType;

/// Upper bound on the per-seat price
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceCap {
    /// Inclusive bound, USD
    AtMost(u64),
    /// Negative or non-numeric bound; no price is admitted
    Unsatisfiable,
}

impl PriceCap {
    /// Read the leading integer of `value`, the way browsers' `parseInt`
    /// does: optional sign, then decimal digits (or hex after `0x`).
    /// Anything after the digits is ignored, so `500.99` and `500usd`
    /// both cap at 500. Out-of-range values saturate.
    pub fn parse(value: &str) -> Self {
        let value = value.trim_start();
        let (negative, rest) = match value.as_bytes().first() {
            Some(b'-') => (true, &value[1..]),
            Some(b'+') => (false, &value[1..]),
            _ => (false, value),
        };

        let (radix, rest) = match rest.get(..2) {
            Some("0x") | Some("0X") => (16, &rest[2..]),
            _ => (10, rest),
        };

        let digits: Vec<u32> = rest.chars().map_while(|c| c.to_digit(radix)).collect();
        if digits.is_empty() {
            return PriceCap::Unsatisfiable;
        }

        let magnitude = digits.iter().fold(0u64, |acc, &d| {
            acc.saturating_mul(u64::from(radix))
                .saturating_add(u64::from(d))
        });

        if negative && magnitude > 0 {
            PriceCap::Unsatisfiable
        } else {
            PriceCap::AtMost(magnitude)
        }
    }

    /// Whether a per-seat price passes this cap
    pub fn admits(&self, price: u64) -> bool {
        match self {
            PriceCap::AtMost(max) => price <= *max,
            PriceCap::Unsatisfiable => false,
        }
    }
}

/// Filters for the flight listing. Unset fields do not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlightQuery {
    pub flight_type: Option<FlightType>,
    /// Departure airport id
    pub origin: Option<String>,
    /// Arrival airport id
    pub destination: Option<String>,
    /// Departure date, `YYYY-MM-DD`
    pub date: Option<String>,
    pub max_price: Option<PriceCap>,
}

impl FlightQuery {
    /// Parse from raw query parameters.
    ///
    /// Empty values count as absent. Unknown keys and unknown flight
    /// types are ignored.
    pub fn parse(params: &HashMap<String, String>) -> Self {
        let mut query = FlightQuery::default();

        for (key, value) in params {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match key.as_str() {
                "type" => match value.parse() {
                    Ok(flight_type) => query.flight_type = Some(flight_type),
                    Err(e) => debug!(error = %e, "ignoring type filter"),
                },
                "origin" => query.origin = Some(value.to_string()),
                "destination" => query.destination = Some(value.to_string()),
                "date" => query.date = Some(value.to_string()),
                "maxPrice" => query.max_price = Some(PriceCap::parse(value)),
                _ => {}
            }
        }

        query
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_max_price(mut self, max_price: u64) -> Self {
        self.max_price = Some(PriceCap::AtMost(max_price));
        self
    }

    pub fn with_flight_type(mut self, flight_type: FlightType) -> Self {
        self.flight_type = Some(flight_type);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_all_fields() {
        let query = FlightQuery::parse(&params(&[
            ("type", "empty_leg"),
            ("origin", "eze"),
            ("destination", "cor"),
            ("date", "2026-10-20"),
            ("maxPrice", "800"),
        ]));

        assert_eq!(query.flight_type, Some(FlightType::EmptyLeg));
        assert_eq!(query.origin.as_deref(), Some("eze"));
        assert_eq!(query.destination.as_deref(), Some("cor"));
        assert_eq!(query.date.as_deref(), Some("2026-10-20"));
        assert_eq!(query.max_price, Some(PriceCap::AtMost(800)));
    }

    #[test]
    fn test_empty_values_ignored() {
        let query = FlightQuery::parse(&params(&[("origin", ""), ("maxPrice", " ")]));
        assert_eq!(query, FlightQuery::default());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let query = FlightQuery::parse(&params(&[("page", "2")]));
        assert_eq!(query, FlightQuery::default());
    }

    #[test]
    fn test_unknown_flight_type_ignored() {
        let query = FlightQuery::parse(&params(&[("type", "cargo"), ("origin", "eze")]));
        assert_eq!(query.flight_type, None);
        assert_eq!(query.origin.as_deref(), Some("eze"));
    }

    // ==================
    // Price Cap
    // ==================

    #[test]
    fn test_price_cap_takes_leading_integer() {
        assert_eq!(PriceCap::parse("500"), PriceCap::AtMost(500));
        assert_eq!(PriceCap::parse("500.99"), PriceCap::AtMost(500));
        assert_eq!(PriceCap::parse("500usd"), PriceCap::AtMost(500));
        assert_eq!(PriceCap::parse("+42"), PriceCap::AtMost(42));
        assert_eq!(PriceCap::parse("0x1F4"), PriceCap::AtMost(500));
        assert_eq!(PriceCap::parse("-0"), PriceCap::AtMost(0));
    }

    #[test]
    fn test_price_cap_without_digits_admits_nothing() {
        for value in ["cheap", "-", ".5", "usd500", "0x"] {
            assert_eq!(PriceCap::parse(value), PriceCap::Unsatisfiable, "{}", value);
        }
        assert!(!PriceCap::Unsatisfiable.admits(0));
    }

    #[test]
    fn test_negative_price_cap_admits_nothing() {
        let cap = PriceCap::parse("-10");
        assert_eq!(cap, PriceCap::Unsatisfiable);
        assert!(!cap.admits(0));
    }

    #[test]
    fn test_price_cap_saturates() {
        assert_eq!(
            PriceCap::parse("99999999999999999999999"),
            PriceCap::AtMost(u64::MAX)
        );
    }

    #[test]
    fn test_price_cap_is_inclusive() {
        let cap = PriceCap::AtMost(500);
        assert!(cap.admits(500));
        assert!(!cap.admits(501));
    }
}
