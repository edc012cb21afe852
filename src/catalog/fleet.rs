//! Aircraft reference table (the charter fleet)

use serde::Serialize;

/// Aircraft size class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AircraftCategory {
    #[serde(rename = "light")]
    Light,
    #[serde(rename = "midsize")]
    Midsize,
    #[serde(rename = "heavy")]
    Heavy,
    #[serde(rename = "ultra-long-range")]
    UltraLongRange,
}

/// A charterable aircraft type
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Aircraft {
    pub id: &'static str,
    pub model: &'static str,
    pub manufacturer: &'static str,
    /// Passenger seats
    pub capacity: u32,
    pub category: AircraftCategory,
    /// Operating cost in USD per flight hour
    pub hourly_rate: u32,
}

pub(crate) static AIRCRAFT: [Aircraft; 8] = [
    Aircraft {
        id: "citation_cj3",
        model: "Citation CJ3+",
        manufacturer: "Cessna",
        capacity: 7,
        category: AircraftCategory::Light,
        hourly_rate: 2800,
    },
    Aircraft {
        id: "learjet_75",
        model: "Learjet 75",
        manufacturer: "Bombardier",
        capacity: 8,
        category: AircraftCategory::Light,
        hourly_rate: 3200,
    },
    Aircraft {
        id: "hawker_850xp",
        model: "Hawker 850XP",
        manufacturer: "Hawker Beechcraft",
        capacity: 8,
        category: AircraftCategory::Midsize,
        hourly_rate: 3800,
    },
    Aircraft {
        id: "citation_sovereign",
        model: "Citation Sovereign",
        manufacturer: "Cessna",
        capacity: 9,
        category: AircraftCategory::Midsize,
        hourly_rate: 4200,
    },
    Aircraft {
        id: "challenger_350",
        model: "Challenger 350",
        manufacturer: "Bombardier",
        capacity: 10,
        category: AircraftCategory::Midsize,
        hourly_rate: 4800,
    },
    Aircraft {
        id: "gulfstream_g280",
        model: "Gulfstream G280",
        manufacturer: "Gulfstream",
        capacity: 10,
        category: AircraftCategory::Heavy,
        hourly_rate: 6500,
    },
    Aircraft {
        id: "falcon_2000",
        model: "Falcon 2000",
        manufacturer: "Dassault",
        capacity: 12,
        category: AircraftCategory::Heavy,
        hourly_rate: 7200,
    },
    Aircraft {
        id: "global_6000",
        model: "Global 6000",
        manufacturer: "Bombardier",
        capacity: 14,
        category: AircraftCategory::UltraLongRange,
        hourly_rate: 9800,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_leaves_room_for_seat_sampling() {
        // Empty legs sell between 1 and capacity - 2 seats
        for aircraft in &AIRCRAFT {
            assert!(aircraft.capacity >= 3, "{} too small", aircraft.id);
        }
    }

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_value(AircraftCategory::UltraLongRange).unwrap();
        assert_eq!(json, "ultra-long-range");
        let json = serde_json::to_value(AircraftCategory::Midsize).unwrap();
        assert_eq!(json, "midsize");
    }
}
