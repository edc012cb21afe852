//! Generator bounds

use serde::{Deserialize, Serialize};

/// Bounds for a single flight generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Consecutive days to schedule, starting at the start date (default: 30)
    #[serde(default = "default_days")]
    pub days: u32,

    /// Fewest flights drawn per day (default: 2)
    #[serde(default = "default_min_per_day")]
    pub min_per_day: u32,

    /// Most flights drawn per day (default: 4)
    #[serde(default = "default_max_per_day")]
    pub max_per_day: u32,

    /// Hard cap on flights per run (default: 60)
    #[serde(default = "default_max_flights")]
    pub max_flights: usize,

    /// Fixed RNG seed. When unset every run draws fresh entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_days() -> u32 {
    30
}

fn default_min_per_day() -> u32 {
    2
}

fn default_max_per_day() -> u32 {
    4
}

fn default_max_flights() -> usize {
    60
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            days: default_days(),
            min_per_day: default_min_per_day(),
            max_per_day: default_max_per_day(),
            max_flights: default_max_flights(),
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Default bounds with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Check the bounds describe a non-empty run
    pub fn validate(&self) -> Result<(), String> {
        if self.days == 0 {
            return Err("days must be > 0".to_string());
        }
        if self.min_per_day == 0 {
            return Err("min_per_day must be > 0".to_string());
        }
        if self.min_per_day > self.max_per_day {
            return Err(format!(
                "min_per_day ({}) exceeds max_per_day ({})",
                self.min_per_day, self.max_per_day
            ));
        }
        if self.max_flights == 0 {
            return Err("max_flights must be > 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.days, 30);
        assert_eq!((config.min_per_day, config.max_per_day), (2, 4));
        assert_eq!(config.max_flights, 60);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GeneratorConfig = serde_json::from_str(r#"{"seed": 7}"#).unwrap();
        assert_eq!(config, GeneratorConfig::seeded(7));
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        let config = GeneratorConfig {
            min_per_day: 5,
            max_per_day: 3,
            ..Default::default()
        };
        assert!(config.validate().unwrap_err().contains("exceeds"));
    }

    #[test]
    fn test_rejects_empty_run() {
        let config = GeneratorConfig {
            days: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GeneratorConfig {
            max_flights: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
