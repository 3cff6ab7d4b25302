//! Aircraft catalog entry types and load-time validation.

use crate::api::AircraftId;
use serde::{Deserialize, Serialize};

/// Marketing category of a catalog entry, used as a fleet-search filter key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AircraftCategory {
    Light,
    Midsize,
    SuperMidsize,
    Heavy,
    UltraLongRange,
}

impl std::fmt::Display for AircraftCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AircraftCategory::Light => "light",
            AircraftCategory::Midsize => "midsize",
            AircraftCategory::SuperMidsize => "super-midsize",
            AircraftCategory::Heavy => "heavy",
            AircraftCategory::UltraLongRange => "ultra-long-range",
        };
        write!(f, "{}", label)
    }
}

/// A static catalog entry.
///
/// Profiles are read-only reference data: loaded once at startup and never
/// mutated during a booking session. Performance figures feed the stop
/// planner and price estimator directly, so they are validated when the
/// catalog loads rather than on every query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftProfile {
    pub id: AircraftId,
    /// Display name shown in the booking UI
    pub name: String,
    /// Passenger capacity (>= 1)
    pub capacity: u32,
    /// Maximum range in kilometers (> 0)
    pub range_km: f64,
    /// Cruise speed in km/h (> 0)
    pub cruise_speed_kmh: f64,
    /// Hourly charter rate, currency-agnostic (>= 0)
    pub hourly_rate: f64,
    pub category: AircraftCategory,
}

impl AircraftProfile {
    /// Validate the performance figures this entry feeds into the quote
    /// pipeline.
    ///
    /// # Errors
    /// Returns a [`CatalogError`] when the entry would cause a division by
    /// zero (range, speed) or an unsatisfiable capacity downstream.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.range_km <= 0.0 {
            return Err(CatalogError::NonPositiveRange {
                id: self.id.clone(),
                range_km: self.range_km,
            });
        }
        if self.cruise_speed_kmh <= 0.0 {
            return Err(CatalogError::NonPositiveSpeed {
                id: self.id.clone(),
                cruise_speed_kmh: self.cruise_speed_kmh,
            });
        }
        if self.capacity == 0 {
            return Err(CatalogError::ZeroCapacity {
                id: self.id.clone(),
            });
        }
        if self.hourly_rate < 0.0 {
            return Err(CatalogError::NegativeRate {
                id: self.id.clone(),
                hourly_rate: self.hourly_rate,
            });
        }
        Ok(())
    }
}

/// Configuration defects in the aircraft catalog.
///
/// These are load-time errors: a defective entry is excluded from the
/// selectable fleet instead of crashing quote computation at request time.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("aircraft '{id}' has non-positive range {range_km} km")]
    NonPositiveRange { id: AircraftId, range_km: f64 },

    #[error("aircraft '{id}' has non-positive cruise speed {cruise_speed_kmh} km/h")]
    NonPositiveSpeed {
        id: AircraftId,
        cruise_speed_kmh: f64,
    },

    #[error("aircraft '{id}' has zero passenger capacity")]
    ZeroCapacity { id: AircraftId },

    #[error("aircraft '{id}' has negative hourly rate {hourly_rate}")]
    NegativeRate { id: AircraftId, hourly_rate: f64 },

    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog contains no valid aircraft")]
    Empty,
}
