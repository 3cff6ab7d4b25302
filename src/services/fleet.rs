//! Fleet filtering and ranking.
//!
//! For a computed route distance, every catalog entry gets its own
//! stops/hours/price via the planner and estimator; entries that survive the
//! user's filters are returned sorted by ascending total price.

use super::{billable_hours, required_stops};
use crate::models::{AircraftCatalog, AircraftCategory};
use crate::routes::fleet::FleetMatch;

/// User-chosen fleet filters.
///
/// An empty category list means "any category". `max_hourly_rate` is a
/// ceiling on the catalog hourly rate, not on the computed total.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FleetFilters {
    #[serde(default)]
    pub categories: Vec<AircraftCategory>,
    #[serde(default)]
    pub max_hourly_rate: Option<f64>,
    #[serde(default)]
    pub max_stops: Option<u32>,
}

/// Filter the catalog against a route distance and rank matches by price.
///
/// An empty result is a valid "no aircraft match" state, not an error.
/// Entries whose performance figures fail the pipeline guards are skipped
/// with a warning; the catalog loader normally rejects them long before this
/// point.
pub fn filter_and_rank(
    catalog: &AircraftCatalog,
    min_capacity: u32,
    distance_km: f64,
    filters: &FleetFilters,
) -> Vec<FleetMatch> {
    let mut matches: Vec<FleetMatch> = Vec::new();

    for entry in catalog.entries() {
        if entry.capacity < min_capacity {
            continue;
        }
        if !filters.categories.is_empty() && !filters.categories.contains(&entry.category) {
            continue;
        }
        if let Some(ceiling) = filters.max_hourly_rate {
            if entry.hourly_rate > ceiling {
                continue;
            }
        }

        let (stops, hours) = match required_stops(distance_km, entry.range_km)
            .and_then(|stops| billable_hours(distance_km, entry.cruise_speed_kmh, stops).map(|h| (stops, h)))
        {
            Ok(computed) => computed,
            Err(e) => {
                log::warn!("skipping '{}' in fleet search: {}", entry.id, e);
                continue;
            }
        };

        if let Some(max_stops) = filters.max_stops {
            if stops > max_stops {
                continue;
            }
        }

        matches.push(FleetMatch {
            aircraft: entry.clone(),
            stops,
            flight_time: qtty::Hours::new(hours),
            total_price: (hours * entry.hourly_rate).round() as i64,
        });
    }

    // Stable sort keeps catalog input order for equal prices.
    matches.sort_by_key(|m| m.total_price);
    matches
}

#[cfg(test)]
#[path = "fleet_tests.rs"]
mod fleet_tests;
