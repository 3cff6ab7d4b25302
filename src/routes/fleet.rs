//! Fleet search endpoint data types and assembly.

use crate::api::RouteItinerary;
use crate::models::{AircraftCatalog, AircraftProfile};
use crate::services::fleet::{filter_and_rank, FleetFilters};
use crate::services::quoting::{quote_distance_km, QuoteError};
use serde::{Deserialize, Serialize};

/// One catalog entry that survived the filters, with its computed figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetMatch {
    pub aircraft: AircraftProfile,
    pub stops: u32,
    pub flight_time: qtty::Hours,
    pub total_price: i64,
}

/// Full fleet-search response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetData {
    /// Quoted distance the ranking was computed against (return leg included
    /// for round trips)
    pub distance_km: qtty::Kilometers,
    pub matches: Vec<FleetMatch>,
    pub total: usize,
}

/// Run the fleet search for an itinerary.
///
/// The route distance is computed once and shared across all catalog
/// entries; an empty match list is a valid response.
pub fn build_fleet_data(
    catalog: &AircraftCatalog,
    itinerary: &RouteItinerary,
    min_capacity: u32,
    filters: &FleetFilters,
) -> Result<FleetData, QuoteError> {
    let distance_km = quote_distance_km(itinerary)?;
    let matches = filter_and_rank(catalog, min_capacity, distance_km, filters);
    let total = matches.len();

    Ok(FleetData {
        distance_km: qtty::Kilometers::new(distance_km),
        matches,
        total,
    })
}

pub const SEARCH_FLEET: &str = "search_fleet";
