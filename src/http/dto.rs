//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! Response types are largely re-exported from the routes module since they
//! already derive Serialize/Deserialize.

use crate::api::{AircraftId, Waypoint};
use crate::services::fleet::FleetFilters;
use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    // Checkout
    CheckoutOrder,
    CheckoutReceipt,
    // Fleet
    FleetData,
    FleetMatch,
    // Quote
    QuoteBreakdown,
    // Sessions
    SessionInfo,
};
pub use crate::db::models::{RouteSelection, SessionSnapshot};

/// Request body for computing a quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Ordered waypoints: origin, optional stops, destination
    pub waypoints: Vec<Waypoint>,
    /// Whether to quote the return leg as well (default: false)
    #[serde(default)]
    pub round_trip: bool,
    /// Catalog entry to quote
    pub aircraft_id: AircraftId,
    /// Display currency (default: USD)
    #[serde(default)]
    pub currency: Option<String>,
}

/// Request body for the fleet search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetSearchRequest {
    /// Ordered waypoints: origin, optional stops, destination
    pub waypoints: Vec<Waypoint>,
    #[serde(default)]
    pub round_trip: bool,
    /// Required passenger capacity (default: 1)
    #[serde(default = "default_min_capacity")]
    pub min_capacity: u32,
    /// Category allow-list, rate ceiling, stop limit
    #[serde(default)]
    pub filters: FleetFilters,
}

fn default_min_capacity() -> u32 {
    1
}

/// Query parameters for the rewards preview endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RewardsQuery {
    /// Quoted distance in kilometers
    pub distance_km: f64,
}

/// Rewards preview response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardsResponse {
    pub distance_km: f64,
    pub reward_tokens: i64,
}

/// Request body for saving a session's selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveSessionRequest {
    pub selection: RouteSelection,
}

/// Response for session creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSessionResponse {
    pub session_id: String,
    pub snapshot: SessionSnapshot,
}

/// Session list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionListResponse {
    pub sessions: Vec<SessionInfo>,
    pub total: usize,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Session-store backend status
    pub store: String,
    /// Number of selectable aircraft in the catalog
    pub fleet_size: usize,
}
