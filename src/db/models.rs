//! Stored session types.

use crate::api::{AircraftId, RouteItinerary, SessionId};
use serde::{Deserialize, Serialize};

/// The route/aircraft selection a booking session accumulates.
///
/// This is exactly the state the frontend re-reads on every field change;
/// the core computation never touches it directly and takes all inputs as
/// explicit parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSelection {
    pub itinerary: RouteItinerary,
    /// Chosen aircraft, once the user has picked one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aircraft: Option<AircraftId>,
    /// Requested passenger count
    #[serde(default = "default_passengers")]
    pub passengers: u32,
}

fn default_passengers() -> u32 {
    1
}

/// A persisted snapshot of one session's selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session_id: SessionId,
    pub selection: RouteSelection,
    /// Content checksum used to suppress redundant writes
    pub checksum: String,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
