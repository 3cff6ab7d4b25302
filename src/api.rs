//! Public API surface for the Rust backend.
//!
//! This file consolidates the data types shared across the service,
//! persistence, and HTTP layers. All types derive Serialize/Deserialize for
//! JSON serialization.

pub use crate::routes::checkout::CheckoutOrder;
pub use crate::routes::checkout::CheckoutReceipt;
pub use crate::routes::fleet::FleetData;
pub use crate::routes::fleet::FleetMatch;
pub use crate::routes::quote::QuoteBreakdown;
pub use crate::routes::sessions::SessionInfo;

pub use crate::models::{AircraftCategory, AircraftProfile, FlightQuote};

use serde::{Deserialize, Serialize};

/// Aircraft identifier (catalog slug, e.g. `"challenger-605"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AircraftId(pub String);

/// Booking-session identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl AircraftId {
    pub fn new(value: impl Into<String>) -> Self {
        AircraftId(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl SessionId {
    pub fn new(value: impl Into<String>) -> Self {
        SessionId(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AircraftId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AircraftId {
    fn from(value: &str) -> Self {
        AircraftId(value.to_string())
    }
}
impl From<&str> for SessionId {
    fn from(value: &str) -> Self {
        SessionId(value.to_string())
    }
}

/// A single geographic point of a route: origin, intermediate stop, or
/// destination.
///
/// Waypoints are immutable snapshots once added to an itinerary. A waypoint
/// with both coordinates at zero is the "cleared" sentinel used by the
/// booking UI and is skipped by the quote pipeline (see
/// [`RouteItinerary::usable_waypoints`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Latitude in decimal degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in decimal degrees (-180 to 180)
    pub longitude: f64,
    /// Display address or label (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Scheduled departure/arrival time for this point (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Waypoint {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, String> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err("Latitude must be between -90 and 90 degrees".to_string());
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err("Longitude must be between -180 and 180 degrees".to_string());
        }
        Ok(Self {
            latitude,
            longitude,
            label: None,
            scheduled_at: None,
        })
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Whether this waypoint carries real coordinates.
    ///
    /// The booking UI represents a cleared field as `(0.0, 0.0)`; such
    /// placeholders must never contribute to a route distance.
    pub fn is_set(&self) -> bool {
        self.latitude != 0.0 || self.longitude != 0.0
    }
}

/// An ordered waypoint sequence plus the return-trip flag.
///
/// Derived and ephemeral: produced by user interaction, consumed by the quote
/// pipeline, recomputed whenever a waypoint changes. Stop order defines leg
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteItinerary {
    /// `[origin, stop_1, ..., stop_n, destination]` with `n >= 0`
    pub waypoints: Vec<Waypoint>,
    /// Whether the quote covers the return leg as well
    #[serde(default)]
    pub round_trip: bool,
}

impl RouteItinerary {
    pub fn new(waypoints: Vec<Waypoint>, round_trip: bool) -> Self {
        Self {
            waypoints,
            round_trip,
        }
    }

    /// The waypoints that actually take part in distance computation, in
    /// insertion order, with cleared placeholders removed.
    pub fn usable_waypoints(&self) -> Vec<&Waypoint> {
        self.waypoints.iter().filter(|w| w.is_set()).collect()
    }

    /// A route is ready once it has at least an origin and a destination.
    pub fn is_ready(&self) -> bool {
        self.usable_waypoints().len() >= 2
    }
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod api_tests;
