//! Flight quote output type.

use serde::{Deserialize, Serialize};

/// A computed charter quote.
///
/// Fully determined by (itinerary, aircraft profile): no hidden state, no
/// history dependency. Quotes are recomputed on demand and never mutated in
/// place. `distance_km` already includes the return leg for round trips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightQuote {
    /// Total quoted distance
    pub distance_km: qtty::Kilometers,
    /// Required intermediate refuel/technical stops
    pub stops: u32,
    /// Billable flight hours after ground allowance and the 1-hour minimum
    pub billable_hours: qtty::Hours,
    /// Total price in the platform base currency, rounded
    pub total_price: i64,
    /// Loyalty tokens earned for the quoted distance
    pub reward_tokens: i64,
}
