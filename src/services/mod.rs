//! Service layer: the pure quote-computation pipeline and the external
//! collaborators that surround it.
//!
//! The pipeline composes linearly: waypoints -> distance -> (stops, billable
//! hours) -> price, and distance -> rewards. Every function here reads only
//! its explicit inputs; there is no ambient state, so the services may be
//! invoked repeatedly and concurrently (the fleet search re-ranks on every
//! filter change).

pub mod checkout;
pub mod distance;
pub mod estimator;
pub mod fleet;
pub mod planner;
pub mod quoting;
pub mod rates;
pub mod rewards;

pub use checkout::{CheckoutError, CheckoutGateway, RecordingGateway};
pub use distance::{haversine_km, route_distance_km};
pub use estimator::{billable_hours, charter_price};
pub use fleet::{filter_and_rank, FleetFilters};
pub use planner::required_stops;
pub use quoting::{quote_distance_km, quote_for_route, QuoteError};
pub use rates::{RateSource, StaticRateTable};
pub use rewards::reward_tokens;

/// Configuration defects surfaced by the pure pipeline.
///
/// These mirror the catalog-load validation: a zero or negative range/speed
/// is a catalog defect, not a runtime condition to recover from. The
/// pipeline still guards so a defective profile can never divide by zero.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PricingError {
    #[error("aircraft range must be positive, got {0} km")]
    NonPositiveRange(f64),

    #[error("cruise speed must be positive, got {0} km/h")]
    NonPositiveSpeed(f64),
}
