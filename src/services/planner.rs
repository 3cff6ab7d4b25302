//! Refuel/technical stop planning.

use super::PricingError;

/// Number of intermediate stops required to cover `distance_km` with an
/// aircraft of maximum range `range_km`.
///
/// The aircraft covers at most `range_km` per leg, so a route needs
/// `ceil(distance / range)` legs and one stop between each pair of legs.
/// A distance within range needs no stop at all.
///
/// # Errors
/// Returns [`PricingError::NonPositiveRange`] for `range_km <= 0`; that is a
/// catalog defect normally caught at load time.
pub fn required_stops(distance_km: f64, range_km: f64) -> Result<u32, PricingError> {
    if range_km <= 0.0 {
        return Err(PricingError::NonPositiveRange(range_km));
    }
    if distance_km <= range_km {
        return Ok(0);
    }
    let legs = (distance_km / range_km).ceil() as u32;
    Ok(legs - 1)
}
