//! Flight-time and price estimation.

use super::PricingError;

/// Ground/climb/descent allowance per takeoff-and-landing cycle, in hours.
pub const GROUND_CYCLE_HOURS: f64 = 0.5;

/// Minimum billable flight time regardless of computed time.
pub const MIN_BILLABLE_HOURS: f64 = 1.0;

/// Billable flight hours for a route.
///
/// A route with `stops` intermediate landings has `stops + 1`
/// takeoff-and-landing cycles, each billed a fixed 30-minute allowance on
/// top of the cruise time. The result never drops below
/// [`MIN_BILLABLE_HOURS`]; even a same-airport round trip bills one hour.
///
/// # Errors
/// Returns [`PricingError::NonPositiveSpeed`] for `cruise_speed_kmh <= 0`,
/// guarded the same way as a zero range in the stop planner.
pub fn billable_hours(
    distance_km: f64,
    cruise_speed_kmh: f64,
    stops: u32,
) -> Result<f64, PricingError> {
    if cruise_speed_kmh <= 0.0 {
        return Err(PricingError::NonPositiveSpeed(cruise_speed_kmh));
    }
    let raw = distance_km / cruise_speed_kmh;
    let total = raw + GROUND_CYCLE_HOURS * f64::from(stops + 1);
    Ok(total.max(MIN_BILLABLE_HOURS))
}

/// Total charter price: billable hours times the hourly rate, rounded to the
/// nearest whole amount.
pub fn charter_price(
    distance_km: f64,
    cruise_speed_kmh: f64,
    hourly_rate: f64,
    stops: u32,
) -> Result<i64, PricingError> {
    let hours = billable_hours(distance_km, cruise_speed_kmh, stops)?;
    Ok((hours * hourly_rate).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_transatlantic_time() {
        // 5541 km at 850 km/h, no stops: 5541/850 + 0.5 ~= 7.02 h
        let hours = billable_hours(5541.0, 850.0, 0).unwrap();
        assert!((hours - 7.02).abs() < 0.01, "got {}", hours);
    }

    #[test]
    fn test_minimum_billing_applies() {
        // 100 km at 630 km/h: 0.159 + 0.5 = 0.659 < 1.0 minimum
        let hours = billable_hours(100.0, 630.0, 0).unwrap();
        assert_eq!(hours, 1.0);
    }

    #[test]
    fn test_minimum_billing_zero_distance() {
        assert_eq!(billable_hours(0.0, 850.0, 0).unwrap(), 1.0);
    }

    #[test]
    fn test_each_stop_adds_a_cycle() {
        let nonstop = billable_hours(10_000.0, 900.0, 0).unwrap();
        let two_stops = billable_hours(10_000.0, 900.0, 2).unwrap();
        assert!((two_stops - nonstop - 2.0 * GROUND_CYCLE_HOURS).abs() < 1e-9);
    }

    #[test]
    fn test_price_is_rounded_hours_times_rate() {
        let hours = billable_hours(5541.0, 850.0, 0).unwrap();
        let price = charter_price(5541.0, 850.0, 7800.0, 0).unwrap();
        assert_eq!(price, (hours * 7800.0).round() as i64);
        // Reference scenario: ~= 54_756 within distance tolerance.
        assert!((price - 54_756).abs() < 100, "got {}", price);
    }

    #[test]
    fn test_minimum_hour_price_is_exactly_rate() {
        let price = charter_price(100.0, 630.0, 3200.0, 0).unwrap();
        assert_eq!(price, 3200);
    }

    #[test]
    fn test_zero_speed_rejected() {
        assert_eq!(
            billable_hours(100.0, 0.0, 0),
            Err(PricingError::NonPositiveSpeed(0.0))
        );
        assert!(charter_price(100.0, -1.0, 1000.0, 0).is_err());
    }
}
