//! Quote orchestration: route in, quote out.
//!
//! This is the one place where the return-trip flag is applied. Doubling
//! happens immediately after route-level distance computation, so the stop
//! planner, estimator, and rewards calculator all see the same total.

use super::{billable_hours, required_stops, reward_tokens, route_distance_km, PricingError};
use crate::api::RouteItinerary;
use crate::models::{AircraftProfile, FlightQuote};

/// Errors from quote assembly.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QuoteError {
    /// The route does not yet have two usable waypoints. Not a failure to
    /// propagate as a number: the caller simply is not ready to compute.
    #[error("route needs an origin and a destination ({usable} usable waypoints)")]
    RouteNotReady { usable: usize },

    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// Total quoted distance of an itinerary, in kilometers.
///
/// Cleared waypoints are dropped first; the one-way leg sum is doubled here
/// for round trips, and nowhere else.
pub fn quote_distance_km(itinerary: &RouteItinerary) -> Result<f64, QuoteError> {
    let usable = itinerary.usable_waypoints();
    if usable.len() < 2 {
        return Err(QuoteError::RouteNotReady {
            usable: usable.len(),
        });
    }

    let one_way = route_distance_km(&usable);
    Ok(if itinerary.round_trip {
        one_way * 2.0
    } else {
        one_way
    })
}

/// Compute the full quote for an itinerary and an aircraft profile.
pub fn quote_for_route(
    itinerary: &RouteItinerary,
    aircraft: &AircraftProfile,
) -> Result<FlightQuote, QuoteError> {
    let distance_km = quote_distance_km(itinerary)?;

    let stops = required_stops(distance_km, aircraft.range_km)?;
    let hours = billable_hours(distance_km, aircraft.cruise_speed_kmh, stops)?;
    let total_price = (hours * aircraft.hourly_rate).round() as i64;
    let reward_tokens = reward_tokens(distance_km);

    Ok(FlightQuote {
        distance_km: qtty::Kilometers::new(distance_km),
        stops,
        billable_hours: qtty::Hours::new(hours),
        total_price,
        reward_tokens,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{AircraftId, Waypoint};
    use crate::models::AircraftCategory;

    fn heathrow() -> Waypoint {
        Waypoint::new(51.47, -0.4543).unwrap()
    }

    fn jfk() -> Waypoint {
        Waypoint::new(40.6413, -73.7781).unwrap()
    }

    fn challenger() -> AircraftProfile {
        AircraftProfile {
            id: AircraftId::new("challenger-605"),
            name: "Bombardier Challenger 605".to_string(),
            capacity: 12,
            range_km: 5926.0,
            cruise_speed_kmh: 850.0,
            hourly_rate: 7800.0,
            category: AircraftCategory::Heavy,
        }
    }

    #[test]
    fn test_one_way_transatlantic_quote() {
        let itinerary = RouteItinerary::new(vec![heathrow(), jfk()], false);
        let quote = quote_for_route(&itinerary, &challenger()).unwrap();

        assert!((quote.distance_km.value() - 5541.0).abs() < 5.0);
        assert_eq!(quote.stops, 0);
        assert!((quote.billable_hours.value() - 7.02).abs() < 0.02);
        assert!((quote.total_price - 54_756).abs() < 100);
        assert!((quote.reward_tokens - 8_312).abs() < 8);
    }

    #[test]
    fn test_round_trip_doubles_before_stop_planning() {
        let itinerary = RouteItinerary::new(vec![heathrow(), jfk()], true);
        let quote = quote_for_route(&itinerary, &challenger()).unwrap();

        // One-way fits the 5926 km range; the doubled distance does not, so
        // the doubling must be visible to the planner.
        assert!((quote.distance_km.value() - 11_082.0).abs() < 10.0);
        assert_eq!(quote.stops, 1);
        assert_eq!(quote.reward_tokens, reward_tokens(quote.distance_km.value()));
    }

    #[test]
    fn test_cleared_waypoints_do_not_corrupt_distance() {
        let with_sentinel = RouteItinerary::new(
            vec![heathrow(), Waypoint::new(0.0, 0.0).unwrap(), jfk()],
            false,
        );
        let clean = RouteItinerary::new(vec![heathrow(), jfk()], false);

        let a = quote_distance_km(&with_sentinel).unwrap();
        let b = quote_distance_km(&clean).unwrap();
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn test_unready_route_is_suppressed_not_numeric() {
        let itinerary = RouteItinerary::new(vec![heathrow()], false);
        assert_eq!(
            quote_for_route(&itinerary, &challenger()),
            Err(QuoteError::RouteNotReady { usable: 1 })
        );

        let empty = RouteItinerary::new(vec![], true);
        assert!(matches!(
            quote_distance_km(&empty),
            Err(QuoteError::RouteNotReady { usable: 0 })
        ));
    }

    #[test]
    fn test_same_airport_round_trip_bills_minimum_hour() {
        let itinerary = RouteItinerary::new(vec![heathrow(), heathrow()], true);
        let quote = quote_for_route(&itinerary, &challenger()).unwrap();

        assert_eq!(quote.distance_km.value(), 0.0);
        assert_eq!(quote.billable_hours.value(), 1.0);
        assert_eq!(quote.total_price, 7800);
        assert_eq!(quote.reward_tokens, 0);
    }
}
