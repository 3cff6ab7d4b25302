//! End-to-end tests of the quote pipeline against the reference scenarios.

use charter_rust::api::{AircraftId, RouteItinerary, Waypoint};
use charter_rust::models::{AircraftCatalog, AircraftCategory, AircraftProfile};
use charter_rust::services::{
    billable_hours, charter_price, quote_for_route, required_stops, reward_tokens,
    route_distance_km,
};

fn heathrow() -> Waypoint {
    Waypoint::new(51.47, -0.4543).unwrap().with_label("London Heathrow")
}

fn jfk() -> Waypoint {
    Waypoint::new(40.6413, -73.7781).unwrap().with_label("New York JFK")
}

fn profile(id: &str, range_km: f64, speed_kmh: f64, rate: f64) -> AircraftProfile {
    AircraftProfile {
        id: AircraftId::new(id),
        name: id.to_string(),
        capacity: 10,
        range_km,
        cruise_speed_kmh: speed_kmh,
        hourly_rate: rate,
        category: AircraftCategory::Heavy,
    }
}

#[test]
fn transatlantic_reference_scenario() {
    let lhr = heathrow();
    let kennedy = jfk();
    let distance = route_distance_km(&[&lhr, &kennedy]);
    assert!((distance - 5541.0).abs() < 5.0, "distance {}", distance);

    // Aircraft: range 5926 km, speed 850 km/h, rate 7800.
    let stops = required_stops(distance, 5926.0).unwrap();
    assert_eq!(stops, 0);

    let hours = billable_hours(distance, 850.0, stops).unwrap();
    assert!((hours - 7.02).abs() < 0.02, "hours {}", hours);

    let price = charter_price(distance, 850.0, 7800.0, stops).unwrap();
    assert_eq!(price, (hours * 7800.0).round() as i64);
    assert!((price - 54_756).abs() < 100, "price {}", price);

    let tokens = reward_tokens(distance);
    assert!((tokens - 8_312).abs() < 8, "tokens {}", tokens);
}

#[test]
fn short_hop_bills_exactly_one_hour() {
    // 100 km at 630 km/h: raw 0.159 + 0.5 allowance = 0.659 < 1.0 minimum.
    let hours = billable_hours(100.0, 630.0, 0).unwrap();
    assert_eq!(hours, 1.0);

    let price = charter_price(100.0, 630.0, 3200.0, 0).unwrap();
    assert_eq!(price, 3200);
}

#[test]
fn long_haul_stop_planning() {
    assert_eq!(required_stops(10_000.0, 3650.0).unwrap(), 2);

    // Each stop adds one more ground cycle to the billable time.
    let nonstop_equivalent = billable_hours(10_000.0, 750.0, 0).unwrap();
    let with_stops = billable_hours(10_000.0, 750.0, 2).unwrap();
    assert!((with_stops - nonstop_equivalent - 1.0).abs() < 1e-9);
}

#[test]
fn full_quote_through_catalog_entry() {
    let itinerary = RouteItinerary::new(vec![heathrow(), jfk()], false);
    let aircraft = profile("challenger-605", 5926.0, 850.0, 7800.0);

    let quote = quote_for_route(&itinerary, &aircraft).unwrap();
    assert_eq!(quote.stops, 0);
    assert_eq!(
        quote.total_price,
        (quote.billable_hours.value() * 7800.0).round() as i64
    );
    assert_eq!(quote.reward_tokens, reward_tokens(quote.distance_km.value()));
}

#[test]
fn round_trip_consistency_across_pipeline() {
    let one_way = RouteItinerary::new(vec![heathrow(), jfk()], false);
    let round_trip = RouteItinerary::new(vec![heathrow(), jfk()], true);
    let aircraft = profile("test", 20_000.0, 850.0, 7800.0);

    let single = quote_for_route(&one_way, &aircraft).unwrap();
    let doubled = quote_for_route(&round_trip, &aircraft).unwrap();

    // Distance and rewards double exactly (within token rounding).
    assert!(
        (doubled.distance_km.value() - 2.0 * single.distance_km.value()).abs() < 1e-9
    );
    assert!((doubled.reward_tokens - 2 * single.reward_tokens).abs() <= 1);

    // Hours do not simply double: the ground allowance is per cycle.
    let expected_hours = doubled.distance_km.value() / 850.0 + 0.5;
    assert!((doubled.billable_hours.value() - expected_hours).abs() < 1e-9);
}

#[test]
fn multi_stop_route_sums_legs_in_order() {
    let munich = Waypoint::new(48.3538, 11.7861).unwrap();
    let direct = route_distance_km(&[&heathrow(), &jfk()]);
    let via_munich = route_distance_km(&[&heathrow(), &munich, &jfk()]);

    // A detour can only add distance.
    assert!(via_munich > direct);
}

#[test]
fn builtin_catalog_supports_reference_aircraft() {
    let catalog = AircraftCatalog::builtin();
    let challenger = catalog.get(&AircraftId::new("challenger-605")).unwrap();

    assert_eq!(challenger.range_km, 5926.0);
    assert_eq!(challenger.cruise_speed_kmh, 850.0);
    assert_eq!(challenger.hourly_rate, 7800.0);
}
