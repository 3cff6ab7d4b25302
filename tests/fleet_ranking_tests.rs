//! Fleet search behavior against synthetic and built-in catalogs.

use charter_rust::api::{AircraftId, RouteItinerary, Waypoint};
use charter_rust::models::{AircraftCatalog, AircraftCategory, AircraftProfile};
use charter_rust::routes::fleet::build_fleet_data;
use charter_rust::services::{filter_and_rank, FleetFilters};

fn entry(
    id: &str,
    capacity: u32,
    range_km: f64,
    speed_kmh: f64,
    rate: f64,
    category: AircraftCategory,
) -> AircraftProfile {
    AircraftProfile {
        id: AircraftId::new(id),
        name: id.to_string(),
        capacity,
        range_km,
        cruise_speed_kmh: speed_kmh,
        hourly_rate: rate,
        category,
    }
}

fn boundary_catalog() -> AircraftCatalog {
    AircraftCatalog::from_profiles(vec![
        // Bills the 1-hour minimum on short routes.
        entry("minimum-biller", 4, 2000.0, 800.0, 2500.0, AircraftCategory::Light),
        // Short range: accumulates stops quickly.
        entry("short-range", 6, 1000.0, 700.0, 3000.0, AircraftCategory::Light),
        // Long range, expensive.
        entry("long-range", 14, 13_000.0, 900.0, 11_000.0, AircraftCategory::UltraLongRange),
    ])
    .unwrap()
}

#[test]
fn combined_filters_all_apply() {
    let catalog = boundary_catalog();
    let filters = FleetFilters {
        categories: vec![AircraftCategory::Light],
        max_hourly_rate: Some(2800.0),
        max_stops: Some(0),
    };

    let matches = filter_and_rank(&catalog, 2, 500.0, &filters);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].aircraft.id.as_str(), "minimum-biller");
}

#[test]
fn many_stops_route_ranks_correctly() {
    let catalog = boundary_catalog();
    let matches = filter_and_rank(&catalog, 1, 9500.0, &FleetFilters::default());

    // short-range needs ceil(9500/1000)-1 = 9 stops.
    let short = matches
        .iter()
        .find(|m| m.aircraft.id.as_str() == "short-range")
        .unwrap();
    assert_eq!(short.stops, 9);

    // long-range flies nonstop.
    let long = matches
        .iter()
        .find(|m| m.aircraft.id.as_str() == "long-range")
        .unwrap();
    assert_eq!(long.stops, 0);

    for pair in matches.windows(2) {
        assert!(pair[0].total_price <= pair[1].total_price);
    }
}

#[test]
fn minimum_hour_billing_visible_in_ranking() {
    let catalog = boundary_catalog();
    let matches = filter_and_rank(&catalog, 1, 50.0, &FleetFilters::default());

    let minimum = matches
        .iter()
        .find(|m| m.aircraft.id.as_str() == "minimum-biller")
        .unwrap();
    assert_eq!(minimum.flight_time.value(), 1.0);
    assert_eq!(minimum.total_price, 2500);
}

#[test]
fn zero_stop_filter_excludes_out_of_range_entries() {
    let catalog = boundary_catalog();
    let filters = FleetFilters {
        max_stops: Some(0),
        ..Default::default()
    };

    let matches = filter_and_rank(&catalog, 1, 2500.0, &filters);
    let ids: Vec<&str> = matches.iter().map(|m| m.aircraft.id.as_str()).collect();
    assert!(!ids.contains(&"short-range"));
    assert!(!ids.contains(&"minimum-biller")); // 2500 km > 2000 km range
    assert!(ids.contains(&"long-range"));
}

#[test]
fn fleet_data_reports_search_distance() {
    let catalog = AircraftCatalog::builtin();
    let itinerary = RouteItinerary::new(
        vec![
            Waypoint::new(51.47, -0.4543).unwrap(),
            Waypoint::new(40.6413, -73.7781).unwrap(),
        ],
        true,
    );

    let data = build_fleet_data(&catalog, &itinerary, 1, &FleetFilters::default()).unwrap();
    assert!((data.distance_km.value() - 11_082.0).abs() < 10.0);
    assert_eq!(data.total, data.matches.len());

    // Every match satisfies the published guarantees.
    for m in &data.matches {
        assert!(m.aircraft.capacity >= 1);
    }
}

#[test]
fn empty_result_is_a_valid_state() {
    let catalog = boundary_catalog();
    let filters = FleetFilters {
        max_hourly_rate: Some(1.0),
        ..Default::default()
    };

    let matches = filter_and_rank(&catalog, 1, 500.0, &filters);
    assert!(matches.is_empty());
}
