use super::*;

#[test]
fn test_waypoint_validates_latitude() {
    assert!(Waypoint::new(90.1, 0.0).is_err());
    assert!(Waypoint::new(-90.1, 0.0).is_err());
    assert!(Waypoint::new(90.0, 0.0).is_ok());
    assert!(Waypoint::new(-90.0, 0.0).is_ok());
}

#[test]
fn test_waypoint_validates_longitude() {
    assert!(Waypoint::new(0.0, 180.1).is_err());
    assert!(Waypoint::new(0.0, -180.1).is_err());
    assert!(Waypoint::new(0.0, 180.0).is_ok());
}

#[test]
fn test_cleared_waypoint_is_not_set() {
    let cleared = Waypoint::new(0.0, 0.0).unwrap();
    assert!(!cleared.is_set());

    let set = Waypoint::new(51.47, -0.4543).unwrap();
    assert!(set.is_set());

    // A point on the equator or prime meridian still counts as set.
    let equator = Waypoint::new(0.0, -73.7781).unwrap();
    assert!(equator.is_set());
}

#[test]
fn test_usable_waypoints_preserve_order() {
    let itinerary = RouteItinerary::new(
        vec![
            Waypoint::new(51.47, -0.4543).unwrap().with_label("LHR"),
            Waypoint::new(0.0, 0.0).unwrap(),
            Waypoint::new(48.3538, 11.7861).unwrap().with_label("MUC"),
            Waypoint::new(40.6413, -73.7781).unwrap().with_label("JFK"),
        ],
        false,
    );

    let usable = itinerary.usable_waypoints();
    assert_eq!(usable.len(), 3);
    assert_eq!(usable[0].label.as_deref(), Some("LHR"));
    assert_eq!(usable[1].label.as_deref(), Some("MUC"));
    assert_eq!(usable[2].label.as_deref(), Some("JFK"));
}

#[test]
fn test_route_readiness() {
    let mut itinerary = RouteItinerary::new(
        vec![
            Waypoint::new(51.47, -0.4543).unwrap(),
            Waypoint::new(0.0, 0.0).unwrap(),
        ],
        false,
    );
    assert!(!itinerary.is_ready());

    itinerary
        .waypoints
        .push(Waypoint::new(40.6413, -73.7781).unwrap());
    assert!(itinerary.is_ready());
}

#[test]
fn test_ids_serialize_as_bare_strings() {
    let id = AircraftId::new("challenger-605");
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"challenger-605\"");

    let back: AircraftId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}

#[test]
fn test_itinerary_round_trip_default() {
    let json = r#"{"waypoints": []}"#;
    let itinerary: RouteItinerary = serde_json::from_str(json).unwrap();
    assert!(!itinerary.round_trip);
}

#[test]
fn test_waypoint_display_fields_optional_in_json() {
    let wp = Waypoint::new(51.47, -0.4543).unwrap();
    let json = serde_json::to_string(&wp).unwrap();
    assert!(!json.contains("label"));
    assert!(!json.contains("scheduled_at"));
}
