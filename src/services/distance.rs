//! Great-circle distance over an ordered waypoint route.

use crate::api::Waypoint;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two coordinates, in kilometers.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// One-way distance of a route: the sum of great-circle lengths of each
/// consecutive leg, in kilometers.
///
/// Callers filter out cleared waypoints before invoking this (see
/// [`crate::api::RouteItinerary::usable_waypoints`]); doubling for return
/// trips is likewise the caller's responsibility and happens exactly once,
/// in [`super::quoting`]. Fewer than two waypoints yield a zero total.
pub fn route_distance_km(waypoints: &[&Waypoint]) -> f64 {
    waypoints
        .windows(2)
        .map(|pair| {
            haversine_km(
                pair[0].latitude,
                pair[0].longitude,
                pair[1].latitude,
                pair[1].longitude,
            )
        })
        .sum()
}
