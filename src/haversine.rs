//! Great-circle distances over decoded geometries.
//!
//! Leg distances shown next to a drawn route are straight-line sums
//! between consecutive polyline points.

use crate::traits::LatLng;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate haversine distance between two points in kilometers.
pub fn haversine_km<A: LatLng, B: LatLng>(from: A, to: B) -> f64 {
    let lat1_rad = from.lat().to_radians();
    let lat2_rad = to.lat().to_radians();
    let delta_lat = (to.lat() - from.lat()).to_radians();
    let delta_lng = (to.lng() - from.lng()).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Sum of haversine distances between consecutive points.
pub fn path_length_km<P: LatLng>(points: &[P]) -> f64 {
    points
        .windows(2)
        .map(|pair| haversine_km(&pair[0], &pair[1]))
        .sum()
}
