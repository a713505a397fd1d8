//! Core traits for callers' coordinate and itinerary types.
//!
//! These are intentionally minimal. Map clients and trip-plan models
//! implement them for their own data so the codec never depends on them.

use std::hash::Hash;

use crate::geometry::EncodedPolyline;

/// Unique identifier for itinerary entities.
pub trait Id: Clone + Eq + Hash + Send + Sync {}

impl<T> Id for T where T: Clone + Eq + Hash + Send + Sync {}

/// A point with latitude and longitude in degrees.
pub trait LatLng {
    fn lat(&self) -> f64;
    fn lng(&self) -> f64;
}

/// `(lat, lng)` tuples, the crate's own coordinate representation.
impl LatLng for (f64, f64) {
    fn lat(&self) -> f64 {
        self.0
    }

    fn lng(&self) -> f64 {
        self.1
    }
}

/// `[lat, lng]` arrays, as found in JSON coordinate lists.
impl LatLng for [f64; 2] {
    fn lat(&self) -> f64 {
        self[0]
    }

    fn lng(&self) -> f64 {
        self[1]
    }
}

impl<T: LatLng + ?Sized> LatLng for &T {
    fn lat(&self) -> f64 {
        (**self).lat()
    }

    fn lng(&self) -> f64 {
        (**self).lng()
    }
}

/// One leg of an itinerary, as returned by the trip-planning API.
pub trait Leg {
    type Id: Id;

    fn id(&self) -> &Self::Id;

    /// Encoded leg geometry, if the API supplied one.
    fn leg_geometry(&self) -> Option<&EncodedPolyline>;
}
