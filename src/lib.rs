//! trip-polyline
//!
//! Encoded polyline codec for trip-planner leg geometries, shared by every
//! map call site that draws an itinerary.

pub mod traits;
pub mod error;
pub mod precision;
pub mod codec;
pub mod polyline;
pub mod geometry;
pub mod batch;
pub mod haversine;

pub use error::PolylineError;
pub use geometry::EncodedPolyline;
pub use polyline::{Coordinate, Decoder, Polyline, decode, encode};
pub use precision::Precision;
