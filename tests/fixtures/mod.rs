//! Test fixtures for trip-polyline.
//!
//! Provides realistic test data including:
//! - Real Las Vegas Strip points (from OpenStreetMap)
//! - Leg geometries produced by a trip-plan server

pub mod routes;

pub use routes::*;
