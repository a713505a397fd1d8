//! Encoded polyline codec and the decoded polyline type.
//!
//! A polyline string is a flat sequence of interleaved latitude and
//! longitude deltas, each packed with [`crate::codec`]. Running positions
//! are kept as fixed-point integers so that decoding and re-encoding a
//! string reproduces it exactly.

use serde::{Deserialize, Serialize};

use crate::codec::{decode_signed_number_with_index, encode_signed_number};
use crate::error::PolylineError;
use crate::geometry::EncodedPolyline;
use crate::haversine;
use crate::precision::Precision;
use crate::traits::LatLng;

/// A `(latitude, longitude)` pair in degrees.
pub type Coordinate = (f64, f64);

/// A polyline representing a route geometry as decoded coordinates.
///
/// Map layers consume the points directly; the compact string form only
/// exists at the API boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Coordinate>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// Decodes an encoded polyline string.
    pub fn decode(polyline: &str, precision: Precision) -> Result<Self, PolylineError> {
        decode(polyline, precision).map(Self::new)
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn encode(&self, precision: Precision) -> Result<String, PolylineError> {
        encode(&self.points, precision)
    }

    /// Encodes the polyline together with its point count.
    pub fn to_encoded(&self, precision: Precision) -> Result<EncodedPolyline, PolylineError> {
        EncodedPolyline::from_coordinates(&self.points, precision)
    }

    /// Great-circle length along the points, in kilometers.
    pub fn length_km(&self) -> f64 {
        haversine::path_length_km(&self.points)
    }
}

impl From<Vec<Coordinate>> for Polyline {
    fn from(points: Vec<Coordinate>) -> Self {
        Self::new(points)
    }
}

/// Lazy decoder yielding one coordinate per latitude/longitude delta pair.
///
/// Yields at most one error and is fused afterwards.
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    polyline: &'a str,
    precision: Precision,
    index: usize,
    lat: i64,
    lng: i64,
    failed: bool,
}

impl<'a> Decoder<'a> {
    pub fn new(polyline: &'a str, precision: Precision) -> Self {
        Self {
            polyline,
            precision,
            index: 0,
            lat: 0,
            lng: 0,
            failed: false,
        }
    }

    /// Byte offset of the next unread character.
    pub fn position(&self) -> usize {
        self.index
    }

    fn next_coordinate(&mut self) -> Result<Coordinate, PolylineError> {
        let start = self.index;
        let (dlat, next) = decode_signed_number_with_index(self.polyline, self.index)?;
        let (dlng, next) = decode_signed_number_with_index(self.polyline, next)?;

        let lat = self.lat.checked_add(dlat).ok_or(PolylineError::Overflow { index: start })?;
        let lng = self.lng.checked_add(dlng).ok_or(PolylineError::Overflow { index: start })?;

        self.lat = lat;
        self.lng = lng;
        self.index = next;
        Ok((self.precision.from_fixed(lat), self.precision.from_fixed(lng)))
    }
}

impl Iterator for Decoder<'_> {
    type Item = Result<Coordinate, PolylineError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.index >= self.polyline.len() {
            return None;
        }

        let result = self.next_coordinate();
        if let Err(err) = &result {
            tracing::debug!("Polyline decode failed after {} bytes: {}", self.index, err);
            self.failed = true;
        }
        Some(result)
    }
}

impl std::iter::FusedIterator for Decoder<'_> {}

/// Decodes an encoded polyline string into coordinates.
///
/// An empty string decodes to an empty sequence.
pub fn decode(polyline: &str, precision: Precision) -> Result<Vec<Coordinate>, PolylineError> {
    Decoder::new(polyline, precision).collect()
}

/// Encodes coordinates into a polyline string.
pub fn encode<I>(coordinates: I, precision: Precision) -> Result<String, PolylineError>
where
    I: IntoIterator,
    I::Item: LatLng,
{
    let mut out = String::new();
    let mut prev_lat: i64 = 0;
    let mut prev_lng: i64 = 0;

    for (index, point) in coordinates.into_iter().enumerate() {
        let (lat, lng) = (point.lat(), point.lng());
        let unencodable = || PolylineError::UnencodableCoordinate { index, lat, lng };
        let fixed_lat = precision.to_fixed(lat).ok_or_else(unencodable)?;
        let fixed_lng = precision.to_fixed(lng).ok_or_else(unencodable)?;

        encode_signed_number(fixed_lat - prev_lat, &mut out);
        encode_signed_number(fixed_lng - prev_lng, &mut out);

        prev_lat = fixed_lat;
        prev_lng = fixed_lng;
    }

    Ok(out)
}
