//! Leg geometry as carried on the trip-plan wire format.

use serde::{Deserialize, Serialize};

use crate::error::PolylineError;
use crate::polyline::{self, Polyline};
use crate::precision::Precision;
use crate::traits::LatLng;

/// Encoded geometry of an itinerary leg: the polyline string and the number
/// of points it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedPolyline {
    points: String,
    length: usize,
}

impl EncodedPolyline {
    pub fn new(points: impl Into<String>, length: usize) -> Self {
        Self {
            points: points.into(),
            length,
        }
    }

    /// Encodes coordinates and records how many there were.
    pub fn from_coordinates<I>(coordinates: I, precision: Precision) -> Result<Self, PolylineError>
    where
        I: IntoIterator,
        I::Item: LatLng,
    {
        let mut length = 0;
        let points = polyline::encode(
            coordinates.into_iter().inspect(|_| length += 1),
            precision,
        )?;
        Ok(Self { points, length })
    }

    /// The encoded polyline string.
    pub fn points(&self) -> &str {
        &self.points
    }

    /// Declared number of points.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Decodes the geometry, checking the result against the declared length.
    pub fn decode(&self, precision: Precision) -> Result<Polyline, PolylineError> {
        let polyline = Polyline::decode(&self.points, precision)?;
        if polyline.len() != self.length {
            return Err(PolylineError::LengthMismatch {
                declared: self.length,
                decoded: polyline.len(),
            });
        }
        Ok(polyline)
    }
}
