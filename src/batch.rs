//! Decoding every leg geometry of an itinerary.

use rayon::prelude::*;

use crate::error::PolylineError;
use crate::polyline::Polyline;
use crate::precision::Precision;
use crate::traits::Leg;

/// Why a leg produced no geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum FailureReason {
    /// The leg carried no encoded geometry.
    MissingGeometry,
    /// The encoded geometry could not be decoded.
    Decode(PolylineError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DecodedLeg<LegId> {
    pub leg_id: LegId,
    pub polyline: Polyline,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FailedLeg<LegId> {
    pub leg_id: LegId,
    pub reason: FailureReason,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegGeometries<LegId> {
    pub decoded: Vec<DecodedLeg<LegId>>,
    pub failed: Vec<FailedLeg<LegId>>,
}

impl<LegId> LegGeometries<LegId> {
    /// Total decoded length across legs, in kilometers.
    pub fn total_length_km(&self) -> f64 {
        self.decoded.iter().map(|leg| leg.polyline.length_km()).sum()
    }
}

/// Decodes all leg geometries in parallel, preserving leg order.
pub fn decode_legs<L>(legs: &[L], precision: Precision) -> LegGeometries<L::Id>
where
    L: Leg + Sync,
{
    tracing::trace!("Decoding {} leg geometries at precision {}", legs.len(), precision);

    let results: Vec<(L::Id, Result<Polyline, FailureReason>)> = legs
        .par_iter()
        .map(|leg| {
            let result = match leg.leg_geometry() {
                Some(geometry) => geometry.decode(precision).map_err(FailureReason::Decode),
                None => Err(FailureReason::MissingGeometry),
            };
            (leg.id().clone(), result)
        })
        .collect();

    let mut decoded = Vec::new();
    let mut failed = Vec::new();
    for (leg_id, result) in results {
        match result {
            Ok(polyline) => decoded.push(DecodedLeg { leg_id, polyline }),
            Err(reason) => {
                if let FailureReason::Decode(err) = &reason {
                    tracing::warn!("Skipping leg with undecodable geometry: {}", err);
                }
                failed.push(FailedLeg { leg_id, reason });
            }
        }
    }

    LegGeometries { decoded, failed }
}
