//! Decoding leg geometries from a trip-plan itinerary.

mod fixtures;

use serde::Deserialize;

use fixtures::{SERVER_LEG_GEOMETRIES, strip_walk};
use trip_polyline::batch::{FailureReason, decode_legs};
use trip_polyline::traits::Leg;
use trip_polyline::{EncodedPolyline, PolylineError, Precision};

#[derive(Clone, Debug, Hash, Eq, PartialEq, Deserialize)]
struct LegId(String);

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MockLeg {
    id: LegId,
    mode: String,
    leg_geometry: Option<EncodedPolyline>,
}

impl Leg for MockLeg {
    type Id = LegId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn leg_geometry(&self) -> Option<&EncodedPolyline> {
        self.leg_geometry.as_ref()
    }
}

#[derive(Debug, Deserialize)]
struct Itinerary {
    legs: Vec<MockLeg>,
}

const ITINERARY_JSON: &str = r#"{
    "legs": [
        { "id": "walk-1", "mode": "WALK", "legGeometry": { "points": "??_ibE_ibE", "length": 2 } },
        { "id": "bus-2", "mode": "BUS", "legGeometry": { "points": "_ibE_ibE_{geC_wpkG_{geC_wpkG", "length": 3 } },
        { "id": "wait-3", "mode": "WAIT" },
        { "id": "walk-4", "mode": "WALK", "legGeometry": { "points": "_atqG_ye~O_{geC_wpkG", "length": 3 } }
    ]
}"#;

#[test]
fn itinerary_json_decodes_per_leg() {
    let itinerary: Itinerary = serde_json::from_str(ITINERARY_JSON).expect("parse itinerary");
    assert_eq!(itinerary.legs[1].mode, "BUS");

    let result = decode_legs(&itinerary.legs, Precision::E5);

    let decoded: Vec<&str> = result.decoded.iter().map(|leg| leg.leg_id.0.as_str()).collect();
    assert_eq!(decoded, vec!["walk-1", "bus-2"]);
    assert_eq!(result.decoded[1].polyline.points()[2], (45.0, 89.0));

    assert_eq!(result.failed.len(), 2);
    assert_eq!(result.failed[0].leg_id, LegId("wait-3".into()));
    assert_eq!(result.failed[0].reason, FailureReason::MissingGeometry);
    assert_eq!(result.failed[1].leg_id, LegId("walk-4".into()));
    assert_eq!(
        result.failed[1].reason,
        FailureReason::Decode(PolylineError::LengthMismatch {
            declared: 3,
            decoded: 2
        })
    );
}

#[test]
fn many_legs_keep_input_order() {
    let legs: Vec<MockLeg> = (0..500)
        .map(|i| {
            let (points, length) = SERVER_LEG_GEOMETRIES[i % SERVER_LEG_GEOMETRIES.len()];
            MockLeg {
                id: LegId(format!("leg-{i}")),
                mode: "RAIL".to_string(),
                leg_geometry: Some(EncodedPolyline::new(points, length)),
            }
        })
        .collect();

    let result = decode_legs(&legs, Precision::E5);

    assert!(result.failed.is_empty());
    assert_eq!(result.decoded.len(), legs.len());
    for (i, leg) in result.decoded.iter().enumerate() {
        assert_eq!(leg.leg_id, LegId(format!("leg-{i}")));
        let (_, length) = SERVER_LEG_GEOMETRIES[i % SERVER_LEG_GEOMETRIES.len()];
        assert_eq!(leg.polyline.len(), length);
    }
}

#[test]
fn total_length_sums_decoded_legs() {
    let walk = strip_walk();
    let (first, second) = walk.split_at(5);
    let legs = vec![
        MockLeg {
            id: LegId("south".into()),
            mode: "WALK".into(),
            leg_geometry: Some(EncodedPolyline::from_coordinates(first, Precision::E6).unwrap()),
        },
        MockLeg {
            id: LegId("north".into()),
            mode: "WALK".into(),
            leg_geometry: Some(EncodedPolyline::from_coordinates(second, Precision::E6).unwrap()),
        },
    ];

    let result = decode_legs(&legs, Precision::E6);
    assert!(result.failed.is_empty());

    let total = result.total_length_km();
    let per_leg: f64 = result.decoded.iter().map(|leg| leg.polyline.length_km()).sum();
    assert!((total - per_leg).abs() < 1e-9);
    assert!(total > 4.0 && total < 6.0, "got {total}");
}
