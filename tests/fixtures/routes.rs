//! Route geometries for codec tests.
//!
//! Points along the Las Vegas Strip sourced from OpenStreetMap, plus leg
//! geometries exactly as a trip-plan server returned them.

/// A named point with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

// ============================================================================
// Strip walk, south to north
// ============================================================================

pub const STRIP_WALK: &[Location] = &[
    Location::new("Strip Steak", 36.0908722, -115.1776176),
    Location::new("Charlie Palmer Steak", 36.0910624, -115.1743364),
    Location::new("MGM Grand", 36.1023654, -115.1688720),
    Location::new("Hard Rock Cafe", 36.1041592, -115.1722166),
    Location::new("Earl of Sandwich Planet Hollywood", 36.1093912, -115.1720087),
    Location::new("Bellagio", 36.1126, -115.1767),
    Location::new("Caesars Palace", 36.1162, -115.1745),
    Location::new("Brooklyn Bowl", 36.1175388, -115.1695094),
    Location::new("Public House", 36.1219193, -115.1689317),
    Location::new("Wynn Las Vegas", 36.1263781, -115.1658180),
    Location::new("Encore at Wynn", 36.1289345, -115.1653620),
];

pub fn strip_walk() -> Vec<(f64, f64)> {
    STRIP_WALK.iter().map(Location::coords).collect()
}

// ============================================================================
// Leg geometries from trip-plan responses (precision 1e5)
// ============================================================================

/// `(points, length)` pairs as found in `legGeometry`.
pub const SERVER_LEG_GEOMETRIES: &[(&str, usize)] = &[
    ("??_ibE_ibE", 2),
    ("_ibE_ibE_{geC_wpkG_{geC_wpkG", 3),
    ("_wfhA_ekkC_mcbA_{geC_{geC_wpkG", 3),
    ("_atqG_ye~O_{geC_wpkG", 2),
    ("_}|wK_qwjX?_seK", 2),
    ("_}|wK_e~vX_{geC_wpkG", 2),
    ("_ye~O_}oca@?_ibE_ibE?", 3),
    ("_cidP_gsia@?~bidP", 2),
    ("_cidP_cidP?~bidP", 2),
];
