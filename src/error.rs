//! Error type shared by every polyline operation.

/// Errors produced while encoding or decoding polylines.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PolylineError {
    #[error("Malformed polyline: input ends inside a value at byte {index}")]
    Truncated { index: usize },

    #[error("Malformed polyline: invalid character {byte:#04x} at byte {index}")]
    InvalidCharacter { index: usize, byte: u8 },

    #[error("Malformed polyline: value at byte {index} overflows 64 bits")]
    Overflow { index: usize },

    #[error("Invalid precision factor: {0:?}")]
    InvalidPrecision(String),

    #[error("Coordinate {index} cannot be encoded: ({lat}, {lng})")]
    UnencodableCoordinate { index: usize, lat: f64, lng: f64 },

    #[error("Geometry length mismatch: declared {declared}, decoded {decoded}")]
    LengthMismatch { declared: usize, decoded: usize },
}

impl PolylineError {
    /// True for errors caused by the encoded string itself.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            PolylineError::Truncated { .. }
                | PolylineError::InvalidCharacter { .. }
                | PolylineError::Overflow { .. }
        )
    }
}
