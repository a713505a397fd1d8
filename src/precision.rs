//! Precision factor used to move between degrees and fixed-point integers.

use std::fmt;
use std::str::FromStr;

use crate::error::PolylineError;

/// Largest fixed-point magnitude accepted by the encoder (2^53).
///
/// Every integer up to this bound is exactly representable as `f64`.
pub const MAX_FIXED: i64 = 1 << 53;

/// Largest number of decimal digits accepted by [`Precision::from_digits`].
const MAX_DIGITS: u32 = 15;

/// Scale factor applied to degrees before delta encoding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Precision(f64);

impl Precision {
    /// Five decimal digits, the scale used by trip-plan leg geometries.
    pub const E5: Precision = Precision(1e5);

    /// Six decimal digits.
    pub const E6: Precision = Precision(1e6);

    pub fn new(factor: f64) -> Result<Self, PolylineError> {
        if factor.is_finite() && factor > 0.0 {
            Ok(Self(factor))
        } else {
            Err(PolylineError::InvalidPrecision(factor.to_string()))
        }
    }

    /// Creates a precision of `10^digits`.
    pub fn from_digits(digits: u32) -> Result<Self, PolylineError> {
        if digits > MAX_DIGITS {
            return Err(PolylineError::InvalidPrecision(format!("1e{digits}")));
        }
        Ok(Self(10f64.powi(digits as i32)))
    }

    pub fn factor(&self) -> f64 {
        self.0
    }

    /// Converts degrees to a rounded fixed-point value.
    ///
    /// Returns `None` for non-finite input or when the result exceeds
    /// [`MAX_FIXED`] in magnitude.
    pub fn to_fixed(&self, degrees: f64) -> Option<i64> {
        let scaled = (degrees * self.0).round();
        if !scaled.is_finite() || scaled.abs() > MAX_FIXED as f64 {
            return None;
        }
        Some(scaled as i64)
    }

    /// Converts a fixed-point value back to degrees.
    pub fn from_fixed(&self, value: i64) -> f64 {
        value as f64 / self.0
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::E5
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:e}", self.0)
    }
}

impl FromStr for Precision {
    type Err = PolylineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let factor = s
            .trim()
            .parse::<f64>()
            .map_err(|_| PolylineError::InvalidPrecision(s.to_string()))?;
        Self::new(factor).map_err(|_| PolylineError::InvalidPrecision(s.to_string()))
    }
}
