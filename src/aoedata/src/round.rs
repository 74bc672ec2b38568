//! Output numeric policy.
//!
//! Archive floats are usually integral values stored with tiny binary
//! representation error. The snapshot must not leak that noise, but must
//! also keep genuinely fractional values (line of sight can be 6.05).

use serde::Serialize;

/// Tolerance below which a float is treated as its nearest integer.
const INT_SNAP_EPSILON: f64 = 0.000_000_1;

/// A rounded output number: a bare integer when the source value was
/// integral up to [`INT_SNAP_EPSILON`], otherwise a float at 6 decimals.
///
/// Serializes untagged, so `Int(6)` becomes the JSON number `6` rather
/// than `6.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Rounded {
    Int(i64),
    Float(f64),
}

/// Apply the output numeric policy to a finite float.
///
/// Values within `1e-7` of their nearest integer collapse to that integer;
/// everything else is rounded to 6 decimal places.
pub fn round_float(value: f64) -> Rounded {
    let nearest = value.round();
    if (nearest - value).abs() < INT_SNAP_EPSILON {
        Rounded::Int(nearest as i64)
    } else {
        Rounded::Float((value * 1_000_000.0).round() / 1_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snaps_near_integers() {
        assert_eq!(round_float(6.000_000_1), Rounded::Int(6));
        assert_eq!(round_float(5.999_999_95), Rounded::Int(6));
        assert_eq!(round_float(7.0), Rounded::Int(7));
        assert_eq!(round_float(0.0), Rounded::Int(0));
        assert_eq!(round_float(-3.000_000_05), Rounded::Int(-3));
    }

    #[test]
    fn test_keeps_fractional_values() {
        assert_eq!(round_float(6.05), Rounded::Float(6.05));
        assert_eq!(round_float(4.5), Rounded::Float(4.5));
        assert_eq!(round_float(-2.25), Rounded::Float(-2.25));
    }

    #[test]
    fn test_truncates_to_six_decimals() {
        assert_eq!(round_float(6.123_456_789), Rounded::Float(6.123_457));
        assert_eq!(round_float(0.000_001_4), Rounded::Float(0.000_001));
    }

    #[test]
    fn test_int_serializes_without_fraction() {
        assert_eq!(serde_json::to_string(&round_float(6.000_000_1)).unwrap(), "6");
        assert_eq!(serde_json::to_string(&round_float(6.05)).unwrap(), "6.05");
    }
}
