//! Area unit conversion.
//!
//! Conversions never round. Rounding happens once, where a value leaves the
//! crate, through [`round_to`], so sums over many farms do not compound
//! rounding error.

/// Square meters in one hectare.
pub const SQUARE_METERS_PER_HECTARE: f64 = 10_000.0;

/// Square meters in one acre, as used by the registration system.
pub const SQUARE_METERS_PER_ACRE: f64 = 4_047.0;

/// Convert square meters to hectares.
#[inline]
pub fn to_hectares(square_meters: f64) -> f64 {
    square_meters / SQUARE_METERS_PER_HECTARE
}

/// Convert square meters to acres.
#[inline]
pub fn to_acres(square_meters: f64) -> f64 {
    square_meters / SQUARE_METERS_PER_ACRE
}

/// Round half away from zero to `decimals` places.
#[inline]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_hectare() {
        assert_eq!(to_hectares(10_000.0), 1.0);
    }

    #[test]
    fn test_one_acre() {
        assert!((to_acres(4_047.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero() {
        assert_eq!(to_hectares(0.0), 0.0);
        assert_eq!(to_acres(0.0), 0.0);
    }

    #[test]
    fn test_no_internal_rounding() {
        assert_eq!(to_hectares(12_345.0), 1.2345);
    }

    #[test]
    fn test_round_to_two_places() {
        assert_eq!(round_to(1.2345, 2), 1.23);
        assert_eq!(round_to(1.236, 2), 1.24);
        assert_eq!(round_to(2.0, 2), 2.0);
    }

    #[test]
    fn test_round_to_whole() {
        assert_eq!(round_to(10_013.6, 0), 10_014.0);
    }
}
