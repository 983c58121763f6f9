//! # Math Utilities
//!
//! Interpolation helpers and S-curves used by the kernel and the modifiers.
//! All functions are pure and total; callers usually pass `a` in `[0, 1]` but
//! nothing is enforced.

use crate::constants::DEG_TO_RAD;

/// Clamps `value` to `[lower, upper]`.
///
/// Unlike [`f64::clamp`] this never panics when the bounds are inverted; the
/// lower bound wins.
#[inline]
#[must_use]
pub fn clamp(value: f64, lower: f64, upper: f64) -> f64 {
    if value < lower {
        lower
    } else if value > upper {
        upper
    } else {
        value
    }
}

/// Integer variant of [`clamp`].
#[inline]
#[must_use]
pub const fn clamp_int(value: i32, lower: i32, upper: i32) -> i32 {
    if value < lower {
        lower
    } else if value > upper {
        upper
    } else {
        value
    }
}

/// Returns the smaller of two values.
#[inline]
#[must_use]
pub fn get_smaller(a: f64, b: f64) -> f64 {
    if a < b {
        a
    } else {
        b
    }
}

/// Returns the larger of two values.
#[inline]
#[must_use]
pub fn get_larger(a: f64, b: f64) -> f64 {
    if a > b {
        a
    } else {
        b
    }
}

/// Linear interpolation: `(1 - a) * n0 + a * n1`.
///
/// This form (rather than `n0 + a * (n1 - n0)`) returns exactly `n0` when
/// `a == 0`, which the kernel relies on for its zero-at-lattice property.
#[inline]
#[must_use]
pub fn lerp(n0: f64, n1: f64, a: f64) -> f64 {
    (1.0 - a) * n0 + a * n1
}

/// Four-point cubic interpolation between `n1` and `n2`.
///
/// `n0` is the value before `n1` and `n3` the value after `n2`.
#[inline]
#[must_use]
pub fn cubic_interpolate(n0: f64, n1: f64, n2: f64, n3: f64, a: f64) -> f64 {
    let p = (n3 - n2) - (n0 - n1);
    let q = (n0 - n1) - p;
    let r = n2 - n0;
    let s = n1;
    p * a * a * a + q * a * a + r * a + s
}

/// Cubic S-curve `a²(3 - 2a)`.
#[inline]
#[must_use]
pub fn s_curve3(a: f64) -> f64 {
    a * a * (3.0 - 2.0 * a)
}

/// Quintic S-curve `6a⁵ - 15a⁴ + 10a³`.
///
/// Has zero first and second derivatives at 0 and 1.
#[inline]
#[must_use]
pub fn s_curve5(a: f64) -> f64 {
    let a3 = a * a * a;
    let a4 = a3 * a;
    let a5 = a4 * a;
    (6.0 * a5) - (15.0 * a4) + (10.0 * a3)
}

/// Converts latitude/longitude in degrees to a point on the unit sphere.
///
/// Latitude runs along y; longitude 0 points down +x. Useful for sampling a
/// graph over a planet surface.
#[must_use]
pub fn lat_lon_to_xyz(lat: f64, lon: f64) -> (f64, f64, f64) {
    let r = (DEG_TO_RAD * lat).cos();
    let x = r * (DEG_TO_RAD * lon).cos();
    let y = (DEG_TO_RAD * lat).sin();
    let z = r * (DEG_TO_RAD * lon).sin();
    (x, y, z)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, -1.0, 1.0), 1.0);
        assert_eq!(clamp(-5.0, -1.0, 1.0), -1.0);
        assert_eq!(clamp(0.25, -1.0, 1.0), 0.25);
        assert_eq!(clamp_int(300, 0, 255), 255);
        assert_eq!(clamp_int(-3, 0, 255), 0);
    }

    #[test]
    fn test_smaller_larger() {
        assert_eq!(get_smaller(1.0, 2.0), 1.0);
        assert_eq!(get_larger(1.0, 2.0), 2.0);
    }

    #[test]
    fn test_lerp_endpoints_are_exact() {
        assert_eq!(lerp(3.0, 7.0, 0.0), 3.0);
        assert_eq!(lerp(3.0, 7.0, 1.0), 7.0);
        assert!((lerp(3.0, 7.0, 0.5) - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_cubic_interpolate_hits_inner_points() {
        assert!((cubic_interpolate(0.0, 1.0, 2.0, 3.0, 0.0) - 1.0).abs() < EPSILON);
        assert!((cubic_interpolate(0.0, 1.0, 2.0, 3.0, 1.0) - 2.0).abs() < EPSILON);
        // Collinear points interpolate linearly.
        assert!((cubic_interpolate(0.0, 1.0, 2.0, 3.0, 0.5) - 1.5).abs() < EPSILON);
    }

    #[test]
    fn test_s_curves() {
        for curve in [s_curve3 as fn(f64) -> f64, s_curve5] {
            assert_eq!(curve(0.0), 0.0);
            assert!((curve(1.0) - 1.0).abs() < EPSILON);
            assert!((curve(0.5) - 0.5).abs() < EPSILON);
        }
        // Quintic is flatter near the ends.
        assert!(s_curve5(0.1) < s_curve3(0.1));
    }

    #[test]
    fn test_lat_lon_to_xyz() {
        let (x, y, z) = lat_lon_to_xyz(0.0, 0.0);
        assert!((x - 1.0).abs() < EPSILON && y.abs() < EPSILON && z.abs() < EPSILON);

        let (x, y, z) = lat_lon_to_xyz(90.0, 0.0);
        assert!(x.abs() < EPSILON && (y - 1.0).abs() < EPSILON && z.abs() < EPSILON);

        let (x, y, z) = lat_lon_to_xyz(0.0, 90.0);
        assert!(x.abs() < EPSILON && y.abs() < EPSILON && (z - 1.0).abs() < EPSILON);
    }
}
