//! Distance and normalization over 3D points.

use glam::DVec3;

/// A position in 3D space. Equality is value equality.
pub type Point3 = DVec3;

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Point3, b: Point3) -> f64 {
    (a - b).length()
}

/// Squared Euclidean distance between two points.
#[inline]
pub fn distance_squared(a: Point3, b: Point3) -> f64 {
    (a - b).length_squared()
}

/// Unit vector in the direction of `v`.
///
/// Returns the zero vector when `v` has zero or non-finite length, so callers
/// never see NaN components.
#[inline]
pub fn normalize(v: Point3) -> Point3 {
    v.try_normalize().unwrap_or(DVec3::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_is_symmetric() {
        let a = DVec3::new(1.0, 2.0, 3.0);
        let b = DVec3::new(4.0, 6.0, 3.0);
        assert_eq!(distance(a, b), 5.0);
        assert_eq!(distance(b, a), 5.0);
        assert_eq!(distance_squared(a, b), 25.0);
    }

    #[test]
    fn test_normalize_zero_vector() {
        assert_eq!(normalize(DVec3::ZERO), DVec3::ZERO);
    }

    #[test]
    fn test_normalize_non_finite() {
        let v = DVec3::new(f64::INFINITY, 0.0, 0.0);
        assert_eq!(normalize(v), DVec3::ZERO);
    }

    #[test]
    fn test_normalize_unit_length() {
        let n = normalize(DVec3::new(3.0, -4.0, 12.0));
        assert!((n.length() - 1.0).abs() < 1e-12);
        assert!((n.x - 3.0 / 13.0).abs() < 1e-12);
    }
}
