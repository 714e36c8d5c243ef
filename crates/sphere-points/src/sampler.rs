//! Initial point placement on a sphere surface.

use std::f64::consts::{PI, TAU};

use rand::Rng;

use crate::vector::Point3;

/// The golden angle `π(3 − √5)` in radians (~137.5°).
pub const GOLDEN_ANGLE: f64 = PI * (3.0 - 2.236_067_977_499_789_7);

/// Place `count` points near-uniformly on a sphere using a golden-angle spiral.
///
/// Latitude bands use an offset scheme (`y_i = (i + 0.5) * 2/count - 1`) so no
/// point sits exactly on a pole; azimuth advances by [`GOLDEN_ANGLE`] per
/// index. The result is deterministic: identical arguments give bit-identical
/// output.
///
/// A single point is placed at the pole `(0, radius, 0)`.
///
/// A negative `radius` is not rejected: every point is the mirror image
/// through the origin of the point produced for `-radius`, at distance
/// `|radius|` from the origin.
pub fn sample_sphere(count: usize, radius: f64) -> Vec<Point3> {
    match count {
        0 => Vec::new(),
        1 => vec![Point3::new(0.0, radius, 0.0)],
        _ => {
            let offset = 2.0 / count as f64;
            (0..count)
                .map(|i| {
                    let y = i as f64 * offset - 1.0 + offset / 2.0;
                    // y stays strictly inside (-1, 1), clamp guards rounding
                    let ring = (1.0 - y * y).max(0.0).sqrt();
                    let theta = i as f64 * GOLDEN_ANGLE;
                    Point3::new(theta.cos() * ring, y, theta.sin() * ring) * radius
                })
                .collect()
        }
    }
}

/// Generate `count` uniformly random points on a sphere of the given radius.
pub fn random_sphere_points(count: usize, radius: f64) -> Vec<Point3> {
    let mut rng = rand::thread_rng();
    random_sphere_points_with_rng(count, radius, &mut rng)
}

/// Generate `count` uniformly random points on a sphere using a provided RNG.
pub fn random_sphere_points_with_rng<R: Rng>(
    count: usize,
    radius: f64,
    rng: &mut R,
) -> Vec<Point3> {
    (0..count)
        .map(|_| {
            // Inverse-CDF polar angle keeps the density uniform in area
            let theta: f64 = rng.gen_range(0.0..TAU);
            let phi = (2.0 * rng.gen::<f64>() - 1.0).clamp(-1.0, 1.0).acos();
            let (sin_phi, cos_phi) = phi.sin_cos();
            Point3::new(
                radius * sin_phi * theta.cos(),
                radius * sin_phi * theta.sin(),
                radius * cos_phi,
            )
        })
        .collect()
}
