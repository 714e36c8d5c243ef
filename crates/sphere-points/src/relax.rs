//! Electrostatic relaxation of points on a sphere (Thomson problem).
//!
//! Each point is treated as a unit charge. Every iteration computes the
//! Coulomb repulsion on every point from a snapshot of all positions, takes a
//! gradient step, then projects each point back onto its own sphere. The step
//! size decays geometrically so the layout settles instead of oscillating.
//!
//! The force on a point grows roughly like N / r², so a fixed step that is
//! gentle for a handful of points on a large sphere throws points across a
//! small, crowded one. Each displacement is therefore capped at half the
//! point's nearest-neighbor distance in the snapshot. The cap only engages
//! when `step * force` would exceed it; otherwise the update is the plain
//! projected gradient step.
//!
//! Cost is O(iterations × N²). Keep N in the low hundreds; most of the gain
//! happens in the first 10-20 iterations. For larger N, use
//! [`sample_sphere`](crate::sample_sphere) alone.

use glam::DVec3;

use crate::vector::{normalize, Point3};

/// Default number of relaxation iterations.
pub const DEFAULT_ITERATIONS: u32 = 50;

/// Default initial step size.
pub const DEFAULT_STEP_SIZE: f64 = 0.1;

/// Per-iteration step size multiplier.
pub const DEFAULT_DECAY: f64 = 0.99;

/// Pairs closer than this (squared) exert no force on each other.
const MIN_SEPARATION_SQ: f64 = 1e-24;

/// Largest displacement per iteration, as a fraction of the distance to the
/// nearest other point.
const MAX_STEP_FRACTION: f64 = 0.5;

/// Configuration for [`relax_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelaxConfig {
    /// Number of full passes over all points.
    pub iterations: u32,
    /// Initial gradient step size.
    pub step_size: f64,
    /// Multiplier applied to the step size after each iteration.
    pub decay: f64,
}

impl Default for RelaxConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            step_size: DEFAULT_STEP_SIZE,
            decay: DEFAULT_DECAY,
        }
    }
}

impl RelaxConfig {
    /// Config with the given iterations and step size and the default decay.
    pub fn new(iterations: u32, step_size: f64) -> Self {
        Self {
            iterations,
            step_size,
            ..Self::default()
        }
    }
}

/// Relax `initial` toward a minimum-energy layout.
///
/// Returns a new point set with the same length and order. Every output point
/// lies at the same distance from the origin as its input counterpart.
/// `iterations == 0`, fewer than two points, or a step size that is not a
/// positive finite number return the input unchanged.
///
/// `step_size` multiplies a force of order `N / r²`. Around 0.1 suits tens of
/// points on spheres of radius 1 to 100; larger steps are clamped per point to
/// half its nearest-neighbor distance rather than overshooting.
pub fn relax(initial: &[Point3], iterations: u32, step_size: f64) -> Vec<Point3> {
    relax_with(initial, &RelaxConfig::new(iterations, step_size))
}

/// Relax `initial` with explicit configuration.
pub fn relax_with(initial: &[Point3], config: &RelaxConfig) -> Vec<Point3> {
    let mut points = initial.to_vec();
    if config.iterations == 0
        || points.len() < 2
        || !(config.step_size.is_finite() && config.step_size > 0.0)
    {
        return points;
    }

    log::debug!(
        "Relaxing {} points: {} iterations, step {}",
        points.len(),
        config.iterations,
        config.step_size
    );

    // Target radii come from the input and are never recomputed
    let radii: Vec<f64> = initial.iter().map(|p| p.length()).collect();
    let mut forces = vec![DVec3::ZERO; points.len()];
    let mut nearest_sq = vec![f64::INFINITY; points.len()];
    let mut step = config.step_size;
    let mut clamped = 0usize;

    for iteration in 0..config.iterations {
        accumulate_forces(&points, &mut forces, &mut nearest_sq);

        for (i, p) in points.iter_mut().enumerate() {
            let mut displacement = forces[i] * step;
            let max_len = MAX_STEP_FRACTION * nearest_sq[i].sqrt();
            if displacement.length() > max_len {
                displacement = displacement.clamp_length_max(max_len);
                clamped += 1;
            }

            let moved = *p + displacement;
            if !moved.is_finite() {
                continue;
            }
            let dir = normalize(moved);
            if dir == DVec3::ZERO {
                continue;
            }
            *p = dir * radii[i];
        }

        log::trace!("relax iteration {}: step {:.6}", iteration, step);
        step *= config.decay;
    }

    log::debug!(
        "Relaxed {} points: final step {:.6}, {} clamped moves",
        points.len(),
        step,
        clamped
    );

    points
}

/// Coulomb force on every point from all others, written into `forces`, and
/// each point's squared distance to its nearest other point, written into
/// `nearest_sq` (infinite when every other point coincides with it).
///
/// Reads only `points`, so every force in one iteration sees the same
/// snapshot regardless of update order.
fn accumulate_forces(points: &[Point3], forces: &mut [DVec3], nearest_sq: &mut [f64]) {
    forces.fill(DVec3::ZERO);
    nearest_sq.fill(f64::INFINITY);
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let delta = points[i] - points[j];
            let dist_sq = delta.length_squared();
            if dist_sq < MIN_SEPARATION_SQ {
                continue;
            }
            nearest_sq[i] = nearest_sq[i].min(dist_sq);
            nearest_sq[j] = nearest_sq[j].min(dist_sq);
            // (p_i - p_j) / |p_i - p_j|^3, equal and opposite on j
            let f = delta / (dist_sq * dist_sq.sqrt());
            forces[i] += f;
            forces[j] -= f;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{coulomb_energy, min_pairwise_distance};
    use crate::sample_sphere;

    #[test]
    fn test_zero_iterations_is_noop() {
        let points = sample_sphere(12, 3.0);
        assert_eq!(relax(&points, 0, 0.1), points);
    }

    #[test]
    fn test_empty_and_single() {
        assert!(relax(&[], 10, 0.1).is_empty());
        let single = vec![DVec3::new(0.0, 2.0, 0.0)];
        assert_eq!(relax(&single, 10, 0.1), single);
    }

    #[test]
    fn test_bad_step_size_is_noop() {
        let points = sample_sphere(8, 1.0);
        assert_eq!(relax(&points, 10, 0.0), points);
        assert_eq!(relax(&points, 10, -0.5), points);
        assert_eq!(relax(&points, 10, f64::NAN), points);
    }

    #[test]
    fn test_antipodal_pair_is_stable() {
        let points = vec![DVec3::new(0.0, 1.0, 0.0), DVec3::new(0.0, -1.0, 0.0)];
        let relaxed = relax(&points, 20, 0.1);
        for (a, b) in relaxed.iter().zip(&points) {
            assert!((*a - *b).length() < 1e-12);
        }
    }

    #[test]
    fn test_coincident_points_stay_finite() {
        let p = DVec3::new(1.0, 0.0, 0.0);
        let points = vec![p, p, DVec3::new(0.0, 1.0, 0.0)];
        let relaxed = relax(&points, 10, 0.1);
        assert_eq!(relaxed.len(), 3);
        for q in &relaxed {
            assert!(q.is_finite(), "non-finite output: {:?}", q);
            assert!((q.length() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_origin_point_stays_at_origin() {
        let points = vec![DVec3::ZERO, DVec3::new(1.0, 0.0, 0.0), DVec3::new(0.0, 1.0, 0.0)];
        let relaxed = relax(&points, 5, 0.1);
        assert_eq!(relaxed[0], DVec3::ZERO);
    }

    #[test]
    fn test_mixed_radii_preserved() {
        let mut points = sample_sphere(10, 1.0);
        for (i, p) in points.iter_mut().enumerate() {
            *p *= 1.0 + i as f64 * 0.5;
        }
        let relaxed = relax(&points, 30, 0.1);
        for (i, (r, p)) in relaxed.iter().zip(&points).enumerate() {
            let rel = (r.length() - p.length()).abs() / p.length();
            assert!(rel < 1e-6, "point {} drifted off its sphere: {}", i, rel);
        }
    }

    #[test]
    fn test_energy_decreases() {
        let points = sample_sphere(24, 1.0);
        let relaxed = relax(&points, 50, 0.05);
        assert!(
            coulomb_energy(&relaxed) < coulomb_energy(&points),
            "relaxation did not lower energy"
        );
    }

    #[test]
    fn test_custom_decay() {
        let points = sample_sphere(6, 1.0);
        let config = RelaxConfig {
            iterations: 200,
            step_size: 0.1,
            decay: 1.0,
        };
        let relaxed = relax_with(&points, &config);
        let d = min_pairwise_distance(&relaxed);
        assert!(d > min_pairwise_distance(&points));
    }

    #[test]
    fn test_large_step_is_clamped() {
        let points = sample_sphere(50, 1.0);
        let relaxed = relax(&points, 50, 10.0);
        for (r, p) in relaxed.iter().zip(&points) {
            assert!(r.is_finite());
            assert!((r.length() - p.length()).abs() < 1e-9);
        }
        assert!(
            min_pairwise_distance(&relaxed) > min_pairwise_distance(&points),
            "oversized step scattered the layout"
        );
    }

    #[test]
    fn test_crowded_small_sphere() {
        for count in [13, 60] {
            let points = sample_sphere(count, 0.1);
            let relaxed = relax(&points, 50, 0.1);
            let before = min_pairwise_distance(&points);
            let after = min_pairwise_distance(&relaxed);
            assert!(after > before, "count={}: min distance {} -> {}", count, before, after);
        }
    }

    #[test]
    fn test_order_independent_forces() {
        let points = sample_sphere(9, 1.0);
        let mut reversed = points.clone();
        reversed.reverse();

        let mut a = relax(&points, 5, 0.1);
        let b = relax(&reversed, 5, 0.1);
        a.reverse();
        for (p, q) in a.iter().zip(&b) {
            assert!((*p - *q).length() < 1e-9, "update order changed the result");
        }
    }
}
