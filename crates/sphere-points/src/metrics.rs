//! Uniformity statistics for point sets.
//!
//! All functions here are O(N²) and meant for offline validation, not for
//! per-frame use.

use crate::vector::{distance_squared, Point3};

/// Smallest distance between any two points.
///
/// Returns `f64::INFINITY` for fewer than two points.
pub fn min_pairwise_distance(points: &[Point3]) -> f64 {
    let mut min_sq = f64::INFINITY;
    for (i, &a) in points.iter().enumerate() {
        for &b in &points[i + 1..] {
            min_sq = min_sq.min(distance_squared(a, b));
        }
    }
    min_sq.sqrt()
}

/// Distance from each point to its closest other point, in input order.
///
/// Returns an empty vector for fewer than two points.
pub fn nearest_neighbor_distances(points: &[Point3]) -> Vec<f64> {
    if points.len() < 2 {
        return Vec::new();
    }

    let mut nearest_sq = vec![f64::INFINITY; points.len()];
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let d = distance_squared(points[i], points[j]);
            nearest_sq[i] = nearest_sq[i].min(d);
            nearest_sq[j] = nearest_sq[j].min(d);
        }
    }
    nearest_sq.into_iter().map(f64::sqrt).collect()
}

/// Mean nearest-neighbor distance over all points.
///
/// Returns `0.0` for fewer than two points.
pub fn mean_nearest_neighbor_distance(points: &[Point3]) -> f64 {
    let distances = nearest_neighbor_distances(points);
    if distances.is_empty() {
        return 0.0;
    }
    distances.iter().sum::<f64>() / distances.len() as f64
}

/// Coulomb potential energy `Σ 1/|p_i - p_j|` over unordered pairs.
///
/// Coincident pairs are skipped. Returns `0.0` for fewer than two points.
pub fn coulomb_energy(points: &[Point3]) -> f64 {
    let mut energy = 0.0;
    for (i, &a) in points.iter().enumerate() {
        for &b in &points[i + 1..] {
            let d_sq = distance_squared(a, b);
            if d_sq > 0.0 {
                energy += 1.0 / d_sq.sqrt();
            }
        }
    }
    energy
}

/// Summary of how evenly a point set is spread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformityStats {
    pub count: usize,
    /// Minimum pairwise distance (infinite below two points).
    pub min_distance: f64,
    /// Mean nearest-neighbor distance.
    pub mean_nearest: f64,
    /// Largest nearest-neighbor distance.
    pub max_nearest: f64,
    /// Coefficient of variation of nearest-neighbor distances (std / mean).
    pub nearest_cv: f64,
    /// Coulomb energy.
    pub energy: f64,
}

impl UniformityStats {
    /// Measure a point set.
    pub fn measure(points: &[Point3]) -> Self {
        let nearest = nearest_neighbor_distances(points);
        let (mean, max, cv) = if nearest.is_empty() {
            (0.0, 0.0, 0.0)
        } else {
            let n = nearest.len() as f64;
            let mean = nearest.iter().sum::<f64>() / n;
            let max = nearest.iter().copied().fold(0.0, f64::max);
            let variance = nearest.iter().map(|d| (d - mean).powi(2)).sum::<f64>() / n;
            let cv = if mean > 0.0 { variance.sqrt() / mean } else { 0.0 };
            (mean, max, cv)
        };

        Self {
            count: points.len(),
            min_distance: min_pairwise_distance(points),
            mean_nearest: mean,
            max_nearest: max,
            nearest_cv: cv,
            energy: coulomb_energy(points),
        }
    }

    /// Log a one-line summary at INFO level.
    pub fn log_summary(&self, label: &str) {
        log::info!(
            "{}: n={} min={:.4} mean_nn={:.4} max_nn={:.4} cv={:.4} energy={:.4}",
            label,
            self.count,
            self.min_distance,
            self.mean_nearest,
            self.max_nearest,
            self.nearest_cv,
            self.energy
        );
    }
}
