//! Point distribution on spheres.
//!
//! This crate places N items evenly on a sphere surface and relaxes the
//! placement toward a minimum-energy layout. It also generates stochastic
//! particle fields (spiral arms, hollow shells) for dense background clouds.
//!
//! Every function is pure: it takes counts, shape parameters and (for the
//! stochastic fields) a random source, and returns freshly allocated output.
//!
//! # Example
//!
//! ```
//! use sphere_points::{min_pairwise_distance, relax, sample_sphere};
//!
//! let initial = sample_sphere(6, 1.0);
//! let relaxed = relax(&initial, 200, 0.1);
//!
//! assert_eq!(relaxed.len(), 6);
//! assert!(min_pairwise_distance(&relaxed) > min_pairwise_distance(&initial));
//! ```

mod field;
mod metrics;
mod relax;
mod sampler;
mod vector;

pub use field::{
    generate_shell_field, generate_shell_field_with_rng, generate_spiral_field,
    generate_spiral_field_with_rng, star_colors_with_rng, ShellParams, SpiralParams,
};
pub use metrics::{
    coulomb_energy, mean_nearest_neighbor_distance, min_pairwise_distance,
    nearest_neighbor_distances, UniformityStats,
};
pub use relax::{
    relax, relax_with, RelaxConfig, DEFAULT_DECAY, DEFAULT_ITERATIONS, DEFAULT_STEP_SIZE,
};
pub use sampler::{
    random_sphere_points, random_sphere_points_with_rng, sample_sphere, GOLDEN_ANGLE,
};
pub use vector::{distance, distance_squared, normalize, Point3};
