//! Stochastic particle fields for dense background clouds.
//!
//! Unlike [`sample_sphere`](crate::sample_sphere), these produce density
//! fields rather than discrete placements: no minimum separation is
//! guaranteed. Output is a flat `[x0, y0, z0, x1, ...]` buffer of `f32`,
//! ready to upload as a vertex attribute.

use std::f32::consts::TAU;

use rand::Rng;

/// Maximum spiral radius before scaling by `spread`.
const SPIRAL_MAX_RADIUS: f32 = 4.0;

/// Winding per unit radius.
const SPIRAL_TWIST: f32 = 3.0;

/// Full width of the in-plane jitter, as a fraction of `spread`.
const SPIRAL_PLANE_JITTER: f32 = 0.5;

/// Full width of the vertical jitter, as a fraction of `spread`.
const SPIRAL_HEIGHT_JITTER: f32 = 0.3;

/// Fraction of star-field particles tinted blue.
const BLUE_STAR_FRACTION: f64 = 0.1;

const WHITE: [f32; 3] = [1.0, 1.0, 1.0];
const PALE_BLUE: [f32; 3] = [0.8, 0.9, 1.0];

/// Shape of a spiral-arm field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralParams {
    /// Number of evenly spaced arms. Zero is treated as one.
    pub arms: u32,
    /// Overall scale of the field.
    pub spread: f32,
}

impl Default for SpiralParams {
    fn default() -> Self {
        Self {
            arms: 3,
            spread: 1.0,
        }
    }
}

impl SpiralParams {
    pub fn generate_with_rng<R: Rng>(&self, count: usize, rng: &mut R) -> Vec<f32> {
        generate_spiral_field_with_rng(count, self.arms, self.spread, rng)
    }
}

/// Shape of a hollow shell field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellParams {
    /// Outer radius. Particles lie between `radius / 2` and `radius`.
    pub radius: f32,
}

impl Default for ShellParams {
    fn default() -> Self {
        Self { radius: 50.0 }
    }
}

impl ShellParams {
    pub fn generate_with_rng<R: Rng>(&self, count: usize, rng: &mut R) -> Vec<f32> {
        generate_shell_field_with_rng(count, self.radius, rng)
    }
}

/// Generate a spiral-arm field of `count` particles.
pub fn generate_spiral_field(count: usize, arms: u32, spread: f32) -> Vec<f32> {
    let mut rng = rand::thread_rng();
    generate_spiral_field_with_rng(count, arms, spread, &mut rng)
}

/// Generate a spiral-arm field of `count` particles using a provided RNG.
///
/// Particle `i` belongs to arm `i % arms`. Its distance from the center is
/// uniform in `[0, 4 * spread)` and the arm winds by `3` radians per unit of
/// that distance. Jitter is uniform within `±0.25 * spread` in the plane and
/// `±0.15 * spread` vertically.
pub fn generate_spiral_field_with_rng<R: Rng>(
    count: usize,
    arms: u32,
    spread: f32,
    rng: &mut R,
) -> Vec<f32> {
    let arms = arms.max(1);
    let mut positions = Vec::with_capacity(count * 3);

    for i in 0..count {
        let radius = rng.gen::<f32>() * SPIRAL_MAX_RADIUS * spread;
        let spin = radius * SPIRAL_TWIST;
        let branch = arm_angle(i, arms);

        let jitter_x = (rng.gen::<f32>() - 0.5) * SPIRAL_PLANE_JITTER * spread;
        let jitter_y = (rng.gen::<f32>() - 0.5) * SPIRAL_HEIGHT_JITTER * spread;
        let jitter_z = (rng.gen::<f32>() - 0.5) * SPIRAL_PLANE_JITTER * spread;

        let angle = branch + spin;
        positions.extend_from_slice(&[
            angle.cos() * radius + jitter_x,
            jitter_y,
            angle.sin() * radius + jitter_z,
        ]);
    }

    positions
}

/// Base angle of the arm that particle `i` belongs to.
fn arm_angle(i: usize, arms: u32) -> f32 {
    (i % arms as usize) as f32 / arms as f32 * TAU
}

/// Generate a hollow shell field of `count` particles.
pub fn generate_shell_field(count: usize, radius: f32) -> Vec<f32> {
    let mut rng = rand::thread_rng();
    generate_shell_field_with_rng(count, radius, &mut rng)
}

/// Generate a hollow shell field of `count` particles using a provided RNG.
///
/// Directions are uniform on the sphere (inverse-CDF polar angle, so the
/// poles are not over-sampled). Distances are uniform in `[radius / 2, radius]`.
pub fn generate_shell_field_with_rng<R: Rng>(count: usize, radius: f32, rng: &mut R) -> Vec<f32> {
    let mut positions = Vec::with_capacity(count * 3);

    for _ in 0..count {
        let theta = rng.gen::<f32>() * TAU;
        let phi = (2.0 * rng.gen::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
        let r = radius * (0.5 + 0.5 * rng.gen::<f32>());

        let (sin_phi, cos_phi) = phi.sin_cos();
        positions.extend_from_slice(&[
            r * sin_phi * theta.cos(),
            r * sin_phi * theta.sin(),
            r * cos_phi,
        ]);
    }

    positions
}

/// Per-particle RGB colors for a star field: mostly white, some pale blue.
pub fn star_colors_with_rng<R: Rng>(count: usize, rng: &mut R) -> Vec<f32> {
    let mut colors = Vec::with_capacity(count * 3);
    for _ in 0..count {
        let color = if rng.gen_bool(BLUE_STAR_FRACTION) {
            PALE_BLUE
        } else {
            WHITE
        };
        colors.extend_from_slice(&color);
    }
    colors
}
