//! Default layout and particle parameters.

/// Radius of the sphere that category anchors are placed on.
pub const SPHERE_RADIUS: f64 = 12.0;

/// Item shells sit inside the category sphere by this factor.
pub const ITEM_RADIUS_FACTOR: f64 = 0.8;

// Category relaxation schedule

/// Relaxation passes over the category layout.
pub const RELAX_ITERATIONS: u32 = 50;

/// Initial relaxation step size.
pub const RELAX_STEP: f64 = 0.1;

/// Step size multiplier per relaxation pass.
pub const RELAX_DECAY: f64 = 0.99;

// Particle fields

/// Particles per galaxy cloud (desktop budget).
pub const GALAXY_PARTICLES: usize = 3000;

/// Background star particles (desktop budget).
pub const STAR_FIELD_PARTICLES: usize = 8000;

/// Outer radius of the background star shell.
pub const STAR_FIELD_RADIUS: f32 = 50.0;

/// Arms per galaxy cloud.
pub const SPIRAL_ARMS: u32 = 3;

/// Scale of each galaxy cloud.
pub const SPIRAL_SPREAD: f32 = 1.0;

/// Item counts used when the caller supplies none (five categories).
pub const DEFAULT_ITEM_COUNTS: [usize; 5] = [6, 9, 4, 12, 7];
