//! Scene layout: category anchors, item shells and particle clouds.
//!
//! The caller supplies one item count per category, in its own catalog
//! order. Every output list keeps that order so positions can be zipped back
//! onto the catalog.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use sphere_points::{relax_with, sample_sphere, star_colors_with_rng, Point3, UniformityStats};

use crate::config::{ParticleBudget, SceneConfig};
use crate::util::Timed;

/// RNG stream for the background star field. Galaxy `i` uses stream `i + 1`.
const STAR_FIELD_STREAM: u64 = 0;

/// Background star shell with per-star colors.
#[derive(Debug, Clone, PartialEq)]
pub struct StarField {
    /// Interleaved `[x, y, z]` positions.
    pub positions: Vec<f32>,
    /// Interleaved `[r, g, b]` colors, one triple per position.
    pub colors: Vec<f32>,
}

impl StarField {
    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// A fully computed scene layout.
#[derive(Debug, Clone)]
pub struct Scene {
    pub seed: u64,
    pub budget: ParticleBudget,
    /// Golden-spiral category positions before relaxation.
    pub category_seed: Vec<Point3>,
    /// Relaxed category positions, one per category.
    pub categories: Vec<Point3>,
    /// Item positions for each category, centered on the origin.
    pub items: Vec<Vec<Point3>>,
    /// One spiral particle cloud per category, centered on the origin.
    pub galaxies: Vec<Vec<f32>>,
    pub star_field: StarField,
}

impl Scene {
    pub fn num_categories(&self) -> usize {
        self.categories.len()
    }

    pub fn num_items(&self) -> usize {
        self.items.iter().map(Vec::len).sum()
    }

    /// Uniformity of the category layout before and after relaxation.
    pub fn category_stats(&self) -> (UniformityStats, UniformityStats) {
        (
            UniformityStats::measure(&self.category_seed),
            UniformityStats::measure(&self.categories),
        )
    }
}

/// Build a scene for the given per-category item counts.
///
/// Category and item layouts are deterministic. Particle clouds are seeded
/// from `seed`, so the same arguments always give the same scene.
pub fn build_scene(
    config: &SceneConfig,
    item_counts: &[usize],
    budget: ParticleBudget,
    seed: u64,
) -> Scene {
    let _t = Timed::info("Build scene");
    let layout = &config.layout;

    let category_seed = sample_sphere(item_counts.len(), layout.sphere_radius);
    let categories = {
        let _t = Timed::debug(format!("Relax {} categories", category_seed.len()));
        relax_with(&category_seed, &layout.relax_config())
    };

    let item_radius = layout.item_radius();
    let items: Vec<Vec<Point3>> = item_counts
        .iter()
        .map(|&count| sample_sphere(count, item_radius))
        .collect();

    let (galaxies, star_field) = rayon::join(
        || build_galaxies(config, item_counts.len(), budget, seed),
        || build_star_field(config, budget, seed),
    );

    log::info!(
        "Scene: {} categories, {} items, {} galaxy particles, {} stars ({})",
        categories.len(),
        items.iter().map(Vec::len).sum::<usize>(),
        galaxies.iter().map(|g| g.len() / 3).sum::<usize>(),
        star_field.len(),
        budget
    );

    Scene {
        seed,
        budget,
        category_seed,
        categories,
        items,
        galaxies,
        star_field,
    }
}

fn build_galaxies(
    config: &SceneConfig,
    num_categories: usize,
    budget: ParticleBudget,
    seed: u64,
) -> Vec<Vec<f32>> {
    let _t = Timed::debug("Galaxy fields");
    let count = budget.scale(config.particles.galaxy);
    let spiral = config.particles.spiral();

    (0..num_categories)
        .into_par_iter()
        .map(|i| {
            let mut rng = stream_rng(seed, i as u64 + 1);
            spiral.generate_with_rng(count, &mut rng)
        })
        .collect()
}

fn build_star_field(config: &SceneConfig, budget: ParticleBudget, seed: u64) -> StarField {
    let _t = Timed::debug("Star field");
    let count = budget.scale(config.particles.star_field);
    let mut rng = stream_rng(seed, STAR_FIELD_STREAM);

    let positions = config.particles.shell().generate_with_rng(count, &mut rng);
    let colors = star_colors_with_rng(count, &mut rng);
    StarField { positions, colors }
}

fn stream_rng(seed: u64, stream: u64) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(stream);
    rng
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> SceneConfig {
        let mut config = SceneConfig::default();
        config.particles.galaxy = 200;
        config.particles.star_field = 400;
        config
    }

    #[test]
    fn test_scene_shapes() {
        let config = small_config();
        let scene = build_scene(&config, &[3, 0, 1, 8], ParticleBudget::Desktop, 1);
        assert_eq!(scene.num_categories(), 4);
        assert_eq!(scene.items.len(), 4);
        assert_eq!(scene.items[0].len(), 3);
        assert!(scene.items[1].is_empty());
        assert_eq!(scene.items[2], vec![Point3::new(0.0, config.layout.item_radius(), 0.0)]);
        assert_eq!(scene.num_items(), 12);
        assert_eq!(scene.galaxies.len(), 4);
        assert!(scene.galaxies.iter().all(|g| g.len() == 600));
        assert_eq!(scene.star_field.len(), 400);
        assert_eq!(scene.star_field.colors.len(), 1200);
    }

    #[test]
    fn test_mobile_budget_halves_particles() {
        let scene = build_scene(&small_config(), &[2, 2], ParticleBudget::Mobile, 1);
        assert!(scene.galaxies.iter().all(|g| g.len() == 300));
        assert_eq!(scene.star_field.len(), 200);
    }

    #[test]
    fn test_galaxies_use_distinct_streams() {
        let scene = build_scene(&small_config(), &[1, 1, 1], ParticleBudget::Desktop, 5);
        assert_ne!(scene.galaxies[0], scene.galaxies[1]);
        assert_ne!(scene.galaxies[1], scene.galaxies[2]);
    }

    #[test]
    fn test_empty_catalog() {
        let scene = build_scene(&small_config(), &[], ParticleBudget::Desktop, 0);
        assert!(scene.categories.is_empty());
        assert!(scene.galaxies.is_empty());
        assert_eq!(scene.star_field.len(), 400);
        let (before, after) = scene.category_stats();
        assert_eq!(before.count, 0);
        assert_eq!(after.min_distance, f64::INFINITY);
    }
}
