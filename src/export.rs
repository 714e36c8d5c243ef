//! Scene export for external renderers and analysis.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;
use serde::Serialize;
use sphere_points::{Point3, UniformityStats};

use crate::config::ParticleBudget;
use crate::scene::Scene;
use crate::util::Timed;
use crate::Result;

/// Export a scene as JSON. A `.gz` extension gzips the output.
pub fn export_scene(scene: &Scene, path: &Path) -> Result<()> {
    let _t = Timed::info(format!("Export to {}", path.display()));

    let data = SceneExport::from_scene(scene);
    let file = File::create(path)?;

    let is_gzip = path.extension().map(|ext| ext == "gz").unwrap_or(false);
    if is_gzip {
        let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
        serde_json::to_writer(&mut encoder, &data)?;
        encoder.finish()?.flush()?;
    } else {
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, &data)?;
        writer.flush()?;
    }
    Ok(())
}

#[derive(Serialize)]
pub(crate) struct SceneExport {
    metadata: Metadata,
    categories: Vec<[f64; 3]>,
    items: Vec<Vec<[f64; 3]>>,
    galaxies: Vec<Vec<f32>>,
    star_field: StarFieldExport,
}

#[derive(Serialize)]
struct Metadata {
    seed: u64,
    budget: ParticleBudget,
    num_categories: usize,
    num_items: usize,
    layout_before: StatsExport,
    layout_after: StatsExport,
}

#[derive(Serialize)]
struct StatsExport {
    /// `None` when there are fewer than two points.
    min_distance: Option<f64>,
    mean_nearest: f64,
    max_nearest: f64,
    nearest_cv: f64,
    energy: f64,
}

impl From<UniformityStats> for StatsExport {
    fn from(stats: UniformityStats) -> Self {
        Self {
            // JSON has no infinity
            min_distance: stats.min_distance.is_finite().then_some(stats.min_distance),
            mean_nearest: stats.mean_nearest,
            max_nearest: stats.max_nearest,
            nearest_cv: stats.nearest_cv,
            energy: stats.energy,
        }
    }
}

#[derive(Serialize)]
struct StarFieldExport {
    positions: Vec<f32>,
    colors: Vec<f32>,
}

impl SceneExport {
    pub(crate) fn from_scene(scene: &Scene) -> Self {
        let (before, after) = scene.category_stats();

        Self {
            metadata: Metadata {
                seed: scene.seed,
                budget: scene.budget,
                num_categories: scene.num_categories(),
                num_items: scene.num_items(),
                layout_before: before.into(),
                layout_after: after.into(),
            },
            categories: to_triples(&scene.categories),
            items: scene.items.iter().map(|shell| to_triples(shell)).collect(),
            galaxies: scene.galaxies.clone(),
            star_field: StarFieldExport {
                positions: scene.star_field.positions.clone(),
                colors: scene.star_field.colors.clone(),
            },
        }
    }
}

fn to_triples(points: &[Point3]) -> Vec<[f64; 3]> {
    points.iter().map(|p| p.to_array()).collect()
}
