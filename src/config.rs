//! Scene configuration.
//!
//! Defaults come from [`crate::constants`]. A config can be loaded from a JSON
//! file; any field left out keeps its default.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sphere_points::{RelaxConfig, ShellParams, SpiralParams};

use crate::constants::*;
use crate::{Error, Result};

/// Full configuration for building a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SceneConfig {
    pub layout: LayoutConfig,
    pub particles: ParticleConfig,
}

/// Placement of discrete items on spheres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Radius of the category sphere.
    pub sphere_radius: f64,
    /// Item sphere radius as a fraction of `sphere_radius`.
    pub item_radius_factor: f64,
    pub relax_iterations: u32,
    pub relax_step: f64,
    pub relax_decay: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            sphere_radius: SPHERE_RADIUS,
            item_radius_factor: ITEM_RADIUS_FACTOR,
            relax_iterations: RELAX_ITERATIONS,
            relax_step: RELAX_STEP,
            relax_decay: RELAX_DECAY,
        }
    }
}

impl LayoutConfig {
    pub fn relax_config(&self) -> RelaxConfig {
        RelaxConfig {
            iterations: self.relax_iterations,
            step_size: self.relax_step,
            decay: self.relax_decay,
        }
    }

    pub fn item_radius(&self) -> f64 {
        self.sphere_radius * self.item_radius_factor
    }
}

/// Particle counts and field shapes, before the device budget is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Particles per galaxy cloud.
    pub galaxy: usize,
    /// Background star particles.
    pub star_field: usize,
    pub star_field_radius: f32,
    pub spiral_arms: u32,
    pub spiral_spread: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            galaxy: GALAXY_PARTICLES,
            star_field: STAR_FIELD_PARTICLES,
            star_field_radius: STAR_FIELD_RADIUS,
            spiral_arms: SPIRAL_ARMS,
            spiral_spread: SPIRAL_SPREAD,
        }
    }
}

impl ParticleConfig {
    pub fn spiral(&self) -> SpiralParams {
        SpiralParams {
            arms: self.spiral_arms,
            spread: self.spiral_spread,
        }
    }

    pub fn shell(&self) -> ShellParams {
        ShellParams {
            radius: self.star_field_radius,
        }
    }
}

/// Particle budget for the target device.
///
/// Device detection belongs to the caller; this only applies the scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticleBudget {
    #[default]
    Desktop,
    /// Half the desktop particle counts.
    Mobile,
}

impl ParticleBudget {
    pub fn scale(self, count: usize) -> usize {
        match self {
            ParticleBudget::Desktop => count,
            ParticleBudget::Mobile => count / 2,
        }
    }
}

impl fmt::Display for ParticleBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParticleBudget::Desktop => write!(f, "desktop"),
            ParticleBudget::Mobile => write!(f, "mobile"),
        }
    }
}

impl SceneConfig {
    /// Load a config from a JSON file and validate it.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: SceneConfig = serde_json::from_str(&text)?;
        config.validate()?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject values that would make the layout meaningless.
    ///
    /// A negative sphere radius is allowed: it mirrors the layout through the
    /// origin.
    pub fn validate(&self) -> Result<()> {
        let layout = &self.layout;
        if !layout.sphere_radius.is_finite() || layout.sphere_radius == 0.0 {
            return Err(invalid(format!(
                "sphere_radius must be finite and non-zero, got {}",
                layout.sphere_radius
            )));
        }
        if !layout.item_radius_factor.is_finite() || layout.item_radius_factor <= 0.0 {
            return Err(invalid(format!(
                "item_radius_factor must be positive, got {}",
                layout.item_radius_factor
            )));
        }
        if !layout.relax_step.is_finite() || layout.relax_step <= 0.0 {
            return Err(invalid(format!(
                "relax_step must be positive, got {}",
                layout.relax_step
            )));
        }
        if !layout.relax_decay.is_finite()
            || layout.relax_decay <= 0.0
            || layout.relax_decay > 1.0
        {
            return Err(invalid(format!(
                "relax_decay must be in (0, 1], got {}",
                layout.relax_decay
            )));
        }

        let particles = &self.particles;
        if !particles.star_field_radius.is_finite() || particles.star_field_radius <= 0.0 {
            return Err(invalid(format!(
                "star_field_radius must be positive, got {}",
                particles.star_field_radius
            )));
        }
        if !particles.spiral_spread.is_finite() || particles.spiral_spread < 0.0 {
            return Err(invalid(format!(
                "spiral_spread must be non-negative, got {}",
                particles.spiral_spread
            )));
        }
        if particles.spiral_arms == 0 {
            return Err(invalid("spiral_arms must be at least 1".to_string()));
        }
        Ok(())
    }
}

fn invalid(msg: String) -> Error {
    Error::InvalidConfig(msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SceneConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.layout.sphere_radius, 12.0);
        assert!((config.layout.item_radius() - 9.6).abs() < 1e-12);
        assert_eq!(config.particles.galaxy, 3000);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{ "layout": { "sphere_radius": 20.0 }, "particles": { "galaxy": 500 } }"#;
        let config: SceneConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.layout.sphere_radius, 20.0);
        assert_eq!(config.layout.relax_iterations, RELAX_ITERATIONS);
        assert_eq!(config.particles.galaxy, 500);
        assert_eq!(config.particles.star_field, STAR_FIELD_PARTICLES);
    }

    #[test]
    fn test_empty_json_is_default() {
        let config: SceneConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SceneConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = SceneConfig::default();
        config.layout.relax_step = 0.0;
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let mut config = SceneConfig::default();
        config.layout.sphere_radius = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = SceneConfig::default();
        config.layout.relax_decay = 1.5;
        assert!(config.validate().is_err());

        let mut config = SceneConfig::default();
        config.particles.spiral_arms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_radius_allowed() {
        let mut config = SceneConfig::default();
        config.layout.sphere_radius = -12.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_budget_scaling() {
        assert_eq!(ParticleBudget::Desktop.scale(8000), 8000);
        assert_eq!(ParticleBudget::Mobile.scale(8000), 4000);
        assert_eq!(ParticleBudget::Mobile.scale(3001), 1500);
        assert_eq!(ParticleBudget::Mobile.to_string(), "mobile");
    }

    #[test]
    fn test_relax_config_mapping() {
        let layout = LayoutConfig::default();
        let relax = layout.relax_config();
        assert_eq!(relax.iterations, 50);
        assert_eq!(relax.step_size, 0.1);
        assert_eq!(relax.decay, 0.99);
    }
}
