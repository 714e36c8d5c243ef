//! Starmap: sphere layouts and particle fields for a 3D catalog browser.
//!
//! Point placement itself lives in the `sphere_points` crate. This crate
//! composes it into a scene (category anchors, item shells, galaxy clouds and
//! a star-field background) and handles configuration and export.

pub mod config;
pub mod constants;
mod error;
pub mod export;
pub mod scene;
pub mod util;

pub use config::{LayoutConfig, ParticleBudget, ParticleConfig, SceneConfig};
pub use error::{Error, Result};
pub use export::export_scene;
pub use scene::{build_scene, Scene, StarField};
