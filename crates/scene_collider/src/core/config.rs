//! # Unified Configuration
//!
//! One file tunes the whole collision pass:
//!
//! ```toml
//! [density]
//! min_volume = 0.1
//! min_triangles = 100
//! max_density = 1000.0
//!
//! [shapes]
//! margin = 0.01
//! floor_half_extents = [4000.0, 0.5, 4000.0]
//! floor_offset = [0.0, -0.5, 0.0]
//! excluded_name_prefixes = ["Floor_Plan", "Ground_Plane"]
//! ```
//!
//! Every field has a default, so partial files are accepted.

use serde::{Deserialize, Serialize};

pub use crate::config::{Config, ConfigError};
use crate::physics::{DensityClassifier, DensityThresholds, ShapeSelector, ShapeSettings};

/// Configuration for density classification and shape assignment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    /// Density thresholds
    pub density: DensityThresholds,
    /// Assigned shape parameters
    pub shapes: ShapeSettings,
}

impl Config for CollisionConfig {}

impl CollisionConfig {
    /// Build a selector configured from this file
    pub fn build_selector(&self) -> ShapeSelector {
        ShapeSelector::new(DensityClassifier::new(self.density), self.shapes.clone())
    }
}
