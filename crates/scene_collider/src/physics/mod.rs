//! Physics module for collision shape selection
//!
//! Decides which collision shape a scene gets, based on how densely its
//! meshes pack triangles.
//!
//! # Module Organization
//!
//! - [`density`] - Triangle density classification over bounding-volume hierarchies
//! - [`shape`] - Shape configurations and the `ShapeHost` attachment seam
//! - [`shape_selector`] - Scene-wide strategy selection and cleanup

pub mod density;
pub mod shape;
pub mod shape_selector;

#[cfg(test)]
mod tests;

pub use density::{DensityClassifier, DensityThresholds, DensityVerdict, DensityReport};
pub use shape::{ShapeConfig, ShapeType, ShapeFit, ShapeHost, shape_id};
pub use shape_selector::{
    ShapeSelector,
    ShapeSettings,
    ShapeAssignment,
    ShapeStrategy,
    ShapeRecord,
    SceneShapeState,
    DensityScan,
};
