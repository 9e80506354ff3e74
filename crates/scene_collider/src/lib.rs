//! # Scene Collider
//!
//! Chooses collision shapes for shared 3D scenes.
//!
//! ## Features
//!
//! - **Density Classification**: Flags meshes whose bounding-volume hierarchy
//!   contains regions too dense for a triangle-mesh collider
//! - **Shape Selection**: Picks one scene-wide strategy (environment mesh,
//!   navigation mesh, or flat floor) and cleans up the previous pass
//! - **Spatial Index**: Builds the bounding-volume hierarchy from indexed triangles
//! - **Media Helpers**: Content type guessing, destination URLs, JPEG orientation,
//!   snapshot layout
//!
//! ## Quick Start
//!
//! ```rust
//! use scene_collider::prelude::*;
//!
//! let mut world = World::new();
//! let scene = world.create_entity();
//! let root = SceneObject::group("Scene").with_child(SceneObject::mesh("Room", MeshGeometry::new(12)));
//!
//! let mut selector = CollisionConfig::default().build_selector();
//! let assignment = selector.select_shapes_in_world(&mut world, scene, &root);
//! assert_eq!(assignment.strategy, ShapeStrategy::EnvironmentMesh);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Core configuration
pub mod core;
pub mod config;

pub mod foundation;
pub mod ecs;
pub mod scene;
pub mod spatial;
pub mod physics;
pub mod media;

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        core::config::{CollisionConfig, Config, ConfigError},
        ecs::{Entity, World},
        foundation::math::Vec3,
        physics::{
            DensityClassifier, DensityThresholds, DensityVerdict,
            ShapeAssignment, ShapeConfig, ShapeHost, ShapeSelector, ShapeStrategy,
        },
        scene::{MeshGeometry, SceneObject, AABB},
        spatial::{BoundsTree, BuildOptions, DensityNode},
    };
}
