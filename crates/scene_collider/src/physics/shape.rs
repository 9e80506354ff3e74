//! Collision shape configuration
//!
//! A `ShapeConfig` is the description the physics subsystem turns into an
//! actual collider. It is attached to an entity under a shape id such as
//! `ammo-shape__environment`.

use serde::{Deserialize, Serialize};

use crate::ecs::Entity;
use crate::foundation::math::Vec3;

/// Prefix shared by every shape attribute id
pub const SHAPE_ATTRIBUTE_PREFIX: &str = "ammo-shape__";

/// Shape ids that mark an author-provided collision override
pub const MANUAL_SHAPE_IDS: [&str; 2] = ["ammo-shape__trimesh", "ammo-shape__heightfield"];

/// Build a full shape attribute id from its suffix
pub fn shape_id(name: &str) -> String {
    format!("{SHAPE_ATTRIBUTE_PREFIX}{name}")
}

/// Collider geometry kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    /// Oriented box
    Box,
    /// Triangle mesh generated from render geometry
    Mesh,
    /// Height grid
    Heightfield,
}

/// How the collider is sized against source geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeFit {
    /// Fit to all of the entity's geometry
    All,
    /// Use explicit dimensions
    Manual,
}

/// Named configuration for one collision shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeConfig {
    /// Collider geometry kind
    #[serde(rename = "type")]
    pub shape_type: ShapeType,
    /// Fit mode
    pub fit: ShapeFit,
    /// Collision margin in world units
    pub margin: f32,
    /// Box half extents (manual fit only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub half_extents: Option<Vec3>,
    /// Offset of the shape from the entity origin
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<Vec3>,
    /// Include invisible meshes when fitting
    #[serde(default)]
    pub include_invisible: bool,
}

impl ShapeConfig {
    /// Mesh shape fitted to visible geometry
    pub fn mesh(margin: f32) -> Self {
        Self {
            shape_type: ShapeType::Mesh,
            fit: ShapeFit::All,
            margin,
            half_extents: None,
            offset: None,
            include_invisible: false,
        }
    }

    /// Heightfield shape fitted to geometry
    pub fn heightfield(margin: f32) -> Self {
        Self {
            shape_type: ShapeType::Heightfield,
            ..Self::mesh(margin)
        }
    }

    /// Manually sized box
    pub fn manual_box(half_extents: Vec3, offset: Vec3, margin: f32) -> Self {
        Self {
            shape_type: ShapeType::Box,
            fit: ShapeFit::Manual,
            margin,
            half_extents: Some(half_extents),
            offset: Some(offset),
            include_invisible: false,
        }
    }

    /// Toggle whether invisible meshes contribute to the fit
    pub fn with_include_invisible(mut self, include_invisible: bool) -> Self {
        self.include_invisible = include_invisible;
        self
    }
}

/// Anything that can attach named shapes to entities
///
/// The physics subsystem watches these attributes and builds colliders from them.
pub trait ShapeHost {
    /// Attach `shape` to `entity` under `id`, replacing any previous shape with that id
    fn set_shape(&mut self, entity: Entity, id: &str, shape: ShapeConfig);

    /// Detach the shape stored under `id`, returning it if present
    fn remove_shape(&mut self, entity: Entity, id: &str) -> Option<ShapeConfig>;
}
