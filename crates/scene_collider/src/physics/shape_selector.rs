//! Scene-wide collision shape selection
//!
//! Picks exactly one collision strategy for a scene from the density of its
//! meshes and the presence of a navigation mesh:
//!
//! | high density | nav mesh | result                                        |
//! |--------------|----------|-----------------------------------------------|
//! | no           | any      | mesh shape over visible scene geometry        |
//! | yes          | yes      | mesh shape over the nav mesh, invisible incl. |
//! | yes          | no       | large flat box under the origin               |
//!
//! An author-declared trimesh or heightfield shape overrides all of this.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::ecs::{Entity, World};
use crate::foundation::math::Vec3;
use crate::scene::{SceneObject, DEFAULT_EXCLUDED_PREFIXES};
use super::density::DensityClassifier;
use super::shape::{shape_id, ShapeConfig, ShapeHost};

/// Tunables for the shapes the selector assigns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeSettings {
    /// Collision margin applied to every assigned shape
    pub margin: f32,
    /// Half extents of the fallback floor box
    pub floor_half_extents: [f32; 3],
    /// Offset of the fallback floor box from the scene origin
    pub floor_offset: [f32; 3],
    /// Objects whose names start with one of these are left out of the density scan
    pub excluded_name_prefixes: Vec<String>,
}

impl Default for ShapeSettings {
    fn default() -> Self {
        Self {
            margin: 0.01,
            floor_half_extents: [4000.0, 0.5, 4000.0],
            floor_offset: [0.0, -0.5, 0.0],
            excluded_name_prefixes: DEFAULT_EXCLUDED_PREFIXES.iter().map(ToString::to_string).collect(),
        }
    }
}

/// One shape assigned by a selection pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeRecord {
    /// Shape attribute id
    pub id: String,
    /// Entity carrying the shape
    pub entity: Entity,
}

/// Shapes assigned by previous passes, most recent last
#[derive(Debug, Default)]
pub struct SceneShapeState {
    records: Vec<ShapeRecord>,
}

impl SceneShapeState {
    /// Create an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a newly assigned shape
    pub fn push(&mut self, record: ShapeRecord) {
        self.records.push(record);
    }

    /// Remove every recorded shape from `host`, most recent first
    pub fn clear<H: ShapeHost + ?Sized>(&mut self, host: &mut H) {
        while let Some(ShapeRecord { id, entity }) = self.records.pop() {
            if host.remove_shape(entity, &id).is_some() {
                debug!("Removed shape {} from {}", id, entity);
            }
        }
    }

    /// Recorded shapes in assignment order
    pub fn records(&self) -> &[ShapeRecord] {
        &self.records
    }

    /// Number of recorded shapes
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if no shapes are recorded
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Strategy chosen by a selection pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeStrategy {
    /// Author-provided trimesh/heightfield present; nothing assigned
    ManualOverride,
    /// Mesh shape on the navigation mesh entity
    NavMesh,
    /// Mesh shape over all visible scene geometry
    EnvironmentMesh,
    /// Flat box floor fallback
    DefaultFloor,
}

/// Result of a density scan over a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DensityScan {
    /// Whether any scanned mesh had a high-density region
    pub high_density: bool,
    /// Meshes that passed the exclusion rules and were classified
    pub meshes_scanned: usize,
    /// Meshes classified as high density
    pub high_density_meshes: usize,
}

/// Outcome of one selection pass
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeAssignment {
    /// Chosen strategy
    pub strategy: ShapeStrategy,
    /// Density scan result (default when the scan was skipped)
    pub scan: DensityScan,
    /// Shape assigned by this pass, if any
    pub assigned: Option<ShapeRecord>,
}

/// Chooses and assigns the collision shape strategy for a scene
///
/// Owns the record of what it assigned so that each pass starts by removing
/// the previous pass's shapes. Not meant to be driven concurrently.
#[derive(Debug, Default)]
pub struct ShapeSelector {
    classifier: DensityClassifier,
    settings: ShapeSettings,
    state: SceneShapeState,
}

impl ShapeSelector {
    /// Create a selector from its parts
    pub fn new(classifier: DensityClassifier, settings: ShapeSettings) -> Self {
        Self {
            classifier,
            settings,
            state: SceneShapeState::new(),
        }
    }

    /// Shapes currently assigned by this selector
    pub fn state(&self) -> &SceneShapeState {
        &self.state
    }

    /// Shape settings in use
    pub fn settings(&self) -> &ShapeSettings {
        &self.settings
    }

    /// Classify every eligible mesh under `mesh_root`
    ///
    /// Every eligible mesh is visited even after one is flagged.
    pub fn scan(&self, mesh_root: &SceneObject) -> DensityScan {
        let mut scan = DensityScan::default();
        for (object, geometry) in mesh_root.eligible_meshes(self.settings.excluded_name_prefixes.as_slice()) {
            scan.meshes_scanned += 1;
            if self.classifier.classify_mesh(geometry) {
                debug!("Mesh '{}' contains a high triangle density region", object.name);
                scan.high_density_meshes += 1;
                scan.high_density = true;
            }
        }
        scan
    }

    /// Run a selection pass
    ///
    /// Removes shapes from the previous pass, then, unless the author supplied
    /// their own collision shapes, assigns exactly one new shape.
    pub fn select_shapes<H: ShapeHost + ?Sized>(
        &mut self,
        host: &mut H,
        scene_entity: Entity,
        mesh_root: &SceneObject,
        manual_shapes_present: bool,
        nav_mesh: Option<Entity>,
    ) -> ShapeAssignment {
        self.state.clear(host);

        if manual_shapes_present {
            info!("Heightfield or trimesh found on scene; skipping shape selection");
            return ShapeAssignment {
                strategy: ShapeStrategy::ManualOverride,
                scan: DensityScan::default(),
                assigned: None,
            };
        }

        let scan = self.scan(mesh_root);
        let margin = self.settings.margin;

        let (strategy, entity, name, shape) = match (scan.high_density, nav_mesh) {
            (true, Some(nav_entity)) => {
                info!("Mesh density exceeded, using floor plan only");
                (
                    ShapeStrategy::NavMesh,
                    nav_entity,
                    "floorPlan",
                    ShapeConfig::mesh(margin).with_include_invisible(true),
                )
            }
            (false, _) => {
                info!("Adding mesh shape for all visible meshes");
                (ShapeStrategy::EnvironmentMesh, scene_entity, "environment", ShapeConfig::mesh(margin))
            }
            (true, None) => {
                info!("Mesh density exceeded and no nav mesh; adding default floor collision");
                let shape = ShapeConfig::manual_box(
                    Vec3::from(self.settings.floor_half_extents),
                    Vec3::from(self.settings.floor_offset),
                    margin,
                );
                (ShapeStrategy::DefaultFloor, scene_entity, "defaultFloor", shape)
            }
        };

        let record = ShapeRecord { id: shape_id(name), entity };
        host.set_shape(entity, &record.id, shape);
        self.state.push(record.clone());

        ShapeAssignment {
            strategy,
            scan,
            assigned: Some(record),
        }
    }

    /// Run a selection pass, reading manual-shape and nav-mesh presence from `world`
    pub fn select_shapes_in_world(
        &mut self,
        world: &mut World,
        scene_entity: Entity,
        mesh_root: &SceneObject,
    ) -> ShapeAssignment {
        let manual_shapes_present = world.has_manual_shapes();
        let nav_mesh = world.nav_mesh();
        self.select_shapes(world, scene_entity, mesh_root, manual_shapes_present, nav_mesh)
    }
}
