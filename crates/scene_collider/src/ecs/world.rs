//! World holding entities and their shape attributes

use super::Entity;
use crate::physics::shape::{ShapeConfig, ShapeHost, MANUAL_SHAPE_IDS};
use std::collections::{BTreeMap, HashMap};

/// World containing all entities and their shape configurations
#[derive(Debug, Default)]
pub struct World {
    next_entity_id: u32,
    entities: Vec<Entity>,
    shapes: HashMap<Entity, BTreeMap<String, ShapeConfig>>,
    nav_meshes: Vec<Entity>,
}

impl World {
    /// Create a new world
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new entity
    pub fn create_entity(&mut self) -> Entity {
        let entity = Entity::new(self.next_entity_id);
        self.next_entity_id += 1;
        self.entities.push(entity);
        entity
    }

    /// Get an iterator over all entities
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Mark an entity as carrying the scene's navigation mesh
    pub fn tag_nav_mesh(&mut self, entity: Entity) {
        if !self.nav_meshes.contains(&entity) {
            self.nav_meshes.push(entity);
        }
    }

    /// First navigation-mesh entity, in tagging order
    pub fn nav_mesh(&self) -> Option<Entity> {
        self.nav_meshes.first().copied()
    }

    /// Shape configuration stored under `id` on `entity`
    pub fn shape(&self, entity: Entity, id: &str) -> Option<&ShapeConfig> {
        self.shapes.get(&entity)?.get(id)
    }

    /// All shapes on `entity`, ordered by id
    pub fn shapes(&self, entity: Entity) -> impl Iterator<Item = (&str, &ShapeConfig)> {
        self.shapes
            .get(&entity)
            .into_iter()
            .flat_map(|shapes| shapes.iter().map(|(id, shape)| (id.as_str(), shape)))
    }

    /// Total number of shapes across all entities
    pub fn shape_count(&self) -> usize {
        self.shapes.values().map(BTreeMap::len).sum()
    }

    /// Whether any entity has a shape stored under `id`
    pub fn has_shape_named(&self, id: &str) -> bool {
        self.shapes.values().any(|shapes| shapes.contains_key(id))
    }

    /// Whether the scene author declared a trimesh or heightfield shape
    pub fn has_manual_shapes(&self) -> bool {
        MANUAL_SHAPE_IDS.iter().any(|id| self.has_shape_named(id))
    }
}

impl ShapeHost for World {
    fn set_shape(&mut self, entity: Entity, id: &str, shape: ShapeConfig) {
        self.shapes.entry(entity).or_default().insert(id.to_string(), shape);
    }

    fn remove_shape(&mut self, entity: Entity, id: &str) -> Option<ShapeConfig> {
        let shapes = self.shapes.get_mut(&entity)?;
        let removed = shapes.remove(id);
        if shapes.is_empty() {
            self.shapes.remove(&entity);
        }
        removed
    }
}
