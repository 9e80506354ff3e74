//! Mesh geometry as seen by collision selection
//!
//! Only triangle counts and the spatial index matter here; vertex data is
//! consumed once while building the index and not retained.

use crate::foundation::math::Vec3;
use crate::spatial::{BoundsTree, BuildError, BuildOptions};

/// Triangle geometry attached to a mesh object
#[derive(Debug, Clone, Default)]
pub struct MeshGeometry {
    triangle_count: usize,
    bounds_tree: Option<BoundsTree>,
}

impl MeshGeometry {
    /// Geometry with a known triangle count and no spatial index
    pub fn new(triangle_count: usize) -> Self {
        Self {
            triangle_count,
            bounds_tree: None,
        }
    }

    /// Build geometry and its spatial index from indexed triangles
    pub fn from_triangles(vertices: &[Vec3], indices: &[u32], options: &BuildOptions) -> Result<Self, BuildError> {
        let mut geometry = Self::new(indices.len() / 3);
        geometry.compute_bounds_tree(vertices, indices, options)?;
        Ok(geometry)
    }

    /// Attach a prebuilt spatial index
    pub fn with_bounds_tree(mut self, tree: BoundsTree) -> Self {
        self.bounds_tree = Some(tree);
        self
    }

    /// (Re)build the spatial index from indexed triangles
    pub fn compute_bounds_tree(&mut self, vertices: &[Vec3], indices: &[u32], options: &BuildOptions) -> Result<(), BuildError> {
        let tree = BoundsTree::build(vertices, indices, options)?;
        self.triangle_count = tree.triangle_count();
        self.bounds_tree = Some(tree);
        Ok(())
    }

    /// Drop the spatial index
    pub fn dispose_bounds_tree(&mut self) {
        self.bounds_tree = None;
    }

    /// Spatial index, if one has been built
    pub fn bounds_tree(&self) -> Option<&BoundsTree> {
        self.bounds_tree.as_ref()
    }

    /// Number of triangles in the geometry
    pub fn triangle_count(&self) -> usize {
        self.triangle_count
    }
}
