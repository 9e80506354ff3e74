//! Scene management
//!
//! The visual object graph that collision selection walks, plus the
//! bounding-box type shared with the spatial index.
//!
//! ## Traversal
//!
//! ```text
//! SceneObject (root)
//!      ↓  traverse()         every object, depth-first pre-order
//!      ↓  eligible_meshes()  only meshes the density scan may classify
//! ```

mod scene_graph;
mod geometry;

pub use scene_graph::{
    AABB, SceneObject, ObjectKind, SkipReason, Traverse, EligibleMeshes,
    DEFAULT_EXCLUDED_PREFIXES,
};
pub use geometry::MeshGeometry;
