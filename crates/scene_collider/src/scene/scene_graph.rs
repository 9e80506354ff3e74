//! Scene graph objects and traversal
//!
//! Scene objects form a plain ownership tree. Traversal is pull-based: callers
//! iterate instead of handing a visitor callback to the graph.

use log::trace;

use crate::foundation::math::{Axis, Vec3};
use super::geometry::MeshGeometry;

/// Name prefixes of background geometry that never takes part in density analysis
pub const DEFAULT_EXCLUDED_PREFIXES: [&str; 2] = ["Floor_Plan", "Ground_Plane"];

/// Axis-Aligned Bounding Box for spatial queries
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner of the bounding box
    pub min: Vec3,
    /// Maximum corner of the bounding box
    pub max: Vec3,
}

impl AABB {
    /// Create a new AABB from min and max points
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create an inverted box that any `expand` call will overwrite
    pub fn empty() -> Self {
        Self {
            min: Vec3::repeat(f32::MAX),
            max: Vec3::repeat(f32::MIN),
        }
    }

    /// Smallest box containing the three triangle corners
    pub fn from_triangle(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self {
            min: a.inf(&b).inf(&c),
            max: a.sup(&b).sup(&c),
        }
    }

    /// Get the center of the AABB
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Volume of the box; inverted or flat boxes have zero volume
    pub fn volume(&self) -> f32 {
        let size = self.max - self.min;
        size.x.max(0.0) * size.y.max(0.0) * size.z.max(0.0)
    }

    /// Axis along which the box is widest (ties favour X, then Y)
    pub fn longest_axis(&self) -> Axis {
        let size = self.max - self.min;
        if size.x >= size.y && size.x >= size.z {
            Axis::X
        } else if size.y >= size.z {
            Axis::Y
        } else {
            Axis::Z
        }
    }

    /// Check if this AABB contains a point
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.x >= self.min.x && point.x <= self.max.x &&
        point.y >= self.min.y && point.y <= self.max.y &&
        point.z >= self.min.z && point.z <= self.max.z
    }

    /// Check if this AABB fully contains another AABB
    pub fn contains_aabb(&self, other: &AABB) -> bool {
        self.contains_point(other.min) && self.contains_point(other.max)
    }

    /// Grow this box to include a point
    pub fn expand_point(&mut self, point: Vec3) {
        self.min = self.min.inf(&point);
        self.max = self.max.sup(&point);
    }

    /// Grow this box to include another box
    pub fn expand(&mut self, other: &AABB) {
        self.min = self.min.inf(&other.min);
        self.max = self.max.sup(&other.max);
    }

    /// Box covering both `self` and `other`
    pub fn union(&self, other: &AABB) -> AABB {
        let mut merged = *self;
        merged.expand(other);
        merged
    }
}

/// What a scene object renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    /// Transform-only grouping node
    Group,
    /// Regular triangle mesh
    Mesh,
    /// Sky dome; a mesh, but always treated as background
    Sky,
}

/// Why an object is left out of the density scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Object has no renderable geometry
    NotMesh,
    /// Object is the sky dome
    Sky,
    /// Object name starts with an excluded prefix
    ExcludedName,
    /// Mesh has no spatial index built
    NoSpatialIndex,
}

/// Node of the visual scene graph
#[derive(Debug, Clone)]
pub struct SceneObject {
    /// Object name as authored in the scene file
    pub name: String,
    /// Object kind
    pub kind: ObjectKind,
    /// Triangle geometry, present on meshes
    pub geometry: Option<MeshGeometry>,
    /// Child objects in document order
    pub children: Vec<SceneObject>,
}

impl SceneObject {
    /// Create an empty grouping node
    pub fn group(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ObjectKind::Group,
            geometry: None,
            children: Vec::new(),
        }
    }

    /// Create a mesh node
    pub fn mesh(name: impl Into<String>, geometry: MeshGeometry) -> Self {
        Self {
            name: name.into(),
            kind: ObjectKind::Mesh,
            geometry: Some(geometry),
            children: Vec::new(),
        }
    }

    /// Create a sky dome node
    pub fn sky(name: impl Into<String>, geometry: MeshGeometry) -> Self {
        Self {
            kind: ObjectKind::Sky,
            ..Self::mesh(name, geometry)
        }
    }

    /// Builder-style child attachment
    pub fn with_child(mut self, child: SceneObject) -> Self {
        self.children.push(child);
        self
    }

    /// Whether this object carries triangle geometry
    pub fn is_mesh(&self) -> bool {
        matches!(self.kind, ObjectKind::Mesh | ObjectKind::Sky) && self.geometry.is_some()
    }

    /// Reason this object is not a density-scan candidate, or `None` if it is
    pub fn density_skip_reason<S: AsRef<str>>(&self, excluded_prefixes: &[S]) -> Option<SkipReason> {
        let Some(geometry) = self.geometry.as_ref().filter(|_| self.is_mesh()) else {
            return Some(SkipReason::NotMesh);
        };
        if self.kind == ObjectKind::Sky {
            return Some(SkipReason::Sky);
        }
        if excluded_prefixes.iter().any(|prefix| self.name.starts_with(prefix.as_ref())) {
            return Some(SkipReason::ExcludedName);
        }
        if geometry.bounds_tree().is_none() {
            return Some(SkipReason::NoSpatialIndex);
        }
        None
    }

    /// Depth-first, pre-order iterator over this object and all descendants
    pub fn traverse(&self) -> Traverse<'_> {
        Traverse { stack: vec![self] }
    }

    /// Iterator over the meshes a density scan may classify
    ///
    /// Restart by calling again or by cloning the iterator.
    pub fn eligible_meshes<'a, S: AsRef<str>>(&'a self, excluded_prefixes: &'a [S]) -> EligibleMeshes<'a, S> {
        EligibleMeshes {
            objects: self.traverse(),
            excluded_prefixes,
        }
    }
}

/// Depth-first, pre-order scene traversal
#[derive(Debug, Clone)]
pub struct Traverse<'a> {
    stack: Vec<&'a SceneObject>,
}

impl<'a> Iterator for Traverse<'a> {
    type Item = &'a SceneObject;

    fn next(&mut self) -> Option<Self::Item> {
        let object = self.stack.pop()?;
        // Reversed so the first child is visited first
        self.stack.extend(object.children.iter().rev());
        Some(object)
    }
}

/// Scene meshes that pass the density-scan exclusion rules
#[derive(Debug)]
pub struct EligibleMeshes<'a, S> {
    objects: Traverse<'a>,
    excluded_prefixes: &'a [S],
}

impl<S> Clone for EligibleMeshes<'_, S> {
    fn clone(&self) -> Self {
        Self {
            objects: self.objects.clone(),
            excluded_prefixes: self.excluded_prefixes,
        }
    }
}

impl<'a, S: AsRef<str>> Iterator for EligibleMeshes<'a, S> {
    type Item = (&'a SceneObject, &'a MeshGeometry);

    fn next(&mut self) -> Option<Self::Item> {
        for object in self.objects.by_ref() {
            match object.density_skip_reason(self.excluded_prefixes) {
                None => {
                    if let Some(geometry) = object.geometry.as_ref() {
                        return Some((object, geometry));
                    }
                }
                Some(SkipReason::NotMesh) => {}
                Some(reason) => trace!("Skipping '{}' in density scan: {:?}", object.name, reason),
            }
        }
        None
    }
}
