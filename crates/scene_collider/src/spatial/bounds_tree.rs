//! Bounding-volume hierarchy over a mesh's triangles
//!
//! Binary tree: every internal node has exactly two children and only leaves
//! hold triangles. Built top-down by splitting the longest axis of the
//! triangle-centroid bounds at its midpoint.

use crate::foundation::math::Vec3;
use crate::scene::AABB;

/// Configuration for tree construction
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Maximum triangles per leaf before a split is attempted
    pub max_leaf_triangles: usize,

    /// Maximum tree depth (root = 0)
    pub max_depth: u32,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            max_leaf_triangles: 10,
            max_depth: 40,
        }
    }
}

/// Errors raised while building a tree
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// An index references a vertex that does not exist
    #[error("Vertex index {index} out of range ({vertex_count} vertices)")]
    IndexOutOfRange {
        /// Offending index
        index: u32,
        /// Number of vertices supplied
        vertex_count: usize,
    },
}

/// Single node of the hierarchy
#[derive(Debug, Clone, PartialEq)]
pub enum DensityNode {
    /// Terminal node holding triangles directly
    Leaf {
        /// Bounds of the leaf's triangles
        bounds: AABB,
        /// Number of triangles in this leaf
        triangle_count: usize,
    },
    /// Split node with exactly two children
    Internal {
        /// Bounds enclosing both children
        bounds: AABB,
        /// First child (visited first)
        left: Box<DensityNode>,
        /// Second child
        right: Box<DensityNode>,
    },
}

impl DensityNode {
    /// Create a leaf node
    pub fn leaf(bounds: AABB, triangle_count: usize) -> Self {
        Self::Leaf { bounds, triangle_count }
    }

    /// Create an internal node
    pub fn internal(bounds: AABB, left: DensityNode, right: DensityNode) -> Self {
        Self::Internal {
            bounds,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Bounds of this node
    pub fn bounds(&self) -> &AABB {
        match self {
            Self::Leaf { bounds, .. } | Self::Internal { bounds, .. } => bounds,
        }
    }

    /// Check if this node is a leaf
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// Triangles under this node (summed over descendants for internal nodes)
    pub fn triangle_count(&self) -> usize {
        match self {
            Self::Leaf { triangle_count, .. } => *triangle_count,
            Self::Internal { left, right, .. } => left.triangle_count() + right.triangle_count(),
        }
    }

    /// Number of leaves under this node
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Depth of the deepest leaf below this node (a leaf has depth 0)
    pub fn depth(&self) -> u32 {
        match self {
            Self::Leaf { .. } => 0,
            Self::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Spatial index owned by a mesh geometry
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundsTree {
    roots: Vec<DensityNode>,
}

/// Per-triangle data used only during construction
#[derive(Debug, Clone, Copy)]
struct TriangleRef {
    bounds: AABB,
    centroid: Vec3,
}

impl BoundsTree {
    /// Wrap already-built roots
    pub fn new(roots: Vec<DensityNode>) -> Self {
        Self { roots }
    }

    /// Build a tree from indexed triangles
    ///
    /// A trailing partial triple in `indices` is ignored. No triangles
    /// produce a tree without roots.
    pub fn build(vertices: &[Vec3], indices: &[u32], options: &BuildOptions) -> Result<Self, BuildError> {
        let vertex = |index: u32| {
            vertices
                .get(index as usize)
                .copied()
                .ok_or(BuildError::IndexOutOfRange { index, vertex_count: vertices.len() })
        };

        let mut triangles = Vec::with_capacity(indices.len() / 3);
        for chunk in indices.chunks_exact(3) {
            let (a, b, c) = (vertex(chunk[0])?, vertex(chunk[1])?, vertex(chunk[2])?);
            triangles.push(TriangleRef {
                bounds: AABB::from_triangle(a, b, c),
                centroid: (a + b + c) / 3.0,
            });
        }

        if triangles.is_empty() {
            return Ok(Self::default());
        }

        let root = Self::build_node(&mut triangles, 0, options);
        log::debug!(
            "Built bounds tree: {} triangles, {} leaves, depth {}",
            root.triangle_count(),
            root.leaf_count(),
            root.depth()
        );
        Ok(Self { roots: vec![root] })
    }

    fn build_node(triangles: &mut [TriangleRef], depth: u32, options: &BuildOptions) -> DensityNode {
        let bounds = triangles
            .iter()
            .fold(AABB::empty(), |acc, tri| acc.union(&tri.bounds));

        if triangles.len() <= options.max_leaf_triangles.max(1) || depth >= options.max_depth {
            return DensityNode::leaf(bounds, triangles.len());
        }

        let mut centroid_bounds = AABB::empty();
        for tri in triangles.iter() {
            centroid_bounds.expand_point(tri.centroid);
        }
        let axis = centroid_bounds.longest_axis();
        let split = axis.component(&centroid_bounds.center());

        // In-place partition: [0, left_len) lies below the split plane
        let mut left_len = 0;
        for i in 0..triangles.len() {
            if axis.component(&triangles[i].centroid) < split {
                triangles.swap(i, left_len);
                left_len += 1;
            }
        }

        if left_len == 0 || left_len == triangles.len() {
            return DensityNode::leaf(bounds, triangles.len());
        }

        let (left, right) = triangles.split_at_mut(left_len);
        DensityNode::internal(
            bounds,
            Self::build_node(left, depth + 1, options),
            Self::build_node(right, depth + 1, options),
        )
    }

    /// Root nodes in build order
    pub fn roots(&self) -> &[DensityNode] {
        &self.roots
    }

    /// Check if the tree has no roots
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total triangles across all roots
    pub fn triangle_count(&self) -> usize {
        self.roots.iter().map(DensityNode::triangle_count).sum()
    }
}
