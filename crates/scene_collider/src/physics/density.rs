//! Triangle density classification over a mesh's bounding-volume hierarchy
//!
//! A region is "high density" when it packs too many triangles into too
//! little volume for a mesh collider to stay cheap. The walk is depth-first,
//! post-order, and stops at the first region that crosses the threshold.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::scene::{MeshGeometry, AABB};
use crate::spatial::DensityNode;

/// Thresholds that together decide whether a region is too dense
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DensityThresholds {
    /// Regions smaller than this volume are never flagged
    pub min_volume: f32,
    /// Regions with fewer triangles than this are never flagged
    pub min_triangles: usize,
    /// Triangles per unit volume above which a region is flagged
    pub max_density: f32,
}

impl Default for DensityThresholds {
    fn default() -> Self {
        Self {
            min_volume: 0.1,
            min_triangles: 100,
            max_density: 1000.0,
        }
    }
}

/// Outcome of classifying one subtree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DensityVerdict {
    /// Some region in the subtree exceeded the threshold
    HighDensity,
    /// No region exceeded it; aggregate triangle count of the subtree
    Count(usize),
}

impl DensityVerdict {
    /// Check if this verdict flags high density
    pub fn is_high_density(&self) -> bool {
        matches!(self, Self::HighDensity)
    }

    /// Aggregate count, unless the subtree was flagged
    pub fn triangle_count(&self) -> Option<usize> {
        match self {
            Self::HighDensity => None,
            Self::Count(count) => Some(*count),
        }
    }
}

/// Verdict plus traversal statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DensityReport {
    /// Classification of the subtree
    pub verdict: DensityVerdict,
    /// Nodes (leaf and internal) visited before the verdict was reached
    pub nodes_visited: usize,
    /// Leaves visited before the verdict was reached
    pub leaves_visited: usize,
}

#[derive(Default)]
struct WalkStats {
    nodes: usize,
    leaves: usize,
}

/// Classifies bounding-volume hierarchies against `DensityThresholds`
#[derive(Debug, Clone, Default)]
pub struct DensityClassifier {
    thresholds: DensityThresholds,
}

impl DensityClassifier {
    /// Create a classifier with the given thresholds
    pub fn new(thresholds: DensityThresholds) -> Self {
        Self { thresholds }
    }

    /// Active thresholds
    pub fn thresholds(&self) -> &DensityThresholds {
        &self.thresholds
    }

    /// Whether `count` triangles inside `bounds` is too dense
    pub fn exceeds_threshold(&self, count: usize, bounds: &AABB) -> bool {
        let volume = bounds.volume();

        if volume < self.thresholds.min_volume {
            return false;
        }

        if count < self.thresholds.min_triangles {
            return false;
        }

        count as f32 / volume > self.thresholds.max_density
    }

    /// Classify a subtree
    pub fn classify(&self, node: &DensityNode) -> DensityVerdict {
        self.walk(node, &mut WalkStats::default())
    }

    /// Classify a subtree and report how much of it was visited
    pub fn classify_with_report(&self, node: &DensityNode) -> DensityReport {
        let mut stats = WalkStats::default();
        let verdict = self.walk(node, &mut stats);
        DensityReport {
            verdict,
            nodes_visited: stats.nodes,
            leaves_visited: stats.leaves,
        }
    }

    /// Whether a mesh's spatial index contains a high-density region
    ///
    /// Only the first root of the index is classified. Geometry without an
    /// index, or with an empty one, is never high density.
    pub fn classify_mesh(&self, geometry: &MeshGeometry) -> bool {
        geometry
            .bounds_tree()
            .and_then(|tree| tree.roots().first())
            .is_some_and(|root| self.classify(root).is_high_density())
    }

    fn walk(&self, node: &DensityNode, stats: &mut WalkStats) -> DensityVerdict {
        stats.nodes += 1;

        let count = match node {
            DensityNode::Leaf { triangle_count, .. } => {
                stats.leaves += 1;
                *triangle_count
            }
            DensityNode::Internal { left, right, .. } => {
                let DensityVerdict::Count(left_count) = self.walk(left, stats) else {
                    return DensityVerdict::HighDensity;
                };
                let DensityVerdict::Count(right_count) = self.walk(right, stats) else {
                    return DensityVerdict::HighDensity;
                };
                left_count + right_count
            }
        };

        // Aggregated counts are tested against this node's bounds, not the children's
        if self.exceeds_threshold(count, node.bounds()) {
            trace!("High density region: {} triangles in volume {}", count, node.bounds().volume());
            DensityVerdict::HighDensity
        } else {
            DensityVerdict::Count(count)
        }
    }
}
