//! Spatial partitioning data structures
//!
//! Provides the bounding-volume hierarchy a mesh carries so that density
//! queries can reason about regions of triangles instead of single triangles.

mod bounds_tree;

pub use bounds_tree::{BoundsTree, DensityNode, BuildOptions, BuildError};
