//! # Core Systems
//!
//! Crate-wide configuration shared by the density classifier and the shape
//! selector.

pub mod config;

pub use config::CollisionConfig;
