//! Entity storage
//!
//! Entities are plain ids; the world keeps the named shape configurations the
//! physics subsystem reads and the markers used by presence queries.

pub mod world;
pub mod entity;

pub use world::World;
pub use entity::Entity;
