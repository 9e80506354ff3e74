//! Ring layout for photos spawned around a camera

use crate::foundation::math::{constants::TAU, Vec3};

/// Number of slots on the ring before positions repeat
pub const SNAPSHOT_SLOTS: u32 = 6;

/// Distance of each slot from the camera axis
pub const SNAPSHOT_RING_RADIUS: f32 = 0.75;

/// Camera-local position of the `snap_count`-th photo
///
/// Slots start at the bottom-left of the ring. Each slot sits slightly
/// further back than the last so neighbouring photos do not z-fight.
pub fn snapshot_offset(snap_count: u32) -> Vec3 {
    let slot = snap_count % SNAPSHOT_SLOTS + 3;
    let angle = TAU * (slot as f32 / SNAPSHOT_SLOTS as f32);

    Vec3::new(
        angle.cos() * SNAPSHOT_RING_RADIUS,
        angle.sin() * SNAPSHOT_RING_RADIUS,
        -0.05 + slot as f32 * 0.001,
    )
}
