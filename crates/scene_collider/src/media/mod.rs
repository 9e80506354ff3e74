//! Media helpers used when placing user media into a scene
//!
//! Pure data transforms only: nothing here performs I/O.

mod content_type;
mod destination_url;
mod orientation;
mod snapshot;

pub use content_type::{guess_content_type, HUBS_VIDEO_CONTENT_TYPE};
pub use destination_url::{is_destination_url, is_room_url, is_scene_url, DestinationMatcher};
pub use orientation::{read_jpeg_orientation, ExifOrientation, OrientationError};
pub use snapshot::{snapshot_offset, SNAPSHOT_RING_RADIUS, SNAPSHOT_SLOTS};

/// Media helper errors
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MediaError {
    /// Input is not an absolute URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// URL pattern failed to compile
    #[error("Invalid URL pattern: {0}")]
    InvalidPattern(String),
}
