//! Recognises links to hosted scenes and rooms

use std::sync::OnceLock;

use regex::Regex;

use super::MediaError;

const SCENE_PATTERN: &str =
    r"https?://(hubs\.local(:[0-9]+)?|(smoke-)?hubs\.mozilla\.com)/scenes/(?-u:\w)+/?\S*";
const ROOM_PATTERN: &str = r"https?://(hubs\.local(:[0-9]+)?|(smoke-)?hubs\.mozilla\.com)/(?-u:\w)+/?\S*";

/// Compiled scene and room URL patterns
///
/// Matching is unanchored: a URL embedded in surrounding text still counts.
#[derive(Debug, Clone)]
pub struct DestinationMatcher {
    scene: Regex,
    room: Regex,
}

impl DestinationMatcher {
    /// Compile both patterns
    pub fn new() -> Result<Self, MediaError> {
        let compile = |pattern: &str| Regex::new(pattern).map_err(|err| MediaError::InvalidPattern(err.to_string()));
        Ok(Self {
            scene: compile(SCENE_PATTERN)?,
            room: compile(ROOM_PATTERN)?,
        })
    }

    /// Link to a scene page
    pub fn is_scene_url(&self, url: &str) -> bool {
        self.scene.is_match(url)
    }

    /// Link to a room; scene links are never rooms even though they share the host
    pub fn is_room_url(&self, url: &str) -> bool {
        !self.is_scene_url(url) && self.room.is_match(url)
    }

    /// Link to either a scene or a room
    pub fn is_destination_url(&self, url: &str) -> bool {
        self.is_scene_url(url) || self.is_room_url(url)
    }
}

fn shared() -> Result<&'static DestinationMatcher, MediaError> {
    static MATCHER: OnceLock<Result<DestinationMatcher, MediaError>> = OnceLock::new();
    MATCHER.get_or_init(DestinationMatcher::new).as_ref().map_err(Clone::clone)
}

/// Whether `url` links to a scene page
pub fn is_scene_url(url: &str) -> Result<bool, MediaError> {
    Ok(shared()?.is_scene_url(url))
}

/// Whether `url` links to a room
pub fn is_room_url(url: &str) -> Result<bool, MediaError> {
    Ok(shared()?.is_room_url(url))
}

/// Whether `url` links to a scene or a room
pub fn is_destination_url(url: &str) -> Result<bool, MediaError> {
    Ok(shared()?.is_destination_url(url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_urls() {
        assert_eq!(is_scene_url("https://hubs.mozilla.com/scenes/abc123"), Ok(true));
        assert_eq!(is_scene_url("https://hubs.mozilla.com/scenes/abc123/my-scene"), Ok(true));
        assert_eq!(is_scene_url("http://hubs.local:8080/scenes/xyz"), Ok(true));
        assert_eq!(is_scene_url("https://smoke-hubs.mozilla.com/scenes/abc"), Ok(true));
        assert_eq!(is_scene_url("https://hubs.mozilla.com/abc123"), Ok(false));
    }

    #[test]
    fn test_room_urls_exclude_scenes() {
        assert_eq!(is_room_url("https://hubs.mozilla.com/abc123/cozy-room"), Ok(true));
        assert_eq!(is_room_url("http://hubs.local:4000/room1"), Ok(true));
        assert_eq!(is_room_url("https://smoke-hubs.mozilla.com/room1"), Ok(true));
        assert_eq!(is_room_url("https://hubs.mozilla.com/scenes/abc123"), Ok(false));
    }

    #[test]
    fn test_destination_urls() {
        assert_eq!(is_destination_url("https://hubs.mozilla.com/scenes/abc123"), Ok(true));
        assert_eq!(is_destination_url("https://hubs.mozilla.com/abc123"), Ok(true));
        assert_eq!(is_destination_url("see https://hubs.local/room1 for details"), Ok(true));
    }

    #[test]
    fn test_other_hosts_rejected() {
        let matcher = DestinationMatcher::new().unwrap();
        for url in [
            "https://example.com/scenes/abc",
            "https://example.com/room1",
            "https://staging-hubs.mozilla.com/room1",
            "https://hubsxlocal/room1",
            "ftp://hubs.mozilla.com/room1",
            "https://hubs.mozilla.com/",
        ] {
            assert!(!matcher.is_destination_url(url), "{url}");
        }
    }
}
