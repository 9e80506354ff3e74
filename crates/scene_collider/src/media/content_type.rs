//! Content type guessing from media URLs

use super::MediaError;

/// Content type of a live in-world video stream
pub const HUBS_VIDEO_CONTENT_TYPE: &str = "video/vnd.hubs-webrtc";

const KNOWN_CONTENT_TYPES: [(&str, &str); 8] = [
    ("gltf", "model/gltf"),
    ("glb", "model/gltf-binary"),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("pdf", "application/pdf"),
    ("mp4", "video/mp4"),
    ("mp3", "audio/mpeg"),
];

/// Guess a content type from the URL's path extension
///
/// Returns `Ok(None)` for unknown extensions. Extensions are matched
/// case-sensitively.
pub fn guess_content_type(url: &str) -> Result<Option<&'static str>, MediaError> {
    if url.starts_with("hubs://") && url.ends_with("/video") {
        return Ok(Some(HUBS_VIDEO_CONTENT_TYPE));
    }

    let path = url_path(url).ok_or_else(|| MediaError::InvalidUrl(url.to_string()))?;
    let extension = path.rsplit('.').next().unwrap_or(path);

    Ok(KNOWN_CONTENT_TYPES
        .iter()
        .find(|(known, _)| *known == extension)
        .map(|(_, content_type)| *content_type))
}

/// Schemes whose URLs always carry an authority and accept backslash separators
const SPECIAL_SCHEMES: [&str; 6] = ["http", "https", "ws", "wss", "ftp", "file"];

/// Path component of an absolute URL (without query or fragment)
///
/// Surrounding whitespace and control characters are ignored. For special
/// schemes a backslash separates segments like `/`; separators inside the returned
/// path are left unnormalised since only the final extension is read.
fn url_path(url: &str) -> Option<&str> {
    let url = url.trim_matches(|c: char| c <= ' ');
    let (scheme, rest) = url.split_once(':')?;
    let scheme_valid = scheme
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
        && scheme.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if !scheme_valid {
        return None;
    }

    let rest = rest.split(['?', '#']).next().unwrap_or_default();
    if SPECIAL_SCHEMES.iter().any(|special| special.eq_ignore_ascii_case(scheme)) {
        let authority_and_path = rest.trim_start_matches(['/', '\\']);
        return Some(
            authority_and_path
                .find(['/', '\\'])
                .map_or("", |start| &authority_and_path[start..]),
        );
    }

    match rest.strip_prefix("//") {
        Some(authority_and_path) => Some(
            authority_and_path
                .find('/')
                .map_or("", |start| &authority_and_path[start..]),
        ),
        None => Some(rest),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions() {
        assert_eq!(guess_content_type("https://example.com/models/duck.glb"), Ok(Some("model/gltf-binary")));
        assert_eq!(guess_content_type("https://example.com/a/b/scene.gltf"), Ok(Some("model/gltf")));
        assert_eq!(guess_content_type("http://example.com/photo.jpeg"), Ok(Some("image/jpeg")));
        assert_eq!(guess_content_type("https://example.com/song.mp3"), Ok(Some("audio/mpeg")));
    }

    #[test]
    fn test_query_and_fragment_ignored() {
        assert_eq!(guess_content_type("https://example.com/doc.pdf?token=abc.png"), Ok(Some("application/pdf")));
        assert_eq!(guess_content_type("https://example.com/clip.mp4#t=10"), Ok(Some("video/mp4")));
    }

    #[test]
    fn test_unknown_or_missing_extension() {
        assert_eq!(guess_content_type("https://example.com/readme.txt"), Ok(None));
        assert_eq!(guess_content_type("https://example.com/image"), Ok(None));
        assert_eq!(guess_content_type("https://example.com"), Ok(None));
        assert_eq!(guess_content_type("https://example.com/IMAGE.PNG"), Ok(None));
    }

    #[test]
    fn test_backslash_separators_and_whitespace() {
        assert_eq!(guess_content_type("https://example.com\\models\\duck.glb"), Ok(Some("model/gltf-binary")));
        assert_eq!(guess_content_type("https:\\\\example.com\\photo.png"), Ok(Some("image/png")));
        assert_eq!(guess_content_type("  https://example.com/song.mp3\n"), Ok(Some("audio/mpeg")));
        // host names are not paths
        assert_eq!(guess_content_type("https://duck.glb"), Ok(None));
        assert_eq!(guess_content_type("https://example.com\\archive.tar"), Ok(None));
    }

    #[test]
    fn test_video_stream_scheme() {
        assert_eq!(guess_content_type("hubs://clients/abc123/video"), Ok(Some(HUBS_VIDEO_CONTENT_TYPE)));
        assert_eq!(guess_content_type("hubs://clients/abc123/audio"), Ok(None));
    }

    #[test]
    fn test_relative_url_rejected() {
        assert!(matches!(guess_content_type("models/duck.glb"), Err(MediaError::InvalidUrl(_))));
        assert!(matches!(guess_content_type("1http://x/y.png"), Err(MediaError::InvalidUrl(_))));
    }
}
