//! Playlist kind detection.

/// Marker tag a master playlist uses to announce a variant stream.
const STREAM_INF_TAG: &str = "#EXT-X-STREAM-INF";
/// Marker tag a media playlist uses to announce an inline segment.
const EXTINF_TAG: &str = "#EXTINF";

/// Kind of playlist a document was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaylistKind {
    /// References variant streams of different bitrates/resolutions.
    Master,
    /// References actual media segments.
    Media,
}

/// Extract the tag of a manifest line: the token before the first `:` of a
/// line starting with `#`. Non-tag lines (URIs, blanks) yield `None`.
fn line_tag(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    if !trimmed.starts_with('#') {
        return None;
    }
    trimmed.split(':').next()
}

/// Classify a document by the first recognized marker tag.
///
/// Scans in order; the earliest marker decides (a document carrying both
/// kinds is classified by whichever appears first). `None` when no marker is
/// found, including for empty input.
pub fn classify(lines: &[String]) -> Option<PlaylistKind> {
    for line in lines {
        match line_tag(line) {
            Some(STREAM_INF_TAG) => return Some(PlaylistKind::Master),
            Some(EXTINF_TAG) => return Some(PlaylistKind::Media),
            _ => {}
        }
    }
    None
}
