//! Playlist data model.

use url::Url;

/// Anything produced by the factory is a playlist: master or media.
#[derive(Debug, Clone)]
pub enum Playlist {
    Master(MasterPlaylist),
    Media(MediaPlaylist),
}

impl Playlist {
    /// Source URL the playlist was built from.
    pub fn url(&self) -> &Url {
        match self {
            Playlist::Master(p) => &p.url,
            Playlist::Media(p) => &p.url,
        }
    }

    /// Raw content lines snapshotted at construction.
    pub fn lines(&self) -> &[String] {
        match self {
            Playlist::Master(p) => &p.lines,
            Playlist::Media(p) => &p.lines,
        }
    }

    pub fn as_master(&self) -> Option<&MasterPlaylist> {
        match self {
            Playlist::Master(p) => Some(p),
            Playlist::Media(_) => None,
        }
    }

    pub fn as_media(&self) -> Option<&MediaPlaylist> {
        match self {
            Playlist::Media(p) => Some(p),
            Playlist::Master(_) => None,
        }
    }
}

/// A master playlist: raw content, source URL, and the variant playlists
/// that resolved successfully, in document order.
///
/// Variants that failed to fetch are absent here; they surface only as
/// diagnostics. An empty variant list is a valid master playlist.
#[derive(Debug, Clone)]
pub struct MasterPlaylist {
    pub url: Url,
    pub lines: Vec<String>,
    pub variants: Vec<MediaPlaylist>,
}

/// A media playlist: raw content and source URL.
#[derive(Debug, Clone)]
pub struct MediaPlaylist {
    pub url: Url,
    pub lines: Vec<String>,
}
