#![forbid(unsafe_code)]

//! HLS playlist classification and construction.
//!
//! Given the raw lines of an M3U8 manifest, [`PlaylistFactory`] decides
//! whether it is a master or media playlist, resolves the variant playlists a
//! master references (fetching each through a [`rill_net::Net`]
//! collaborator), and returns the assembled [`Playlist`]. Failures below the
//! top-level call are absorbed into a [`Diagnostics`] collector rather than
//! propagated.

pub mod classify;
pub mod diag;
pub mod error;
pub mod factory;
pub mod playlist;
pub mod resolve;

pub use classify::{classify, PlaylistKind};
pub use diag::{Diagnostic, Diagnostics, Severity};
pub use error::{HlsError, HlsResult};
pub use factory::PlaylistFactory;
pub use playlist::{MasterPlaylist, MediaPlaylist, Playlist};
