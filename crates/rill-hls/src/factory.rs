//! Playlist construction entry point.

use rill_net::{Headers, Net};
use tracing::{debug, info};
use url::Url;

use crate::{
    classify::{classify, PlaylistKind},
    diag::{Diagnostic, Diagnostics, Severity},
    error::{HlsError, HlsResult},
    playlist::{MasterPlaylist, MediaPlaylist, Playlist},
    resolve::VariantResolver,
};

/// Builds [`Playlist`] values from raw manifest content.
///
/// Stateless and freely cloneable; one instance can serve any number of
/// concurrent `create`/`load` calls.
#[derive(Clone)]
pub struct PlaylistFactory<N> {
    resolver: VariantResolver<N>,
}

impl<N: Net> PlaylistFactory<N> {
    pub fn new(net: N) -> Self {
        Self {
            resolver: VariantResolver::new(net),
        }
    }

    /// Set additional HTTP headers for all fetches.
    #[must_use]
    pub fn with_headers(mut self, headers: Option<Headers>) -> Self {
        self.resolver = self.resolver.with_headers(headers);
        self
    }

    /// Build the playlist for `url` from its raw content lines.
    ///
    /// Master playlists get their variant references resolved through the
    /// fetch collaborator first; per-variant failures land in `diags`, not
    /// in the returned error. An unclassifiable document yields
    /// [`HlsError::UnrecognizedFormat`] alongside a recorded diagnostic.
    pub async fn create(
        &self,
        url: &Url,
        lines: &[String],
        diags: &mut Diagnostics,
    ) -> HlsResult<Playlist> {
        debug!(url = %url, lines = lines.len(), "classifying playlist");

        match classify(lines) {
            Some(PlaylistKind::Master) => {
                let variants = self.resolver.resolve_variants(url, lines, diags).await;
                info!(url = %url, variants = variants.len(), "created master playlist");
                Ok(Playlist::Master(MasterPlaylist {
                    url: url.clone(),
                    lines: lines.to_vec(),
                    variants,
                }))
            }
            Some(PlaylistKind::Media) => {
                info!(url = %url, "created media playlist");
                Ok(Playlist::Media(MediaPlaylist {
                    url: url.clone(),
                    lines: lines.to_vec(),
                }))
            }
            None => {
                diags.record(Diagnostic::new(
                    Severity::Error,
                    0,
                    format!("unrecognized playlist format at {url}"),
                ));
                Err(HlsError::UnrecognizedFormat(url.to_string()))
            }
        }
    }

    /// Fetch the document at `url` and build its playlist.
    ///
    /// Unlike per-variant failures, a failure to read the top-level document
    /// itself propagates as `Err`.
    pub async fn load(&self, url: &Url, diags: &mut Diagnostics) -> HlsResult<Playlist> {
        debug!(url = %url, "loading playlist document");
        let lines = self.resolver.fetch_lines(url).await?;
        self.create(url, &lines, diags).await
    }
}
