//! Master-to-variant resolution.

use std::fmt;

use futures::future::join_all;
use rill_net::{Headers, Net};
use tracing::{debug, error, info};
use url::Url;

use crate::{
    diag::{Diagnostic, Diagnostics, Severity},
    error::{HlsError, HlsResult},
    playlist::MediaPlaylist,
};

/// File extension a variant reference line ends with.
const PLAYLIST_SUFFIX: &str = ".m3u8";

/// Truncate a URL string after the final path separator, inclusive.
/// No separator yields the empty string.
pub fn base_path(url: &str) -> &str {
    match url.rfind('/') {
        Some(idx) => &url[..=idx],
        None => "",
    }
}

/// Whether a line is treated as a variant playlist reference.
///
/// Purely suffix-based, as the manifests in the wild this was built for use
/// bare relative filenames. Kept behind this one predicate so tag-aware
/// detection can replace it without touching resolution.
pub fn is_variant_reference(line: &str) -> bool {
    line.trim().ends_with(PLAYLIST_SUFFIX)
}

/// Why one variant reference failed to resolve. Never propagated; turned
/// into an `Error`-severity diagnostic at the join point.
#[derive(Debug)]
enum VariantFailure {
    BadReference(url::ParseError),
    Unreadable(HlsError),
    Empty,
}

impl fmt::Display for VariantFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariantFailure::BadReference(e) => write!(f, "reference is not a valid URL: {e}"),
            VariantFailure::Unreadable(e) => write!(f, "read failed: {e}"),
            VariantFailure::Empty => write!(f, "fetched content was empty"),
        }
    }
}

/// Resolves the variant playlists a master playlist references.
///
/// Individual variant failures are absorbed (recorded, skipped); they never
/// fail the surrounding master construction.
#[derive(Clone)]
pub struct VariantResolver<N> {
    net: N,
    headers: Option<Headers>,
}

impl<N: Net> VariantResolver<N> {
    pub fn new(net: N) -> Self {
        Self { net, headers: None }
    }

    /// Set additional HTTP headers for all fetches.
    #[must_use]
    pub fn with_headers(mut self, headers: Option<Headers>) -> Self {
        self.headers = headers;
        self
    }

    /// Fetch a playlist document and split it into lines.
    pub(crate) async fn fetch_lines(&self, url: &Url) -> HlsResult<Vec<String>> {
        let bytes = self.net.get_bytes(url.clone(), self.headers.clone()).await?;
        let text = std::str::from_utf8(&bytes)
            .map_err(|e| HlsError::InvalidEncoding(e.to_string()))?;
        Ok(text.lines().map(str::to_string).collect())
    }

    /// Resolve every variant reference in `lines`, in document order.
    ///
    /// Fetches fan out concurrently; results are joined back in reference
    /// order, so the returned sequence matches the document regardless of
    /// fetch latency. May be empty.
    pub async fn resolve_variants(
        &self,
        master_url: &Url,
        lines: &[String],
        diags: &mut Diagnostics,
    ) -> Vec<MediaPlaylist> {
        let base = base_path(master_url.as_str());
        debug!(url = %master_url, base, "resolving variant references");

        // (1-based line number, trimmed reference)
        let references: Vec<(usize, &str)> = lines
            .iter()
            .enumerate()
            .filter(|(_, line)| is_variant_reference(line))
            .map(|(idx, line)| (idx + 1, line.trim()))
            .collect();

        let outcomes = join_all(
            references
                .iter()
                .map(|&(_, reference)| self.fetch_variant(base, reference)),
        )
        .await;

        let mut variants = Vec::with_capacity(references.len());
        for ((line, reference), outcome) in references.into_iter().zip(outcomes) {
            match outcome {
                Ok(variant) => {
                    info!(url = %variant.url, "added variant playlist");
                    variants.push(variant);
                }
                Err(failure) => {
                    error!(line, reference, %failure, "variant playlist dropped");
                    diags.record(Diagnostic::new(
                        Severity::Error,
                        line,
                        format!("variant '{reference}' dropped: {failure}"),
                    ));
                }
            }
        }

        variants
    }

    async fn fetch_variant(
        &self,
        base: &str,
        reference: &str,
    ) -> Result<MediaPlaylist, VariantFailure> {
        let absolute = format!("{base}{reference}");
        let url = Url::parse(&absolute).map_err(VariantFailure::BadReference)?;

        let lines = self
            .fetch_lines(&url)
            .await
            .map_err(VariantFailure::Unreadable)?;
        if lines.is_empty() {
            return Err(VariantFailure::Empty);
        }

        // Anything a master references is assumed to be a media playlist;
        // variants are not re-classified.
        Ok(MediaPlaylist { url, lines })
    }
}
