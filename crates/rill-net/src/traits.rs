use async_trait::async_trait;
use bytes::Bytes;
use std::time::Duration;
use url::Url;

use crate::error::NetError;
use crate::timeout::TimeoutNet;
use crate::types::Headers;

/// Content fetcher seam.
///
/// Failure is always an `Err` value crossing this boundary, never a panic,
/// so callers can apply their own skip-and-record policies.
#[cfg_attr(feature = "mock", unimock::unimock(api = NetMock))]
#[async_trait]
pub trait Net: Send + Sync {
    /// Get all bytes from a URL.
    async fn get_bytes(&self, url: Url, headers: Option<Headers>) -> Result<Bytes, NetError>;
}

pub trait NetExt: Net + Sized {
    /// Add timeout layer.
    fn with_timeout(self, timeout: Duration) -> TimeoutNet<Self> {
        TimeoutNet::new(self, timeout)
    }
}

impl<T: Net> NetExt for T {}
