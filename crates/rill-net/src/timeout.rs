use async_trait::async_trait;
use std::time::Duration;

use crate::error::NetError;
use crate::traits::Net;
use crate::types::Headers;

/// Timeout decorator for [`Net`] implementations.
///
/// Bounds a hung fetch at the collaborator, so downstream policy code never
/// has to carry its own timers.
pub struct TimeoutNet<N> {
    inner: N,
    timeout: Duration,
}

impl<N: Net> TimeoutNet<N> {
    pub fn new(inner: N, timeout: Duration) -> Self {
        Self { inner, timeout }
    }
}

#[async_trait]
impl<N: Net> Net for TimeoutNet<N> {
    async fn get_bytes(
        &self,
        url: url::Url,
        headers: Option<Headers>,
    ) -> Result<bytes::Bytes, NetError> {
        tokio::time::timeout(self.timeout, self.inner.get_bytes(url, headers))
            .await
            .map_err(|_| NetError::timeout())?
    }
}
