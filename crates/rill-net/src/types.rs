use std::{collections::HashMap, time::Duration};

/// Case-preserving request header map.
#[derive(Clone, Debug, PartialEq)]
pub struct Headers {
    inner: HashMap<String, String>,
}

impl Headers {
    pub fn new() -> Self {
        Self {
            inner: HashMap::new(),
        }
    }

    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.inner.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Default for Headers {
    fn default() -> Self {
        Self::new()
    }
}

impl From<HashMap<String, String>> for Headers {
    fn from(map: HashMap<String, String>) -> Self {
        Self { inner: map }
    }
}

#[derive(Clone, Debug)]
pub struct NetOptions {
    /// Per-request timeout applied by [`crate::HttpClient`].
    pub request_timeout: Duration,
    /// Max idle connections per host. Set to 0 to disable pooling.
    pub pool_max_idle_per_host: usize,
}

impl Default for NetOptions {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            pool_max_idle_per_host: 0,
        }
    }
}

impl NetOptions {
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_pool_max_idle_per_host(mut self, max: usize) -> Self {
        self.pool_max_idle_per_host = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;

    #[rstest]
    #[case::empty(Headers::new(), true)]
    #[case::populated(
        {
            let mut h = Headers::new();
            h.insert("Accept", "application/vnd.apple.mpegurl");
            h
        },
        false
    )]
    fn headers_is_empty(#[case] headers: Headers, #[case] expected: bool) {
        assert_eq!(headers.is_empty(), expected);
    }

    #[rstest]
    fn headers_insert_and_get() {
        let mut headers = Headers::new();
        headers.insert("Authorization", "Bearer token");

        assert_eq!(headers.get("Authorization"), Some("Bearer token"));
        assert_eq!(headers.get("authorization"), None);
    }

    #[rstest]
    fn headers_from_map() {
        let mut map = HashMap::new();
        map.insert("User-Agent".to_string(), "rill".to_string());
        let headers = Headers::from(map);

        assert_eq!(headers.get("User-Agent"), Some("rill"));
        assert_eq!(headers.iter().count(), 1);
    }

    #[rstest]
    fn net_options_builders() {
        let opts = NetOptions::default()
            .with_request_timeout(Duration::from_secs(5))
            .with_pool_max_idle_per_host(4);

        assert_eq!(opts.request_timeout, Duration::from_secs(5));
        assert_eq!(opts.pool_max_idle_per_host, 4);
    }
}
