use thiserror::Error;

/// Playlist pipeline errors.
#[derive(Debug, Error)]
pub enum HlsError {
    #[error("Network error: {0}")]
    Net(#[from] rill_net::NetError),

    #[error("Unrecognized playlist format: {0}")]
    UnrecognizedFormat(String),

    #[error("Playlist is not valid UTF-8: {0}")]
    InvalidEncoding(String),
}

pub type HlsResult<T> = Result<T, HlsError>;
