/// Errors raised while loading the request list or resolving configuration.
#[derive(Debug, thiserror::Error)]
pub enum InboxError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to read request fixture {path}: {source}", path = path.display())]
    FixtureRead {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse request fixture: {0}")]
    FixtureParse(serde_json::Error),
    #[error("duplicate request id in fixture: {0}")]
    DuplicateRequestId(String),
}

pub type InboxResult<T> = std::result::Result<T, InboxError>;

/// Failures surfaced by a [`crate::RequestSource`].
///
/// "Not found" is not an error: sources report it as `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },
    #[error("failed to decode response: {0}")]
    Decode(String),
}

pub type SourceResult<T> = std::result::Result<T, SourceError>;
