use thiserror::Error;

/// Errors returned by the object-store uploader.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// Required credential env vars are not set.
    #[error("missing object-store credentials: {0}")]
    MissingCredentials(String),

    /// The local report file could not be read.
    #[error("I/O error reading upload source: {0}")]
    Io(#[from] std::io::Error),

    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The bucket does not exist (HTTP 404).
    #[error("bucket \"{bucket}\" not found")]
    NotFound { bucket: String },

    /// The credentials were rejected for this bucket (HTTP 403).
    #[error("permission denied uploading to bucket \"{bucket}\"")]
    Permission { bucket: String },

    /// Any other non-2xx status from the store.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The configured endpoint is not a usable URL.
    #[error("invalid endpoint \"{endpoint}\": {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}
