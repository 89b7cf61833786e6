use thiserror::Error;

/// Errors returned by the recent-search client.
#[derive(Debug, Error)]
pub enum TwitterError {
    /// The API rejected the bearer token (HTTP 401 or 403).
    #[error("authentication failed (HTTP {status}): check the bearer token")]
    Authentication { status: u16 },

    /// The API signalled throttling (HTTP 429).
    #[error("rate limited by the search API{}", retry_after_hint(retry_after_secs))]
    RateLimited { retry_after_secs: Option<u64> },

    /// Any other non-2xx status.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL is not parseable.
    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

/// Suffix for the rate-limit message when the API sent a `retry-after`.
fn retry_after_hint(secs: &Option<u64>) -> String {
    match secs {
        Some(s) => format!(" (retry after {s}s)"),
        None => String::new(),
    }
}
