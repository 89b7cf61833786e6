//! Validated pipeline configuration.
//!
//! The CLI parses flags and env vars, builds a [`PipelineConfig`], and calls
//! [`PipelineConfig::validate`] before any stage runs. Each stage receives the
//! config (or the slice of it that it needs) explicitly; there is no ambient
//! global state.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::MalformedTextPolicy;

/// The recent-search endpoint caps a single page at 100 results.
pub const MAX_RESULT_COUNT: u32 = 100;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required option: {0}")]
    Missing(&'static str),

    #[error("invalid value for {option}: {reason}")]
    Invalid {
        option: &'static str,
        reason: String,
    },
}

/// Everything one pipeline run needs, assembled up front.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Search keyword (non-empty).
    pub keyword: String,
    /// Maximum number of posts to fetch, `1..=100`.
    pub count: u32,
    /// API bearer token.
    pub bearer_token: String,
    /// Destination path for the CSV report.
    pub out_path: PathBuf,
    /// Upload destination bucket; `None` disables the archival stage.
    pub bucket: Option<String>,
    /// Object key for the upload; defaults to a timestamped key when unset.
    pub object_key: Option<String>,
    /// Object-store region for request signing.
    pub region: String,
    /// Policy for posts whose text fails scoring.
    pub on_malformed: MalformedTextPolicy,
}

impl PipelineConfig {
    /// Checks cross-field constraints the CLI parser cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the keyword or bearer token is blank, the
    /// count is outside `1..=100`, or an object key is given without a bucket.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.keyword.trim().is_empty() {
            return Err(ConfigError::Missing("keyword"));
        }
        if self.bearer_token.trim().is_empty() {
            return Err(ConfigError::Missing("bearer-token"));
        }
        if self.count == 0 || self.count > MAX_RESULT_COUNT {
            return Err(ConfigError::Invalid {
                option: "count",
                reason: format!(
                    "must be between 1 and {MAX_RESULT_COUNT}, got {}",
                    self.count
                ),
            });
        }
        if self.object_key.is_some() && self.bucket.is_none() {
            return Err(ConfigError::Invalid {
                option: "object-key",
                reason: "an object key requires a bucket".to_string(),
            });
        }
        Ok(())
    }
}
