//! Shared data model and configuration for the tweetpulse pipeline.
//!
//! Holds the `Post`/`ScoredPost` records that flow between stages, the
//! `SentimentLabel` threshold rule, and the validated `PipelineConfig`
//! passed into each stage.

pub mod config;
pub mod types;

pub use config::{ConfigError, PipelineConfig};
pub use types::{MalformedTextPolicy, Post, ScoredPost, SentimentLabel};
