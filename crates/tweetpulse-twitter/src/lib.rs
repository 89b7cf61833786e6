//! Bearer-token client for the Twitter/X v2 recent-search endpoint.
//!
//! Wraps `reqwest` with typed error handling for the status codes the
//! pipeline cares about (401/403 auth failures, 429 throttling) and maps the
//! wire payload into [`tweetpulse_core::Post`] records with author handles
//! resolved from the `includes.users` expansion.

pub mod client;
pub mod error;
pub mod types;

pub use client::TwitterClient;
pub use error::TwitterError;
