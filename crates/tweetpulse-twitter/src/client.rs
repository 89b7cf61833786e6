//! HTTP client for the v2 `tweets/search/recent` endpoint.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::header::RETRY_AFTER;
use reqwest::{Client, StatusCode, Url};

use tweetpulse_core::Post;

use crate::error::TwitterError;
use crate::types::SearchResponse;

const DEFAULT_BASE_URL: &str = "https://api.twitter.com/";
const SEARCH_PATH: &str = "2/tweets/search/recent";

/// The endpoint rejects `max_results` outside `[10, 100]`.
const MIN_PAGE_SIZE: u32 = 10;
const MAX_PAGE_SIZE: u32 = 100;

/// Client for the recent-search endpoint.
///
/// Use [`TwitterClient::new`] for production or
/// [`TwitterClient::with_base_url`] to point at a mock server in tests.
pub struct TwitterClient {
    client: Client,
    bearer_token: String,
    base_url: Url,
}

impl TwitterClient {
    /// Creates a client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`TwitterError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(bearer_token: &str, timeout_secs: u64) -> Result<Self, TwitterError> {
        Self::with_base_url(bearer_token, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`TwitterError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`TwitterError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        bearer_token: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, TwitterError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("tweetpulse/0.1 (keyword-sentiment)")
            .build()?;

        // Normalise: exactly one trailing slash so `join` appends the search
        // path instead of replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| TwitterError::InvalidBaseUrl {
            base_url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            bearer_token: bearer_token.to_owned(),
            base_url,
        })
    }

    /// Fetches up to `count` recent posts matching `keyword`.
    ///
    /// The query is narrowed to English originals (`lang:en -is:retweet`).
    /// The endpoint enforces a page size of `[10, 100]`, so the request asks
    /// for `count.clamp(10, 100)` and the decoded list is truncated back to
    /// `count`. Posts come back in the API's order (reverse chronological).
    ///
    /// # Errors
    ///
    /// - [`TwitterError::Authentication`] — HTTP 401/403.
    /// - [`TwitterError::RateLimited`] — HTTP 429.
    /// - [`TwitterError::UnexpectedStatus`] — any other non-2xx status.
    /// - [`TwitterError::Http`] — network or TLS failure.
    /// - [`TwitterError::Deserialize`] — body does not match the expected shape.
    pub async fn search_recent(
        &self,
        keyword: &str,
        count: u32,
    ) -> Result<Vec<Post>, TwitterError> {
        let url = self.build_search_url(keyword, count);

        let response = self
            .client
            .get(url.clone())
            .bearer_auth(&self.bearer_token)
            .send()
            .await?;

        let status = response.status();
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(TwitterError::Authentication {
                    status: status.as_u16(),
                });
            }
            StatusCode::TOO_MANY_REQUESTS => {
                let retry_after_secs = response
                    .headers()
                    .get(RETRY_AFTER)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok());
                return Err(TwitterError::RateLimited { retry_after_secs });
            }
            s if !s.is_success() => {
                return Err(TwitterError::UnexpectedStatus {
                    status: s.as_u16(),
                    url: url.to_string(),
                });
            }
            _ => {}
        }

        let body = response.text().await?;
        let envelope: SearchResponse =
            serde_json::from_str(&body).map_err(|e| TwitterError::Deserialize {
                context: format!("search_recent(keyword={keyword})"),
                source: e,
            })?;

        let handles: HashMap<String, String> = envelope
            .includes
            .users
            .into_iter()
            .map(|u| (u.id, u.username))
            .collect();

        let mut posts: Vec<Post> = envelope
            .data
            .into_iter()
            .map(|tweet| {
                let author = tweet
                    .author_id
                    .as_ref()
                    .and_then(|id| handles.get(id).cloned())
                    .or(tweet.author_id)
                    .unwrap_or_default();
                Post {
                    id: tweet.id,
                    author,
                    text: tweet.text,
                    created_at: tweet.created_at,
                }
            })
            .collect();
        posts.truncate(count as usize);

        tracing::debug!(keyword, requested = count, fetched = posts.len(), "search complete");
        Ok(posts)
    }

    /// Builds the search URL with percent-encoded query parameters.
    fn build_search_url(&self, keyword: &str, count: u32) -> Url {
        // `join` cannot fail here: base_url is normalised with a trailing
        // slash and SEARCH_PATH is a constant relative path.
        let mut url = self
            .base_url
            .join(SEARCH_PATH)
            .unwrap_or_else(|_| self.base_url.clone());
        let page_size = count.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE);
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("query", &format!("{keyword} lang:en -is:retweet"));
            pairs.append_pair("max_results", &page_size.to_string());
            pairs.append_pair("tweet.fields", "created_at,author_id");
            pairs.append_pair("expansions", "author_id");
            pairs.append_pair("user.fields", "username");
        }
        url
    }
}
