use chrono::{DateTime, Utc};

/// A single post returned by the search API. Immutable once fetched.
#[derive(Debug, Clone)]
pub struct Post {
    /// The API's opaque post identifier.
    pub id: String,
    /// Author handle, or the raw author id when the handle expansion
    /// was absent from the response.
    pub author: String,
    /// Raw post text.
    pub text: String,
    /// Creation timestamp; `None` when the API omits `created_at`.
    pub created_at: Option<DateTime<Utc>>,
}

/// Discrete sentiment class derived from a polarity value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Fixed threshold rule: positive above zero, negative below, neutral at
    /// exactly zero.
    #[must_use]
    pub fn from_polarity(polarity: f32) -> Self {
        if polarity > 0.0 {
            Self::Positive
        } else if polarity < 0.0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A [`Post`] with its sentiment polarity and label. Derivation only appends
/// fields; the underlying post is never mutated.
#[derive(Debug, Clone)]
pub struct ScoredPost {
    pub post: Post,
    /// Polarity in `[-1.0, 1.0]`.
    pub polarity: f32,
    pub label: SentimentLabel,
}

/// What to do when a post's text cannot be scored (lossy-decode residue).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedTextPolicy {
    /// Keep the record with polarity `0.0` / neutral and log a warning.
    #[default]
    NeutralDefault,
    /// Drop the record and log a warning.
    Skip,
    /// Fail the whole run.
    Abort,
}
