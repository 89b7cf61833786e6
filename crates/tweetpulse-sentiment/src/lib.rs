//! Lexicon polarity scorer for the tweetpulse pipeline.
//!
//! Scores raw post text against a general-purpose word lexicon, labels the
//! result with the fixed threshold rule, and applies the configured policy
//! for text that cannot be scored.

pub mod error;
pub mod scorer;

mod lexicon;

pub use error::SentimentError;
pub use scorer::{polarity, score_posts};
