//! Polarity scoring and per-post policy application.

use tweetpulse_core::{MalformedTextPolicy, Post, ScoredPost, SentimentLabel};

use crate::error::SentimentError;
use crate::lexicon::LEXICON;

/// Score a text string against the lexicon.
///
/// Splits on whitespace, trims non-alphabetic edges, lowercases, sums the
/// matching weights, and clamps the result to `[-1.0, 1.0]`. Empty or
/// unknown text scores `0.0`. Deterministic for a given lexicon.
///
/// # Errors
///
/// Returns [`SentimentError::MalformedText`] when the text contains U+FFFD
/// replacement characters.
pub fn polarity(text: &str) -> Result<f32, SentimentError> {
    if text.contains('\u{FFFD}') {
        return Err(SentimentError::MalformedText);
    }

    let mut score = 0.0_f32;
    for word in text.split_whitespace() {
        let w = word
            .trim_matches(|c: char| !c.is_alphabetic())
            .to_lowercase();
        for &(lex_word, weight) in LEXICON {
            if w == lex_word {
                score += weight;
                break;
            }
        }
    }
    Ok(score.clamp(-1.0, 1.0))
}

/// Score a batch of posts, applying `policy` to any post whose text fails
/// scoring. Output order matches input order; under
/// [`MalformedTextPolicy::Skip`] failed posts are dropped.
///
/// # Errors
///
/// Returns [`SentimentError`] only under [`MalformedTextPolicy::Abort`].
pub fn score_posts(
    posts: Vec<Post>,
    policy: MalformedTextPolicy,
) -> Result<Vec<ScoredPost>, SentimentError> {
    let mut scored = Vec::with_capacity(posts.len());

    for post in posts {
        match polarity(&post.text) {
            Ok(p) => {
                let label = SentimentLabel::from_polarity(p);
                scored.push(ScoredPost {
                    post,
                    polarity: p,
                    label,
                });
            }
            Err(err) => match policy {
                MalformedTextPolicy::NeutralDefault => {
                    tracing::warn!(post_id = %post.id, error = %err, "scoring failed — defaulting to neutral");
                    scored.push(ScoredPost {
                        post,
                        polarity: 0.0,
                        label: SentimentLabel::Neutral,
                    });
                }
                MalformedTextPolicy::Skip => {
                    tracing::warn!(post_id = %post.id, error = %err, "scoring failed — skipping post");
                }
                MalformedTextPolicy::Abort => return Err(err),
            },
        }
    }

    Ok(scored)
}
