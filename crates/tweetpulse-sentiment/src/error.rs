use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    /// The text carries U+FFFD replacement characters, the residue of a
    /// lossy decode upstream. Scoring such text would be meaningless.
    #[error("malformed text: contains U+FFFD replacement characters")]
    MalformedText,
}
