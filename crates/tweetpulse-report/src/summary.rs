//! Per-label counts for the trailing report summary.

use tweetpulse_core::{ScoredPost, SentimentLabel};

/// Counts per sentiment label. The counts always sum to the number of rows
/// tallied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl LabelCounts {
    /// Tally the labels of a scored batch.
    #[must_use]
    pub fn tally(scored: &[ScoredPost]) -> Self {
        let mut counts = Self::default();
        for record in scored {
            match record.label {
                SentimentLabel::Positive => counts.positive += 1,
                SentimentLabel::Negative => counts.negative += 1,
                SentimentLabel::Neutral => counts.neutral += 1,
            }
        }
        counts
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

impl std::fmt::Display for LabelCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "positive:{},negative:{},neutral:{}",
            self.positive, self.negative, self.neutral
        )
    }
}
