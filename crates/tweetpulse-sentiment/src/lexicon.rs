//! General-purpose sentiment word weights.

/// Word weights for everyday evaluative vocabulary.
///
/// Keys are lowercase single words. Values in `(0.0, 1.0]` are positive,
/// in `[-1.0, 0.0)` negative. The summed score is clamped to `[-1.0, 1.0]`.
pub(crate) const LEXICON: &[(&str, f32)] = &[
    // Positive
    ("love", 0.5),
    ("loved", 0.5),
    ("loves", 0.5),
    ("great", 0.4),
    ("good", 0.3),
    ("excellent", 0.5),
    ("amazing", 0.5),
    ("awesome", 0.5),
    ("wonderful", 0.5),
    ("fantastic", 0.5),
    ("best", 0.5),
    ("happy", 0.4),
    ("glad", 0.3),
    ("beautiful", 0.4),
    ("perfect", 0.5),
    ("nice", 0.3),
    ("cool", 0.3),
    ("fun", 0.3),
    ("enjoy", 0.4),
    ("enjoyed", 0.4),
    ("recommend", 0.4),
    ("impressive", 0.4),
    ("brilliant", 0.5),
    ("solid", 0.3),
    ("fast", 0.2),
    ("reliable", 0.3),
    ("win", 0.4),
    ("winning", 0.4),
    ("thanks", 0.2),
    ("thank", 0.2),
    // Negative
    ("hate", -0.8),
    ("hated", -0.8),
    ("hates", -0.8),
    ("terrible", -0.6),
    ("awful", -0.6),
    ("horrible", -0.6),
    ("worst", -0.6),
    ("bad", -0.4),
    ("poor", -0.4),
    ("broken", -0.4),
    ("slow", -0.2),
    ("bug", -0.3),
    ("buggy", -0.4),
    ("crash", -0.5),
    ("crashed", -0.5),
    ("fail", -0.4),
    ("failed", -0.4),
    ("failure", -0.4),
    ("disappointing", -0.5),
    ("disappointed", -0.5),
    ("useless", -0.5),
    ("annoying", -0.4),
    ("garbage", -0.6),
    ("scam", -0.7),
    ("wrong", -0.3),
    ("problem", -0.3),
    ("problems", -0.3),
    ("angry", -0.5),
    ("sad", -0.4),
    ("ugly", -0.4),
];
