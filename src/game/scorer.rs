use crate::models::WordCandidate;

/// Points awarded per letter of an accepted word
pub const POINTS_PER_LETTER: u32 = 10;

pub struct Scorer;

impl Scorer {
    /// Score for a single accepted word.
    ///
    /// Every letter is worth the same; there are no letter values or board
    /// multipliers in this game.
    pub fn word_score(word: &str) -> u32 {
        word.chars().count() as u32 * POINTS_PER_LETTER
    }

    /// Total score for a fully accepted round
    pub fn round_score(words: &[WordCandidate]) -> u32 {
        words.iter().map(|c| Self::word_score(&c.word)).sum()
    }
}
