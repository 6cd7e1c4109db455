use crate::{dictionary::Dictionary, game::Scorer, models::WordCandidate};

/// Outcome of checking a turn's words against the dictionary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    pub accepted: Vec<WordCandidate>,
    pub rejected: Vec<WordCandidate>,
    /// Zero unless every word was accepted
    pub score_delta: u32,
}

impl Validation {
    pub fn is_accepted(&self) -> bool {
        self.rejected.is_empty()
    }
}

pub struct WordValidator<'a> {
    dictionary: &'a Dictionary,
}

impl<'a> WordValidator<'a> {
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self { dictionary }
    }

    /// Check if word exists in dictionary
    pub fn is_valid_word(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    /// Split candidates into accepted and rejected words.
    ///
    /// Scoring is all-or-nothing: a single unknown word voids the score of the
    /// whole turn, including the words that were found.
    pub fn validate(&self, candidates: Vec<WordCandidate>) -> Validation {
        let (accepted, rejected): (Vec<_>, Vec<_>) = candidates
            .into_iter()
            .partition(|c| self.is_valid_word(&c.word));

        let score_delta = if rejected.is_empty() {
            Scorer::round_score(&accepted)
        } else {
            0
        };

        Validation {
            accepted,
            rejected,
            score_delta,
        }
    }
}
