use serde::Serialize;

use crate::{
    dictionary::Dictionary,
    error::RoundError,
    game::{WordExtractor, WordValidator},
    models::{LetterGrid, NewlyPlaced, WordCandidate},
};

/// A confirmed turn in which every word was found in the dictionary
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AcceptedRound {
    pub words: Vec<WordCandidate>,
    pub score_delta: u32,
}

/// Evaluate one confirm-word action against the current board.
///
/// Nothing is extracted when no tiles were placed, and an empty dictionary is
/// reported as unavailable rather than as a rejection of every word.
pub fn evaluate_round<G: LetterGrid + ?Sized>(
    grid: &G,
    placed: &NewlyPlaced,
    dictionary: &Dictionary,
) -> Result<AcceptedRound, RoundError> {
    if placed.is_empty() {
        return Err(RoundError::NoTilesPlaced);
    }
    if dictionary.is_empty() {
        return Err(RoundError::DictionaryUnavailable);
    }

    let candidates = WordExtractor::extract(grid, placed);
    if candidates.is_empty() {
        return Err(RoundError::NoWordsFormed);
    }

    let validation = WordValidator::new(dictionary).validate(candidates);
    if !validation.is_accepted() {
        tracing::debug!(
            "Round rejected: {} of {} words unknown",
            validation.rejected.len(),
            validation.rejected.len() + validation.accepted.len()
        );
        return Err(RoundError::DictionaryRejection {
            accepted: validation.accepted,
            rejected: validation.rejected,
        });
    }

    Ok(AcceptedRound {
        words: validation.accepted,
        score_delta: validation.score_delta,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Board, Position};

    fn kwan_board() -> Board {
        Board::from_rows(&["....", "kwan", "....", "...."]).unwrap()
    }

    fn placed(positions: &[(usize, usize)]) -> NewlyPlaced {
        positions.iter().map(|&(r, c)| Position::new(r, c)).collect()
    }

    #[test]
    fn test_kwan_accepted() {
        let dict = Dictionary::from_words(["kwan"]);
        let round = evaluate_round(&kwan_board(), &placed(&[(1, 0), (1, 2)]), &dict).unwrap();

        assert_eq!(round.words.len(), 1);
        assert_eq!(round.words[0].word, "kwan");
        assert_eq!(round.score_delta, 40);
    }

    #[test]
    fn test_kwan_rejected_flags_whole_word() {
        let dict = Dictionary::from_words(["nsu"]);
        let err = evaluate_round(&kwan_board(), &placed(&[(1, 0), (1, 2)]), &dict).unwrap_err();

        assert!(matches!(err, RoundError::DictionaryRejection { .. }));
        assert_eq!(
            err.flagged_positions(),
            (0..4).map(|col| Position::new(1, col)).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_no_tiles_placed() {
        let dict = Dictionary::from_words(["kwan"]);
        let err = evaluate_round(&kwan_board(), &NewlyPlaced::new(), &dict).unwrap_err();
        assert_eq!(err, RoundError::NoTilesPlaced);
    }

    #[test]
    fn test_no_words_formed() {
        let board = Board::from_rows(&["a..", "...", "..."]).unwrap();
        let dict = Dictionary::from_words(["kwan"]);
        let err = evaluate_round(&board, &placed(&[(0, 0)]), &dict).unwrap_err();
        assert_eq!(err, RoundError::NoWordsFormed);
    }

    #[test]
    fn test_missing_dictionary_is_reported_separately() {
        let err = evaluate_round(&kwan_board(), &placed(&[(1, 0)]), &Dictionary::empty()).unwrap_err();
        assert_eq!(err, RoundError::DictionaryUnavailable);
    }

    #[test]
    fn test_no_tiles_checked_before_dictionary() {
        let err = evaluate_round(&kwan_board(), &NewlyPlaced::new(), &Dictionary::empty()).unwrap_err();
        assert_eq!(err, RoundError::NoTilesPlaced);
    }

    #[test]
    fn test_partial_validity_scores_nothing() {
        // "nsu" is valid, the crossing "ana" is not
        let board = Board::from_rows(&[
            ".....",
            "ana..",
            ".s...",
            ".u...",
            ".....",
        ])
        .unwrap();
        let dict = Dictionary::from_words(["nsu"]);
        let err = evaluate_round(&board, &placed(&[(1, 1)]), &dict).unwrap_err();

        let RoundError::DictionaryRejection { accepted, rejected } = err else {
            panic!("expected a dictionary rejection");
        };
        assert_eq!(accepted[0].word, "nsu");
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].word, "ana");
    }
}
