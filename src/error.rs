use thiserror::Error;

use crate::models::{Position, WordCandidate};

/// A board snapshot that cannot be played on
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("board has no rows")]
    Empty,
    #[error("board row {row} has {len} cells, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },
    #[error("cell ({row}, {col}) must hold a single letter")]
    NotALetter { row: usize, col: usize },
}

/// Why a confirmed turn did not score
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoundError {
    #[error("Place new tiles first")]
    NoTilesPlaced,
    #[error("No valid words formed")]
    NoWordsFormed,
    #[error("Not in the dictionary: {}", rejected_list(.rejected))]
    DictionaryRejection {
        /// Words of the same turn that were found, but score nothing
        accepted: Vec<WordCandidate>,
        rejected: Vec<WordCandidate>,
    },
    /// The word list never loaded, so nothing can be checked
    #[error("Dictionary is not available, words cannot be checked")]
    DictionaryUnavailable,
}

impl RoundError {
    /// Cells the caller should highlight as wrong, without duplicates
    pub fn flagged_positions(&self) -> Vec<Position> {
        let RoundError::DictionaryRejection { rejected, .. } = self else {
            return Vec::new();
        };

        let mut flagged: Vec<Position> = Vec::new();
        for pos in rejected.iter().flat_map(|c| c.positions.iter()) {
            if !flagged.contains(pos) {
                flagged.push(*pos);
            }
        }
        flagged
    }
}

fn rejected_list(rejected: &[WordCandidate]) -> String {
    rejected
        .iter()
        .map(|c| format!("\"{}\"", c.word))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors from applying a player action to a session
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Round(#[from] RoundError),
    #[error("Choose a level first")]
    NotPlaying,
    #[error("There is no game summary to close")]
    NoSummary,
    #[error("Tile {0} is not on the rack")]
    UnknownTile(u32),
    #[error("Position {0} is outside the board")]
    OutOfBounds(Position),
    #[error("No tile was placed at {0} this turn")]
    NotPlacedThisTurn(Position),
}
