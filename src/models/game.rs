use serde::{Deserialize, Serialize};

use super::board::{Axis, NewlyPlaced, Position};

/// Difficulty tier chosen from the level menu
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    /// Number of tiles dealt to the rack
    pub fn rack_size(self) -> usize {
        match self {
            Level::Beginner => 7,
            Level::Intermediate => 9,
            Level::Advanced => 11,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        };
        f.write_str(name)
    }
}

/// Where the player is in the game flow
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No level is running; the level menu is shown
    #[default]
    Menu,
    Playing,
    /// The end-of-game summary is shown
    Finished,
}

/// A lettered tile sitting on the player's rack
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct RackTile {
    pub id: u32,
    pub letter: String,
}

/// A contiguous line of letters found on the board
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct WordCandidate {
    /// Normalized letters, in board order
    pub word: String,
    /// Cells the word spans, left-to-right or top-to-bottom
    pub positions: Vec<Position>,
    pub axis: Axis,
}

impl WordCandidate {
    /// Length in letters
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    /// Whether any of the word's cells was placed this turn
    pub fn touches(&self, placed: &NewlyPlaced) -> bool {
        self.positions.iter().any(|pos| placed.contains(*pos))
    }
}
