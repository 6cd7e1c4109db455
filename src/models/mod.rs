pub mod board;
pub mod game;

pub use board::{Axis, Board, LetterGrid, NewlyPlaced, Position};
pub use game::{Level, Phase, RackTile, WordCandidate};
