use std::collections::HashSet;

use crate::models::{Axis, LetterGrid, NewlyPlaced, Position, WordCandidate};

/// Words need at least this many letters to count
pub const MIN_WORD_LENGTH: usize = 2;

pub struct WordExtractor;

impl WordExtractor {
    /// Find every horizontal and vertical run of letters that passes through a
    /// newly placed tile.
    ///
    /// Runs are reported once each, in order of first discovery: newly placed
    /// positions in placement order, the horizontal run before the vertical one.
    pub fn extract<G: LetterGrid + ?Sized>(grid: &G, placed: &NewlyPlaced) -> Vec<WordCandidate> {
        let mut seen: HashSet<Vec<Position>> = HashSet::new();
        let mut words = Vec::new();

        for pos in placed.iter() {
            if grid.is_empty_at(pos) {
                tracing::warn!("Newly placed position {} has no tile, skipping", pos);
                continue;
            }

            for axis in Axis::ALL {
                let Some(candidate) = Self::run_through(grid, pos, axis) else {
                    continue;
                };
                if candidate.len() < MIN_WORD_LENGTH || !candidate.touches(placed) {
                    continue;
                }
                if seen.insert(candidate.positions.clone()) {
                    words.push(candidate);
                }
            }
        }

        words
    }

    /// The maximal run of occupied cells along `axis` containing `pos`
    fn run_through<G: LetterGrid + ?Sized>(
        grid: &G,
        pos: Position,
        axis: Axis,
    ) -> Option<WordCandidate> {
        let mut start = pos;
        while let Some(prev) = start.step(axis, false).filter(|p| !grid.is_empty_at(*p)) {
            start = prev;
        }

        let mut word = String::new();
        let mut positions = Vec::new();
        let mut cursor = Some(start);
        while let Some(current) = cursor {
            let Some(letter) = grid.letter(current) else {
                break;
            };
            word.push_str(letter);
            positions.push(current);
            cursor = current.step(axis, true);
        }

        (!positions.is_empty()).then_some(WordCandidate {
            word,
            positions,
            axis,
        })
    }
}
