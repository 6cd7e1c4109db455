use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    models::RackTile,
    utils::letters::{get_cumulative_distribution, normalize},
};

/// The player's tiles, in display order.
///
/// Tile ids keep increasing for the whole session, so a tile that goes back to
/// the rack gets a fresh id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rack {
    tiles: Vec<RackTile>,
    next_id: u32,
}

impl Rack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tiles(&self) -> &[RackTile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Put a letter on the rack, returning the new tile's id
    pub fn push(&mut self, letter: &str) -> u32 {
        self.next_id += 1;
        let id = self.next_id;
        self.tiles.push(RackTile {
            id,
            letter: normalize(letter),
        });
        id
    }

    /// Take a tile off the rack
    pub fn take(&mut self, id: u32) -> Option<RackTile> {
        let idx = self.tiles.iter().position(|tile| tile.id == id)?;
        Some(self.tiles.remove(idx))
    }

    /// Replace every tile with `count` freshly drawn letters
    pub fn refill(&mut self, count: usize, rng: &mut impl Rng) {
        self.tiles.clear();
        for letter in RackGenerator::draw(count, rng) {
            self.push(&letter.to_string());
        }
    }
}

pub struct RackGenerator;

impl RackGenerator {
    /// Draw `count` letters using the weighted Twi letter distribution
    pub fn draw(count: usize, rng: &mut impl Rng) -> Vec<char> {
        let cumulative_dist = get_cumulative_distribution();
        let total = cumulative_dist.last().map_or(0.0, |(_, weight)| *weight);

        (0..count)
            .map(|_| Self::random_letter(&cumulative_dist, total, rng))
            .collect()
    }

    fn random_letter(cumulative_dist: &[(char, f32)], total: f32, rng: &mut impl Rng) -> char {
        let random_value = rng.random::<f32>() * total;

        for (letter, cumulative) in cumulative_dist {
            if random_value <= *cumulative {
                return *letter;
            }
        }

        'a' // Fallback
    }
}
