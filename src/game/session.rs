use rand::Rng;
use uuid::Uuid;

use crate::{
    dictionary::Dictionary,
    error::{GameError, RoundError},
    game::{evaluate_round, AcceptedRound, Rack},
    models::{Board, LetterGrid, Level, NewlyPlaced, Phase, Position},
};

/// Default board edge length, the same for every level
pub const DEFAULT_BOARD_SIZE: usize = 10;

/// Something the player did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    StartLevel { level: Level },
    PlaceTile { tile_id: u32, position: Position },
    PickUpTile { position: Position },
    ConfirmWord,
    ShuffleRack,
    EndGame,
    CloseSummary,
}

/// What an action changed, for the caller to present
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    LevelStarted { level: Level },
    TilePlaced {
        tile_id: u32,
        position: Position,
        /// Id of the rack tile created for a letter this tile displaced
        returned_tile: Option<u32>,
    },
    TileReturned { position: Position, tile_id: u32 },
    RoundAccepted { round: AcceptedRound, total_score: u32 },
    RackShuffled,
    GameOver { final_score: u32 },
    SummaryClosed,
}

/// One player's game: board, rack, turn state and score.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    phase: Phase,
    level: Option<Level>,
    board_size: usize,
    board: Board,
    rack: Rack,
    newly_placed: NewlyPlaced,
    highlighted: Vec<Position>,
    score: u32,
}

impl Session {
    pub fn new(board_size: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            phase: Phase::Menu,
            level: None,
            board_size,
            board: Board::new(board_size),
            rack: Rack::new(),
            newly_placed: NewlyPlaced::new(),
            highlighted: Vec::new(),
            score: 0,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn level(&self) -> Option<Level> {
        self.level
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rack(&self) -> &Rack {
        &self.rack
    }

    pub fn newly_placed(&self) -> &NewlyPlaced {
        &self.newly_placed
    }

    /// Cells of words the dictionary rejected on the last confirmation
    pub fn highlighted(&self) -> &[Position] {
        &self.highlighted
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Apply a player action, returning the next session state and what happened.
    ///
    /// Errors never invalidate the session. Some failed actions still change
    /// state: a confirmation that formed no words or was rejected ends the turn.
    pub fn apply(
        mut self,
        action: Action,
        dictionary: &Dictionary,
        rng: &mut impl Rng,
    ) -> (Self, Result<Event, GameError>) {
        tracing::debug!("Session {} applying {:?}", self.id, action);

        let result = match action {
            Action::StartLevel { level } => Ok(self.start_level(level, rng)),
            Action::PlaceTile { tile_id, position } => self.place_tile(tile_id, position),
            Action::PickUpTile { position } => self.pick_up_tile(position),
            Action::ConfirmWord => self.confirm_word(dictionary, rng),
            Action::ShuffleRack => self.shuffle_rack(rng),
            Action::EndGame => self.end_game(),
            Action::CloseSummary => self.close_summary(),
        };

        (self, result)
    }

    fn start_level(&mut self, level: Level, rng: &mut impl Rng) -> Event {
        self.phase = Phase::Playing;
        self.level = Some(level);
        self.score = 0;
        self.board = Board::new(self.board_size);
        self.rack.refill(level.rack_size(), rng);
        self.newly_placed.clear();
        self.highlighted.clear();

        tracing::info!(
            "Session {} started {:?} level ({}x{} board, {} tiles)",
            self.id,
            level,
            self.board_size,
            self.board_size,
            level.rack_size()
        );
        Event::LevelStarted { level }
    }

    fn place_tile(&mut self, tile_id: u32, position: Position) -> Result<Event, GameError> {
        self.playing_level()?;
        if !self.board.contains(position) {
            return Err(GameError::OutOfBounds(position));
        }
        let tile = self.rack.take(tile_id).ok_or(GameError::UnknownTile(tile_id))?;

        let displaced = self.board.set_letter(position, &tile.letter);
        let returned_tile = match displaced {
            Some(letter) if self.newly_placed.contains(position) => Some(self.rack.push(&letter)),
            Some(letter) => {
                tracing::debug!("Tile {} overwrote confirmed letter {} at {}", tile_id, letter, position);
                None
            }
            None => None,
        };
        self.newly_placed.insert(position);

        Ok(Event::TilePlaced {
            tile_id,
            position,
            returned_tile,
        })
    }

    fn pick_up_tile(&mut self, position: Position) -> Result<Event, GameError> {
        self.playing_level()?;
        if !self.board.contains(position) {
            return Err(GameError::OutOfBounds(position));
        }
        if !self.newly_placed.remove(position) {
            return Err(GameError::NotPlacedThisTurn(position));
        }

        let letter = self
            .board
            .clear(position)
            .ok_or(GameError::NotPlacedThisTurn(position))?;
        let tile_id = self.rack.push(&letter);

        Ok(Event::TileReturned { position, tile_id })
    }

    fn confirm_word(&mut self, dictionary: &Dictionary, rng: &mut impl Rng) -> Result<Event, GameError> {
        let level = self.playing_level()?;

        match evaluate_round(&self.board, &self.newly_placed, dictionary) {
            Err(RoundError::NoTilesPlaced) => Err(RoundError::NoTilesPlaced.into()),
            Err(err) => {
                tracing::info!("Session {} round not scored: {}", self.id, err);
                self.newly_placed.clear();
                self.highlighted = err.flagged_positions();
                Err(err.into())
            }
            Ok(round) => {
                self.score += round.score_delta;
                self.newly_placed.clear();
                self.highlighted.clear();
                self.rack.refill(level.rack_size(), rng);

                tracing::info!(
                    "Session {} round accepted: +{} points (total {})",
                    self.id,
                    round.score_delta,
                    self.score
                );
                Ok(Event::RoundAccepted {
                    round,
                    total_score: self.score,
                })
            }
        }
    }

    fn shuffle_rack(&mut self, rng: &mut impl Rng) -> Result<Event, GameError> {
        let level = self.playing_level()?;
        self.rack.refill(level.rack_size(), rng);
        Ok(Event::RackShuffled)
    }

    fn end_game(&mut self) -> Result<Event, GameError> {
        self.playing_level()?;
        self.phase = Phase::Finished;
        tracing::info!("Session {} finished with {} points", self.id, self.score);
        Ok(Event::GameOver {
            final_score: self.score,
        })
    }

    fn close_summary(&mut self) -> Result<Event, GameError> {
        if self.phase != Phase::Finished {
            return Err(GameError::NoSummary);
        }
        self.phase = Phase::Menu;
        Ok(Event::SummaryClosed)
    }

    fn playing_level(&self) -> Result<Level, GameError> {
        match (self.phase, self.level) {
            (Phase::Playing, Some(level)) => Ok(level),
            _ => Err(GameError::NotPlaying),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}
