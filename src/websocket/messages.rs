use serde::{Deserialize, Serialize};

use crate::{
    error::RoundError,
    game::{Action, Session},
    models::{Board, Level, Phase, Position, RackTile, WordCandidate},
};

/// Messages sent from client to server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    StartLevel {
        level: Level,
    },
    PlaceTile {
        tile_id: u32,
        position: Position,
    },
    PickUpTile {
        position: Position,
    },
    ConfirmWord,
    ShuffleRack,
    EndGame,
    CloseSummary,
}

impl From<ClientMessage> for Action {
    fn from(msg: ClientMessage) -> Self {
        match msg {
            ClientMessage::StartLevel { level } => Action::StartLevel { level },
            ClientMessage::PlaceTile { tile_id, position } => Action::PlaceTile { tile_id, position },
            ClientMessage::PickUpTile { position } => Action::PickUpTile { position },
            ClientMessage::ConfirmWord => Action::ConfirmWord,
            ClientMessage::ShuffleRack => Action::ShuffleRack,
            ClientMessage::EndGame => Action::EndGame,
            ClientMessage::CloseSummary => Action::CloseSummary,
        }
    }
}

/// Messages sent from server to client
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Full session snapshot, sent after every action
    SessionState {
        phase: Phase,
        level: Option<Level>,
        board: Board,
        rack: Vec<RackTile>,
        newly_placed: Vec<Position>,
        highlighted: Vec<Position>,
        score: u32,
    },
    WordsAccepted {
        words: Vec<WordResult>,
        score_delta: u32,
        total_score: u32,
        message: String,
    },
    WordsRejected {
        words: Vec<WordResult>,
        positions: Vec<Position>,
        message: String,
    },
    Info {
        message: String,
    },
    GameOver {
        final_score: u32,
    },
    Error {
        message: String,
    },
}

impl ServerMessage {
    pub fn snapshot(session: &Session) -> Self {
        ServerMessage::SessionState {
            phase: session.phase(),
            level: session.level(),
            board: session.board().clone(),
            rack: session.rack().tiles().to_vec(),
            newly_placed: session.newly_placed().iter().collect(),
            highlighted: session.highlighted().to_vec(),
            score: session.score(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        ServerMessage::Error {
            message: message.into(),
        }
    }
}

/// A word found on the board and whether the dictionary knows it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordResult {
    pub word: String,
    pub positions: Vec<Position>,
    pub accepted: bool,
}

impl WordResult {
    pub fn new(candidate: WordCandidate, accepted: bool) -> Self {
        Self {
            word: candidate.word,
            positions: candidate.positions,
            accepted,
        }
    }

    /// Every word of a rejected turn, found words first
    pub fn from_rejection(err: &RoundError) -> Vec<Self> {
        match err {
            RoundError::DictionaryRejection { accepted, rejected } => accepted
                .iter()
                .map(|c| Self::new(c.clone(), true))
                .chain(rejected.iter().map(|c| Self::new(c.clone(), false)))
                .collect(),
            _ => Vec::new(),
        }
    }
}
