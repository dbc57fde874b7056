//! Replayed game record: headers, snapshot history, and result.
//!
//! `GameRecord` owns the append-only history of board snapshots. Index 0 is
//! always the standard starting position; each successfully interpreted
//! half-move appends one fresh snapshot derived from the latest one.

use std::collections::BTreeMap;
use std::fmt;

use crate::game_state::board_snapshot::BoardSnapshot;

/// Final game outcome. `Undecided` is the internal not-yet-known sentinel,
/// distinct from every legal result literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    LightWins,
    DarkWins,
    Draw,
    Undecided,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameResult::LightWins => "1-0",
            GameResult::DarkWins => "0-1",
            GameResult::Draw => "1/2-1/2",
            GameResult::Undecided => "*",
        };
        write!(f, "{text}")
    }
}

/// One fully replayed game.
#[derive(Debug, Clone)]
pub struct GameRecord {
    /// Header details keyed by lowercased tag name.
    pub header: BTreeMap<String, String>,
    /// Position after every half-move, starting with the initial position.
    pub history: Vec<BoardSnapshot>,
    pub result: GameResult,
}

impl GameRecord {
    pub fn new() -> Self {
        Self {
            header: BTreeMap::new(),
            history: vec![BoardSnapshot::initial()],
            result: GameResult::Undecided,
        }
    }

    /// The most recently appended snapshot.
    #[inline]
    pub fn latest(&self) -> &BoardSnapshot {
        self.history.last().expect("history is never empty")
    }

    /// A mutable working copy cloned from the latest snapshot, for the
    /// resolution engine to edit before appending.
    #[inline]
    pub fn fresh(&self) -> BoardSnapshot {
        self.latest().clone()
    }

    /// Record the next position. Existing snapshots are never mutated.
    #[inline]
    pub fn append(&mut self, snapshot: BoardSnapshot) {
        self.history.push(snapshot);
    }

    /// Number of half-moves interpreted so far.
    #[inline]
    pub fn half_move_count(&self) -> usize {
        self.history.len() - 1
    }
}

impl Default for GameRecord {
    fn default() -> Self {
        Self::new()
    }
}
