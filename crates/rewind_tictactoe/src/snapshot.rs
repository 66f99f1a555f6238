//! Immutable history entries.

use super::position::Position;
use super::types::{Board, Player};
use serde::{Deserialize, Serialize};

/// One historical board state plus the move that produced it.
///
/// Snapshots are never mutated; a move always builds a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    last_move: Option<Position>,
}

impl Snapshot {
    /// The game start: an empty board reached by no move.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    /// Builds the snapshot reached by `player` marking `pos` from this one.
    pub(crate) fn advance(&self, pos: Position, player: Player) -> Self {
        Self {
            board: self.board.with_mark(pos, player),
            last_move: Some(pos),
        }
    }

    /// The board at this point in history.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The position played to reach this snapshot, `None` for the game start.
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    /// Move annotation for display, empty for the game start.
    pub fn annotation(&self) -> String {
        self.last_move.map(Position::location).unwrap_or_default()
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::initial()
    }
}
