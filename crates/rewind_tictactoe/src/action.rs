//! Results of engine operations.
//!
//! A rejected move is an ordinary outcome, not an error: the engine ignores
//! it and reports why. Only navigation to a step that does not exist is a
//! fault.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The current board already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The index does not name a square.
    #[display("Position {} out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),
}

/// What `play` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayOutcome {
    /// The move was applied and is now the current snapshot.
    Accepted {
        /// Step number of the new snapshot.
        step: usize,
        /// Player who moved.
        player: Player,
        /// Square that was marked.
        position: Position,
        /// Number of forward snapshots discarded by branching.
        discarded: usize,
    },
    /// The move was ignored; engine state is unchanged.
    Rejected(Rejection),
}

impl PlayOutcome {
    /// Returns true if the move was applied.
    pub fn is_accepted(&self) -> bool {
        matches!(self, PlayOutcome::Accepted { .. })
    }

    /// Returns the rejection reason, if the move was ignored.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            PlayOutcome::Accepted { .. } => None,
            PlayOutcome::Rejected(reason) => Some(*reason),
        }
    }
}

/// Faults raised by the engine on caller misuse.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// `jump_to` was given a step past the end of history.
    #[display("Step {} out of range (history has {} snapshots)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the call.
        len: usize,
    },
}

impl std::error::Error for EngineError {}

/// Notification sent to listeners after the engine changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineEvent {
    /// A move was accepted.
    Played {
        /// Step number of the new snapshot.
        step: usize,
        /// Player who moved.
        player: Player,
        /// Square that was marked.
        position: Position,
    },
    /// The cursor moved to an existing snapshot.
    Jumped {
        /// New cursor value.
        step: usize,
    },
}
