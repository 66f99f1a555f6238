//! Game engine with branching history.
//!
//! The engine owns every snapshot the game has passed through and a cursor
//! selecting the current one. Whose turn it is follows from the cursor alone.
//! Playing from an earlier snapshot discards the snapshots after it.

use super::action::{EngineError, EngineEvent, PlayOutcome, Rejection};
use super::invariants::{InvariantSet, InvariantViolation, TimelineInvariants};
use super::position::Position;
use super::rules::calculate_winner;
use super::snapshot::Snapshot;
use super::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Callback invoked after every accepted move or jump.
pub type Listener = Box<dyn FnMut(&EngineEvent)>;

/// Status line derived from the current snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// The current board has a completed line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// No line yet; this player moves next.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

/// One entry of the navigable move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// Step to pass to [`Engine::jump_to`].
    pub step: usize,
    /// Button text, e.g. `"Go to move #2 (row 2, col 2)"`.
    pub description: String,
    /// Whether this entry is the current snapshot.
    pub current: bool,
}

/// Tic-tac-toe engine with time travel.
pub struct Engine {
    pub(crate) history: Vec<Snapshot>,
    pub(crate) cursor: usize,
    listeners: Vec<Listener>,
}

impl Engine {
    /// Creates a new game at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Snapshot::initial()],
            cursor: 0,
            listeners: Vec::new(),
        }
    }

    /// Registers a listener notified after every state change.
    pub fn subscribe(&mut self, listener: impl FnMut(&EngineEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Marks the square at `index` (0-8) for the player to move.
    ///
    /// Moves on an occupied square, on a board that already has a winner, or
    /// off the board are ignored and reported as [`PlayOutcome::Rejected`].
    /// An accepted move made after jumping back discards every snapshot past
    /// the cursor before appending the new one.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn play(&mut self, index: usize) -> PlayOutcome {
        let current = &self.history[self.cursor];

        let Some(position) = Position::from_index(index) else {
            return self.reject(Rejection::OutOfBounds(index));
        };
        if calculate_winner(current.board()).is_some() {
            return self.reject(Rejection::GameOver);
        }
        if !current.board().is_empty(position) {
            return self.reject(Rejection::SquareOccupied(position));
        }

        let player = Player::to_move_at(self.cursor);
        let next = current.advance(position, player);
        let discarded = self.history.len() - self.cursor - 1;

        self.history.truncate(self.cursor + 1);
        self.history.push(next);
        self.cursor = self.history.len() - 1;

        debug_assert!(self.check_invariants().is_ok());
        info!(step = self.cursor, %player, %position, discarded, "Move accepted");

        self.notify(EngineEvent::Played {
            step: self.cursor,
            player,
            position,
        });

        PlayOutcome::Accepted {
            step: self.cursor,
            player,
            position,
            discarded,
        }
    }

    /// Moves the cursor to an existing snapshot without altering history.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::StepOutOfRange`] if `step` is past the end of
    /// history; the cursor is left where it was.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), EngineError> {
        let len = self.history.len();
        if step >= len {
            warn!(step, len, "Jump past end of history");
            return Err(EngineError::StepOutOfRange { step, len });
        }

        self.cursor = step;
        debug!(step, "Jumped");
        self.notify(EngineEvent::Jumped { step });
        Ok(())
    }

    /// The board of the current snapshot.
    pub fn current_board(&self) -> &Board {
        self.current_snapshot().board()
    }

    /// The snapshot under the cursor.
    pub fn current_snapshot(&self) -> &Snapshot {
        &self.history[self.cursor]
    }

    /// Winner on the current board, if any.
    pub fn winner(&self) -> Option<Player> {
        calculate_winner(self.current_board())
    }

    /// Player to move at the current cursor.
    pub fn to_move(&self) -> Player {
        Player::to_move_at(self.cursor)
    }

    /// Status line for the current snapshot.
    ///
    /// A full board without a winner still reports the next player.
    pub fn status(&self) -> Status {
        match self.winner() {
            Some(winner) => Status::Winner(winner),
            None => Status::NextPlayer(self.to_move()),
        }
    }

    /// Navigable list of every snapshot, game start first.
    pub fn move_list(&self) -> Vec<MoveEntry> {
        self.history
            .iter()
            .enumerate()
            .map(|(step, snapshot)| MoveEntry {
                step,
                description: if step == 0 {
                    "Go to game start".to_string()
                } else {
                    format!("Go to move #{} {}", step, snapshot.annotation())
                },
                current: step == self.cursor,
            })
            .collect()
    }

    /// Current cursor (step number).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// All snapshots, game start first.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Checks every timeline invariant against the current state.
    pub fn check_invariants(&self) -> Result<(), Vec<InvariantViolation>> {
        TimelineInvariants::check_all(self)
    }

    fn reject(&self, reason: Rejection) -> PlayOutcome {
        debug!(%reason, "Move rejected");
        PlayOutcome::Rejected(reason)
    }

    fn notify(&mut self, event: EngineEvent) {
        for listener in &mut self.listeners {
            listener(&event);
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("history", &self.history)
            .field("cursor", &self.cursor)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
