//! Rewind tic-tac-toe - a pure game engine with time travel.
//!
//! The [`Engine`] keeps every board the game has passed through as an
//! immutable [`Snapshot`] and a cursor selecting the current one. Moves are
//! applied with [`Engine::play`], earlier snapshots revisited with
//! [`Engine::jump_to`]. Playing after a jump discards the abandoned future.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{Engine, Player, Status};
//!
//! let mut engine = Engine::new();
//! for index in [0, 4, 1, 5, 2] {
//!     engine.play(index);
//! }
//! assert_eq!(engine.status(), Status::Winner(Player::X));
//! assert_eq!(engine.status().to_string(), "Winner: X");
//!
//! engine.jump_to(0).unwrap();
//! engine.play(8);
//! assert_eq!(engine.history().len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
pub mod invariants;
mod position;
pub mod rules;
mod snapshot;
mod types;

pub use action::{EngineError, EngineEvent, PlayOutcome, Rejection};
pub use engine::{Engine, Listener, MoveEntry, Status};
pub use position::{Position, move_label};
pub use rules::calculate_winner;
pub use snapshot::Snapshot;
pub use types::{Board, Player, Square};
