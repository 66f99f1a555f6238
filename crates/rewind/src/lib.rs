//! Terminal front end for rewind tic-tac-toe.
//!
//! This crate is the presentation layer: it parses console input into engine
//! calls and renders the engine's board, status and move list. All game state
//! lives in [`rewind_tictactoe::Engine`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod command;
mod render;
mod replay;
mod session;
mod settings;

pub use command::{CommandError, HELP, Input};
pub use render::{View, render, render_board, render_moves};
pub use replay::{Replay, replay};
pub use session::{Reply, Session};
pub use settings::{Highlight, Settings, SettingsError};
