//! Interactive session: routes parsed input into the engine.
//!
//! The session holds no game state of its own. It subscribes to the engine
//! and redraws only after the engine reports a change.

use crate::command::{HELP, Input};
use crate::render::render;
use crate::settings::Settings;
use rewind_tictactoe::{Engine, PlayOutcome, Position, Rejection};
use std::cell::Cell;
use std::rc::Rc;
use tracing::{debug, instrument};

/// What the console should do after an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print this text.
    Print(String),
    /// Nothing changed and there is nothing to say.
    Quiet,
    /// Leave the session.
    Quit,
}

/// A running game attached to console settings.
#[derive(Debug)]
pub struct Session {
    engine: Engine,
    settings: Settings,
    dirty: Rc<Cell<bool>>,
}

impl Session {
    /// Starts a fresh game.
    #[instrument(skip(settings))]
    pub fn new(settings: Settings) -> Self {
        let dirty = Rc::new(Cell::new(false));
        let mut engine = Engine::new();
        let flag = Rc::clone(&dirty);
        engine.subscribe(move |_| flag.set(true));

        Self {
            engine,
            settings,
            dirty,
        }
    }

    /// The underlying engine, for queries.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Full screen for the current state.
    pub fn screen(&self) -> String {
        render(&self.engine, &self.settings)
    }

    /// Indices of the empty squares on the current board, comma separated.
    fn open_squares(&self) -> String {
        Position::valid_moves(self.engine.current_board())
            .iter()
            .map(|pos| pos.to_index().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Applies one input and says what to show.
    ///
    /// Rejected moves produce a one-line notice, listing the open squares
    /// unless the game is over. A jump past the end of history is reported
    /// the same way; the engine stays where it was.
    #[instrument(skip(self))]
    pub fn handle(&mut self, input: Input) -> Reply {
        let notice = match input {
            Input::Quit => return Reply::Quit,
            Input::Help => return Reply::Print(HELP.to_string()),
            Input::Show => return Reply::Print(self.screen()),
            Input::Play(index) => match self.engine.play(index) {
                PlayOutcome::Rejected(reason @ Rejection::GameOver) => Some(reason.to_string()),
                PlayOutcome::Rejected(reason) => {
                    Some(format!("{} (open: {})", reason, self.open_squares()))
                }
                PlayOutcome::Accepted { .. } => None,
            },
            Input::Jump(step) => match self.engine.jump_to(step) {
                Err(err) => Some(err.to_string()),
                Ok(()) => None,
            },
        };

        if self.dirty.replace(false) {
            debug!("Engine changed, redrawing");
            return Reply::Print(self.screen());
        }
        match notice {
            Some(notice) => Reply::Print(notice),
            None => Reply::Quiet,
        }
    }
}
