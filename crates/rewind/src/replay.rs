//! Non-interactive replay of a move sequence.

use rewind_tictactoe::{Engine, EngineError, PlayOutcome, Rejection};
use tracing::{instrument, warn};

/// Engine state after a scripted game.
#[derive(Debug)]
pub struct Replay {
    /// The engine after all moves and the optional jump.
    pub engine: Engine,
    /// Moves the engine ignored, as (index, reason).
    pub rejected: Vec<(usize, Rejection)>,
}

/// Plays `moves` in order, then jumps to `jump` if given.
///
/// Ignored moves are collected rather than aborting the replay.
///
/// # Errors
///
/// Returns [`EngineError::StepOutOfRange`] if `jump` is past the end of the
/// resulting history.
#[instrument]
pub fn replay(moves: &[usize], jump: Option<usize>) -> Result<Replay, EngineError> {
    let mut engine = Engine::new();
    let mut rejected = Vec::new();

    for &index in moves {
        if let PlayOutcome::Rejected(reason) = engine.play(index) {
            warn!(index, %reason, "Replay move ignored");
            rejected.push((index, reason));
        }
    }

    if let Some(step) = jump {
        engine.jump_to(step)?;
    }

    Ok(Replay { engine, rejected })
}
