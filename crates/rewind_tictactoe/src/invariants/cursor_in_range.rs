//! Cursor invariant: the cursor always names an existing snapshot.

use super::Invariant;
use crate::Engine;

/// Invariant: history is non-empty and the cursor points inside it.
pub struct CursorInRangeInvariant;

impl Invariant<Engine> for CursorInRangeInvariant {
    fn holds(engine: &Engine) -> bool {
        !engine.history.is_empty() && engine.cursor < engine.history.len()
    }

    fn description() -> &'static str {
        "Cursor points at an existing snapshot"
    }
}
