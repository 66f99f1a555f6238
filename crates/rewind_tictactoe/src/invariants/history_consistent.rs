//! History consistency invariant: history grows one mark per step from an
//! empty start and stops at a win.

use super::Invariant;
use crate::{Engine, rules::calculate_winner};

/// Invariant: history starts empty, grows by one mark per step, and never
/// continues past a won board.
pub struct HistoryConsistentInvariant;

impl Invariant<Engine> for HistoryConsistentInvariant {
    fn holds(engine: &Engine) -> bool {
        let history = engine.history();
        let Some(start) = history.first() else {
            return false;
        };
        if start.board().occupied() != 0 || start.last_move().is_some() {
            return false;
        }

        let counts_match = history
            .iter()
            .enumerate()
            .all(|(step, snapshot)| snapshot.board().occupied() == step);

        let nothing_after_win = history
            .iter()
            .rev()
            .skip(1)
            .all(|snapshot| calculate_winner(snapshot.board()).is_none());

        counts_match && nothing_after_win
    }

    fn description() -> &'static str {
        "History grows one mark per step and ends at a win"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Snapshot};

    #[test]
    fn test_empty_game_holds() {
        assert!(HistoryConsistentInvariant::holds(&Engine::new()));
    }

    #[test]
    fn test_won_game_holds() {
        let mut engine = Engine::new();
        for index in [0, 4, 1, 5, 2] {
            engine.play(index);
        }
        assert_eq!(engine.winner(), Some(Player::X));
        assert!(HistoryConsistentInvariant::holds(&engine));
    }

    #[test]
    fn test_move_after_win_violates() {
        let mut engine = Engine::new();
        for index in [0, 4, 1, 5, 2] {
            engine.play(index);
        }
        let extra = engine.history[5].advance(Position::BottomLeft, Player::O);
        engine.history.push(extra);
        assert!(!HistoryConsistentInvariant::holds(&engine));
    }

    #[test]
    fn test_non_empty_start_violates() {
        let mut engine = Engine::new();
        engine.history[0] = Snapshot::initial().advance(Position::Center, Player::X);
        assert!(!HistoryConsistentInvariant::holds(&engine));
    }
}
