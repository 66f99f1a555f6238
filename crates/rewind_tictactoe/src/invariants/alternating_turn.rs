//! Alternating turn invariant: snapshots alternate X, O, X, O, ...

use super::Invariant;
use crate::{Engine, Player, Square};

/// Invariant: each snapshot adds exactly one mark, for the right player.
///
/// Snapshot `k` differs from snapshot `k - 1` in exactly one square. That
/// square is the snapshot's recorded move and holds X when `k` is odd and O
/// when `k` is even.
pub struct AlternatingTurnInvariant;

impl Invariant<Engine> for AlternatingTurnInvariant {
    fn holds(engine: &Engine) -> bool {
        engine
            .history()
            .windows(2)
            .enumerate()
            .all(|(i, pair)| {
                let (before, after) = (pair[0].board(), pair[1].board());
                let changed: Vec<usize> = (0..9)
                    .filter(|&idx| before.squares()[idx] != after.squares()[idx])
                    .collect();

                let Some(pos) = pair[1].last_move() else {
                    return false;
                };
                // Snapshot i + 1 was played at cursor i.
                let expected = Square::Occupied(Player::to_move_at(i));

                changed == [pos.to_index()]
                    && before.is_empty(pos)
                    && after.get(pos) == expected
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
