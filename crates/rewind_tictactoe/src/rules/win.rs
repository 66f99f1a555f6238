//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Square};
use tracing::instrument;

/// The eight winning lines as board indices, in scan order.
#[rustfmt::skip]
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],            // Diagonals
];

/// Checks if there is a winner on the board.
///
/// Lines are scanned in [`WINNING_LINES`] order and the first complete one
/// decides. Returns `None` for boards without a line, full or not.
#[instrument(skip(board))]
pub fn calculate_winner(board: &Board) -> Option<Player> {
    let squares = board.squares();
    for [a, b, c] in WINNING_LINES {
        if let Square::Occupied(player) = squares[a]
            && squares[b] == squares[a]
            && squares[c] == squares[a]
        {
            return Some(player);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    fn board_from(marks: &[Option<Player>; 9]) -> Board {
        let squares = marks.map(|mark| match mark {
            Some(player) => Square::Occupied(player),
            None => Square::Empty,
        });
        Board::from_squares(squares)
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(calculate_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let x = Some(Player::X);
        let board = board_from(&[x, x, x, None, None, None, None, None, None]);
        assert_eq!(calculate_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopRight, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::O));
        board.set(Position::BottomLeft, Square::Occupied(Player::O));
        assert_eq!(calculate_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        assert_eq!(calculate_winner(&board), None);
    }

    #[test]
    fn test_full_board_without_line_has_no_winner() {
        // X O X / X O O / O X X
        let (x, o) = (Some(Player::X), Some(Player::O));
        let board = board_from(&[x, o, x, x, o, o, o, x, x]);
        assert_eq!(board.occupied(), 9);
        assert_eq!(calculate_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_scan_order_wins() {
        // Not reachable by alternating play, but the scan order must decide.
        let (x, o) = (Some(Player::X), Some(Player::O));
        let board = board_from(&[o, o, o, x, x, x, None, None, None]);
        assert_eq!(calculate_winner(&board), Some(Player::O));
    }
}
