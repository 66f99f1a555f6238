//! Stateless rendering of engine output.
//!
//! Everything here reads from an [`Engine`] and returns text; nothing keeps
//! game state between calls.

use crate::settings::{Highlight, Settings};
use crossterm::style::Stylize;
use rewind_tictactoe::{Board, Engine, MoveEntry, Player, Square};
use serde::Serialize;
use tracing::instrument;

/// Draws the 3x3 grid.
pub fn render_board(board: &Board, settings: &Settings) -> String {
    board
        .squares()
        .chunks(3)
        .enumerate()
        .map(|(row, cells)| {
            let cells = cells
                .iter()
                .enumerate()
                .map(|(col, square)| match square {
                    Square::Occupied(player) => player.to_string(),
                    Square::Empty if *settings.show_indices() => (row * 3 + col).to_string(),
                    Square::Empty => " ".to_string(),
                })
                .collect::<Vec<_>>();
            format!(" {} ", cells.join(" | "))
        })
        .collect::<Vec<_>>()
        .join("\n---+---+---\n")
}

/// Draws the numbered move list, highlighting the current entry.
pub fn render_moves(entries: &[MoveEntry], settings: &Settings) -> String {
    entries
        .iter()
        .map(|entry| {
            let line = format!("{:>2}. {}", entry.step, entry.description);
            match (entry.current, settings.highlight()) {
                (true, Highlight::Bold) => format!("  {}", line.bold()),
                (true, Highlight::Marker) => format!("> {}", line),
                (false, _) => format!("  {}", line),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Draws board, status line and move list.
#[instrument(skip_all, fields(cursor = engine.cursor()))]
pub fn render(engine: &Engine, settings: &Settings) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        render_board(engine.current_board(), settings),
        engine.status(),
        render_moves(&engine.move_list(), settings),
    )
}

/// Serializable copy of what the screen shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    /// Cells in row-major order, `None` for empty.
    pub board: [Option<Player>; 9],
    /// Status line text.
    pub status: String,
    /// Current step.
    pub cursor: usize,
    /// Move list, game start first.
    pub moves: Vec<MoveEntry>,
}

impl View {
    /// Captures the current engine output.
    pub fn capture(engine: &Engine) -> Self {
        Self {
            board: engine.current_board().squares().map(Square::player),
            status: engine.status().to_string(),
            cursor: engine.cursor(),
            moves: engine.move_list(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_with_indices() {
        let board = render_board(&Board::new(), &Settings::default());
        assert_eq!(
            board,
            " 0 | 1 | 2 \n---+---+---\n 3 | 4 | 5 \n---+---+---\n 6 | 7 | 8 "
        );
    }

    #[test]
    fn test_marks_replace_indices() {
        let mut engine = Engine::new();
        engine.play(0);
        engine.play(4);
        let board = render_board(engine.current_board(), &Settings::default());
        assert!(board.starts_with(" X | 1 | 2 \n"));
        assert!(board.contains(" 3 | O | 5 "));
    }

    #[test]
    fn test_marker_highlight() {
        let mut engine = Engine::new();
        engine.play(4);
        engine.jump_to(0).unwrap();

        let settings = Settings::default().with_highlight(Highlight::Marker);
        let moves = render_moves(&engine.move_list(), &settings);
        assert_eq!(moves, ">  0. Go to game start\n   1. Go to move #1 (row 2, col 2)");
    }

    #[test]
    fn test_bold_highlight() {
        let engine = Engine::new();
        let moves = render_moves(&engine.move_list(), &Settings::default());
        assert_eq!(moves, format!("  {}", " 0. Go to game start".bold()));
        assert!(moves.contains(" 0. Go to game start"));
    }

    #[test]
    fn test_full_render_styles_current_entry() {
        let mut engine = Engine::new();
        engine.play(0);

        let screen = render(&engine, &Settings::default());
        let mut lines = screen.lines().rev();
        assert_eq!(
            lines.next(),
            Some(format!("  {}", " 1. Go to move #1 (row 1, col 1)".bold()).as_str())
        );
        assert_eq!(lines.next(), Some("   0. Go to game start"));
    }

    #[test]
    fn test_render_includes_status() {
        let engine = Engine::new();
        assert!(render(&engine, &Settings::default()).contains("\n\nNext player: X\n\n"));
    }
}
