//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). There is no draw rule: a
//! full board without a line is simply a board with no winner.

pub mod win;

pub use win::{WINNING_LINES, calculate_winner};
