//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board. Rules are kept apart from board
//! storage so the computer player can run them on look-ahead copies.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, evaluate, winning_line};
