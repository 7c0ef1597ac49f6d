//! Core Connect Four game logic: board representation, player types, and the
//! per-game state machine. Nothing here touches the terminal.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, MoveError, CELLS, COLS, ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState};

/// Column order that fills the board without anyone connecting four when
/// Red moves first.
#[cfg(test)]
pub(crate) const DRAW_SEQUENCE: [usize; CELLS] = [
    5, 3, 2, 3, 1, 5, 3, 1, 0, 1, 4, 1, 2, 5, 0, 5, 6, 6, 2, 0, 6, 0, 4, 2, 3, 0, 3, 4, 2, 3, 2,
    6, 0, 4, 1, 1, 5, 4, 4, 5, 6, 6,
];

/// Column order, Red first, where Yellow connects four with the 42nd disc.
#[cfg(test)]
pub(crate) const FINAL_MOVE_WIN_SEQUENCE: [usize; CELLS] = [
    0, 3, 0, 6, 1, 3, 0, 5, 4, 1, 1, 1, 1, 2, 4, 3, 5, 2, 3, 3, 1, 4, 2, 4, 3, 0, 0, 2, 0, 2, 6,
    5, 5, 4, 6, 6, 4, 6, 5, 5, 6, 2,
];
