//! Core Connect Four game logic: board representation, player types, and the
//! drop/win/draw state machine.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, COLS, ROWS};
pub use player::Player;
pub use state::{DropOutcome, GameState, Outcome};
