//! # Connect Four Engine
//!
//! A two-player connection game engine: it owns the board, enforces move
//! legality, and detects wins and draws. There is no rendering, input
//! handling, or AI here — a consuming presentation layer calls
//! [`GameState::drop_piece`] and [`GameState::reset`] and reads the state
//! back through accessors.
//!
//! Board dimensions are configurable at construction (minimum 4×4); the
//! default is the standard 6×7 grid. Row 0 is the bottom row — pieces fall
//! downward and stack from row 0 upward.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, state machine
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;

pub use config::EngineConfig;
pub use error::{ConfigError, EngineError, MoveError};
pub use game::{Board, Cell, DropOutcome, GameState, Outcome, Player, COLS, ROWS};
