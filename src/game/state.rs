use tracing::{debug, trace};

use crate::error::{EngineError, MoveError};

use super::{Board, Cell, Player};

/// Where the game stands. `Win` and `Draw` are terminal: no drop is accepted
/// until [`GameState::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win(Player),
    Draw,
}

/// Result of a successful drop. Every variant carries the landing cell so a
/// presentation layer can repaint just that cell instead of the whole board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The piece landed and the turn passed to the other player.
    Continue {
        row: usize,
        column: usize,
        player: Player,
    },
    /// The piece completed a four-in-a-row.
    Win {
        row: usize,
        column: usize,
        player: Player,
    },
    /// The piece filled the last open cell with no line completed.
    Draw { row: usize, column: usize },
}

/// The game state machine: one board, the player to move, and the outcome.
///
/// All validation happens before any mutation, so a failed call leaves the
/// state exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Outcome,
}

impl GameState {
    /// Create a fresh game on a `rows` x `cols` board. Dimensions below 4x4
    /// are rejected with [`EngineError::InvalidDimensions`].
    pub fn new(rows: usize, cols: usize) -> Result<Self, EngineError> {
        Ok(GameState {
            board: Board::new(rows, cols)?,
            current_player: Player::Red, // Red starts
            outcome: Outcome::InProgress,
        })
    }

    /// Get current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    pub fn cols(&self) -> usize {
        self.board.cols()
    }

    /// Get the game outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Get the cell at a position, with bounds checking.
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, EngineError> {
        self.board.get(row, col)
    }

    /// Check if every column is full.
    pub fn is_full(&self) -> bool {
        self.board.is_full()
    }

    /// Get the columns a drop may target: the non-full ones, or none at all
    /// once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.outcome != Outcome::InProgress {
            return Vec::new();
        }

        (0..self.board.cols())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Drop the current player's piece into a column.
    ///
    /// The piece lands in the lowest empty row. On a completed
    /// four-in-a-row the outcome becomes `Win`; on a full board with no
    /// line, `Draw`; otherwise the turn passes to the other player. Errors
    /// leave the state untouched.
    pub fn drop_piece(&mut self, column: usize) -> Result<DropOutcome, MoveError> {
        if self.outcome != Outcome::InProgress {
            return Err(MoveError::GameOver);
        }

        let player = self.current_player;
        let row = self.board.drop_piece(column, Cell::from(player))?;
        trace!(row, column, player = player.name(), "piece placed");

        if self.board.check_win(row, column) {
            self.outcome = Outcome::Win(player);
            debug!(player = player.name(), row, column, "four in a row");
            return Ok(DropOutcome::Win {
                row,
                column,
                player,
            });
        }

        if self.board.is_full() {
            self.outcome = Outcome::Draw;
            debug!("board full, game drawn");
            return Ok(DropOutcome::Draw { row, column });
        }

        self.current_player = player.other();
        Ok(DropOutcome::Continue {
            row,
            column,
            player,
        })
    }

    /// Restore the state exactly as at construction: same dimensions, all
    /// cells empty, Red to move.
    pub fn reset(&mut self) {
        debug!("game reset");
        self.board.clear();
        self.current_player = Player::Red;
        self.outcome = Outcome::InProgress;
    }
}

impl Default for GameState {
    /// A fresh game on the standard 6x7 board.
    fn default() -> Self {
        GameState {
            board: Board::default(),
            current_player: Player::Red,
            outcome: Outcome::InProgress,
        }
    }
}
