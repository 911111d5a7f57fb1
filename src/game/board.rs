use crate::error::{EngineError, MoveError};

use super::player::Player;

/// Default number of rows on a standard board.
pub const ROWS: usize = 6;
/// Default number of columns on a standard board.
pub const COLS: usize = 7;

/// Smallest dimension on which a four-in-a-row can exist.
const MIN_DIM: usize = 4;
/// Run length that wins the game.
const WIN_LEN: usize = 4;

/// The four line orientations as (row, col) steps. Opposite directions are
/// covered by walking each ray both ways from the placed piece.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl From<Player> for Cell {
    fn from(player: Player) -> Cell {
        match player {
            Player::Red => Cell::Red,
            Player::Yellow => Cell::Yellow,
        }
    }
}

/// The playing grid. Row 0 is the bottom row; pieces stack upward, so
/// non-empty cells in a column are always contiguous from row 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    // Row-major: cells[row * cols + col].
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board. Dimensions below 4x4 cannot host a
    /// four-in-a-row and are rejected.
    pub fn new(rows: usize, cols: usize) -> Result<Self, EngineError> {
        if rows < MIN_DIM || cols < MIN_DIM {
            return Err(EngineError::InvalidDimensions { rows, cols });
        }
        Ok(Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a position, with bounds checking.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, EngineError> {
        if row >= self.rows || col >= self.cols {
            return Err(EngineError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.at(row, col))
    }

    fn at(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    /// Check if a column is full: its topmost cell is occupied.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.cols {
            return true;
        }
        self.at(self.rows - 1, col) != Cell::Empty
    }

    /// Drop a piece in a column, returning the row where it landed.
    ///
    /// The piece lands in the lowest empty row, found by scanning from row 0
    /// upward. This preserves the gravity invariant by construction.
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= self.cols {
            return Err(MoveError::ColumnOutOfRange(col));
        }

        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull(col));
        }

        for row in 0..self.rows {
            if self.at(row, col) == Cell::Empty {
                self.cells[row * self.cols + col] = cell;
                return Ok(row);
            }
        }

        unreachable!("column with an empty top cell has an open slot");
    }

    /// Check if the board is completely full.
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| self.is_column_full(col))
    }

    /// Clear every cell, keeping the dimensions.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Check whether the piece at (row, col) completes a four-in-a-row.
    ///
    /// Only lines through this cell are examined: win detection runs after
    /// every placement, so any new line must pass through the newest piece.
    /// Each of the four orientations is scanned uniformly by walking its ray
    /// both ways and summing the runs.
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        let cell = self.at(row, col);
        if cell == Cell::Empty {
            return false;
        }

        DIRECTIONS.iter().any(|&(dr, dc)| {
            1 + self.run_length(row, col, dr, dc, cell)
                + self.run_length(row, col, -dr, -dc, cell)
                >= WIN_LEN
        })
    }

    /// Count matching cells along a ray from (row, col), excluding the
    /// starting cell itself.
    fn run_length(&self, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> usize {
        let mut count = 0;
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        while r >= 0
            && c >= 0
            && (r as usize) < self.rows
            && (c as usize) < self.cols
            && self.at(r as usize, c as usize) == cell
        {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }
}

impl Default for Board {
    /// The standard 6x7 board.
    fn default() -> Self {
        Board {
            rows: ROWS,
            cols: COLS,
            cells: vec![Cell::Empty; ROWS * COLS],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::default();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Ok(Cell::Empty));
            }
        }
    }

    #[test]
    fn test_rejects_small_dimensions() {
        assert_eq!(
            Board::new(3, 7),
            Err(EngineError::InvalidDimensions { rows: 3, cols: 7 })
        );
        assert_eq!(
            Board::new(6, 3),
            Err(EngineError::InvalidDimensions { rows: 6, cols: 3 })
        );
        assert!(Board::new(4, 4).is_ok());
    }

    #[test]
    fn test_drop_piece_stacks_from_bottom() {
        let mut board = Board::default();

        let row = board.drop_piece(3, Cell::Red).unwrap();
        assert_eq!(row, 0);
        assert_eq!(board.get(0, 3), Ok(Cell::Red));

        let row = board.drop_piece(3, Cell::Yellow).unwrap();
        assert_eq!(row, 1);
        assert_eq!(board.get(1, 3), Ok(Cell::Yellow));
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::default();

        for _ in 0..ROWS {
            board.drop_piece(0, Cell::Red).unwrap();
        }

        assert!(board.is_column_full(0));
        let before = board.clone();
        assert_eq!(
            board.drop_piece(0, Cell::Yellow),
            Err(MoveError::ColumnFull(0))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_column_out_of_range() {
        let mut board = Board::default();
        assert_eq!(
            board.drop_piece(7, Cell::Red),
            Err(MoveError::ColumnOutOfRange(7))
        );
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = Board::default();
        assert!(matches!(
            board.get(ROWS, 0),
            Err(EngineError::OutOfBounds { .. })
        ));
        assert!(matches!(
            board.get(0, COLS),
            Err(EngineError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::default();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.drop_piece(col, Cell::Red).unwrap();
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_clear() {
        let mut board = Board::default();
        board.drop_piece(2, Cell::Red).unwrap();
        board.clear();
        assert_eq!(board, Board::default());
    }

    #[test]
    fn test_gravity_invariant() {
        let mut board = Board::default();
        for &col in &[3, 3, 2, 6, 2, 2, 0, 3] {
            board.drop_piece(col, Cell::Red).unwrap();
        }

        for col in 0..COLS {
            let mut seen_empty = false;
            for row in 0..ROWS {
                let empty = board.get(row, col).unwrap() == Cell::Empty;
                assert!(!seen_empty || empty, "gap below a piece in column {col}");
                seen_empty |= empty;
            }
        }
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::default();
        for col in 0..4 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        assert!(board.check_win(0, 2)); // middle of the line
        assert!(board.check_win(0, 3)); // end of the line
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::default();
        for _ in 0..4 {
            board.drop_piece(3, Cell::Yellow).unwrap();
        }
        assert!(board.check_win(3, 3));
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::default();
        // Staircase rising to the right: Red at (0,0) (1,1) (2,2) (3,3).
        board.drop_piece(0, Cell::Red).unwrap();

        board.drop_piece(1, Cell::Yellow).unwrap();
        board.drop_piece(1, Cell::Red).unwrap();

        board.drop_piece(2, Cell::Yellow).unwrap();
        board.drop_piece(2, Cell::Yellow).unwrap();
        board.drop_piece(2, Cell::Red).unwrap();

        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        let row = board.drop_piece(3, Cell::Red).unwrap();

        assert!(board.check_win(row, 3));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::default();
        // Staircase falling to the right: Red at (3,3) (2,4) (1,5) (0,6).
        board.drop_piece(6, Cell::Red).unwrap();

        board.drop_piece(5, Cell::Yellow).unwrap();
        board.drop_piece(5, Cell::Red).unwrap();

        board.drop_piece(4, Cell::Yellow).unwrap();
        board.drop_piece(4, Cell::Yellow).unwrap();
        board.drop_piece(4, Cell::Red).unwrap();

        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        let row = board.drop_piece(3, Cell::Red).unwrap();

        assert!(board.check_win(row, 3));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::default();
        for col in 0..3 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        assert!(!board.check_win(0, 1));
    }

    #[test]
    fn test_win_on_minimum_board() {
        let mut board = Board::new(4, 4).unwrap();
        for _ in 0..4 {
            board.drop_piece(1, Cell::Red).unwrap();
        }
        assert!(board.check_win(3, 1));
    }
}
