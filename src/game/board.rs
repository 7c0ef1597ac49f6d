use super::player::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Number of cells on the board; a game with this many moves has filled it.
pub const CELLS: usize = ROWS * COLS;

/// Run length needed to win.
const CONNECT: usize = 4;

/// Scan directions as (row step, column step): horizontal, vertical,
/// diagonal down-right, diagonal up-right.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// The player owning this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Player::Red),
            Cell::Yellow => Some(Player::Yellow),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
    move_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column is full")]
    ColumnFull,

    #[error("column must be between 0 and {}", COLS - 1)]
    InvalidColumn,

    #[error("game is already over")]
    GameOver,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
            move_count: 0,
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Number of discs placed so far
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Check if a column is full. Columns off the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Number of discs stacked in a column
    pub fn column_height(&self, col: usize) -> usize {
        (0..ROWS)
            .rev()
            .take_while(|&row| self.cells[row][col] != Cell::Empty)
            .count()
    }

    /// Drop a disc in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn);
        }

        let row = (0..ROWS)
            .rev()
            .find(|&row| self.cells[row][col] == Cell::Empty)
            .ok_or(MoveError::ColumnFull)?;

        self.cells[row][col] = player.to_cell();
        self.move_count += 1;
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.move_count == CELLS
    }

    /// Check whether `player` has four in a row anywhere on the board
    pub fn is_winning_move(&self, player: Player) -> bool {
        self.winning_line(player).is_some()
    }

    /// Locate a run of four discs belonging to `player`.
    ///
    /// Every in-bounds window start is tried for each direction; the first
    /// complete run found is returned as (row, col) pairs in scan order.
    pub fn winning_line(&self, player: Player) -> Option<[(usize, usize); CONNECT]> {
        let cell = player.to_cell();

        for (dr, dc) in DIRECTIONS {
            for row in 0..ROWS {
                for col in 0..COLS {
                    if let Some(line) = self.run_from(row, col, dr, dc, cell) {
                        return Some(line);
                    }
                }
            }
        }

        None
    }

    /// Check the window of four cells starting at (row, col) along (dr, dc)
    fn run_from(
        &self,
        row: usize,
        col: usize,
        dr: isize,
        dc: isize,
        cell: Cell,
    ) -> Option<[(usize, usize); CONNECT]> {
        let mut line = [(0, 0); CONNECT];

        for (step, slot) in line.iter_mut().enumerate() {
            let r = row as isize + dr * step as isize;
            let c = col as isize + dc * step as isize;
            if r < 0 || r >= ROWS as isize || c < 0 || c >= COLS as isize {
                return None;
            }
            let (r, c) = (r as usize, c as usize);
            if self.cells[r][c] != cell {
                return None;
            }
            *slot = (r, c);
        }

        Some(line)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Place a disc directly, ignoring gravity. Only used to build
    /// arbitrary positions.
    fn place(board: &mut Board, row: usize, col: usize, player: Player) {
        board.cells[row][col] = player.to_cell();
        board.move_count += 1;
    }

    /// Build a board from a top-to-bottom layout of `R`, `Y` and `.`.
    fn from_layout(layout: &[&str; ROWS]) -> Board {
        let mut board = Board::new();
        for (row, line) in layout.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                match ch {
                    'R' => place(&mut board, row, col, Player::Red),
                    'Y' => place(&mut board, row, col, Player::Yellow),
                    _ => {}
                }
            }
        }
        board
    }

    fn assert_columns_contiguous(board: &Board) {
        for col in 0..COLS {
            let height = board.column_height(col);
            for row in 0..ROWS - height {
                assert_eq!(
                    board.get(row, col),
                    Cell::Empty,
                    "floating disc at ({row}, {col})"
                );
            }
        }
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.move_count(), 0);
        assert!(!board.is_full());
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::new();

        // Drop first disc in column 3
        let row = board.drop_piece(3, Player::Red).unwrap();
        assert_eq!(row, 5); // Should land at bottom
        assert_eq!(board.get(5, 3), Cell::Red);

        // Drop second disc in same column
        let row = board.drop_piece(3, Player::Yellow).unwrap();
        assert_eq!(row, 4); // Should land on top of first disc
        assert_eq!(board.get(4, 3), Cell::Yellow);
        assert_eq!(board.get(5, 3), Cell::Red);
        assert_eq!(board.move_count(), 2);
    }

    #[test]
    fn test_drop_leaves_other_columns_untouched() {
        let mut board = Board::new();
        board.drop_piece(2, Player::Red).unwrap();
        board.drop_piece(4, Player::Yellow).unwrap();

        for row in 0..ROWS {
            for col in [0, 1, 3, 5, 6] {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();

        // Fill column 0 with alternating players
        let mut player = Player::Red;
        for _ in 0..ROWS {
            board.drop_piece(0, player).unwrap();
            player = player.other();
        }

        assert!(board.is_column_full(0));
        let before = board;
        assert_eq!(board.drop_piece(0, Player::Yellow), Err(MoveError::ColumnFull));
        assert_eq!(board, before);
        assert_eq!(board.move_count(), ROWS);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new();
        assert_eq!(board.drop_piece(7, Player::Red), Err(MoveError::InvalidColumn));
        assert_eq!(board.drop_piece(usize::MAX, Player::Red), Err(MoveError::InvalidColumn));
        assert_eq!(board, Board::new());
        assert!(board.is_column_full(7));
    }

    #[test]
    fn test_columns_stay_contiguous() {
        let mut board = Board::new();
        let mut player = Player::Red;
        for &col in &[3, 3, 0, 6, 3, 2, 2, 5, 6, 6, 1, 3, 4, 0] {
            board.drop_piece(col, player).unwrap();
            player = player.other();
            assert_columns_contiguous(&board);
        }
        assert_eq!(board.column_height(3), 4);
        assert_eq!(board.column_height(6), 3);
        assert_eq!(board.move_count(), 14);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                assert!(!board.is_full());
                board.drop_piece(col, Player::Red).unwrap();
            }
        }
        assert_eq!(board.move_count(), CELLS);
        assert!(board.is_full());
    }

    #[test]
    fn test_empty_board_has_no_win() {
        let board = Board::new();
        assert!(!board.is_winning_move(Player::Red));
        assert!(!board.is_winning_move(Player::Yellow));
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new();
        // Create horizontal line at bottom row
        for col in 2..6 {
            board.drop_piece(col, Player::Red).unwrap();
        }
        assert!(board.is_winning_move(Player::Red));
        assert!(!board.is_winning_move(Player::Yellow));
        assert_eq!(
            board.winning_line(Player::Red),
            Some([(5, 2), (5, 3), (5, 4), (5, 5)])
        );
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        // Four drops in column 3 stack on rows 5, 4, 3, 2
        for _ in 0..4 {
            board.drop_piece(3, Player::Yellow).unwrap();
        }
        assert!(board.is_winning_move(Player::Yellow));
        assert_eq!(
            board.winning_line(Player::Yellow),
            Some([(2, 3), (3, 3), (4, 3), (5, 3)])
        );
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::new();
        // Create diagonal / pattern
        board.drop_piece(0, Player::Red).unwrap();

        board.drop_piece(1, Player::Yellow).unwrap();
        board.drop_piece(1, Player::Red).unwrap();

        board.drop_piece(2, Player::Yellow).unwrap();
        board.drop_piece(2, Player::Yellow).unwrap();
        board.drop_piece(2, Player::Red).unwrap();

        board.drop_piece(3, Player::Yellow).unwrap();
        board.drop_piece(3, Player::Yellow).unwrap();
        board.drop_piece(3, Player::Yellow).unwrap();
        assert!(!board.is_winning_move(Player::Red));
        board.drop_piece(3, Player::Red).unwrap();

        assert!(board.is_winning_move(Player::Red));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::new();
        // Create diagonal \ pattern
        board.drop_piece(6, Player::Red).unwrap();

        board.drop_piece(5, Player::Yellow).unwrap();
        board.drop_piece(5, Player::Red).unwrap();

        board.drop_piece(4, Player::Yellow).unwrap();
        board.drop_piece(4, Player::Yellow).unwrap();
        board.drop_piece(4, Player::Red).unwrap();

        board.drop_piece(3, Player::Yellow).unwrap();
        board.drop_piece(3, Player::Yellow).unwrap();
        board.drop_piece(3, Player::Yellow).unwrap();
        board.drop_piece(3, Player::Red).unwrap();

        assert!(board.is_winning_move(Player::Red));
        assert_eq!(
            board.winning_line(Player::Red),
            Some([(2, 3), (3, 4), (4, 5), (5, 6)])
        );
    }

    #[test]
    fn test_diagonal_cells_set_directly() {
        let mut board = Board::new();
        for (row, col) in [(2, 1), (3, 2), (4, 3), (5, 4)] {
            place(&mut board, row, col, Player::Yellow);
        }
        assert!(board.is_winning_move(Player::Yellow));
        assert!(!board.is_winning_move(Player::Red));
    }

    #[test]
    fn test_win_at_board_edges() {
        let board = from_layout(&[
            "...R...",
            "...R...",
            "...R...",
            "...R...",
            ".......",
            ".......",
        ]);
        assert!(board.is_winning_move(Player::Red));

        let board = from_layout(&[
            "...YYYY",
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
        ]);
        assert!(board.is_winning_move(Player::Yellow));

        let board = from_layout(&[
            "...R...",
            "..R....",
            ".R.....",
            "R......",
            ".......",
            ".......",
        ]);
        assert!(board.is_winning_move(Player::Red));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Player::Red).unwrap();
        }
        for _ in 0..3 {
            board.drop_piece(6, Player::Red).unwrap();
        }
        assert!(!board.is_winning_move(Player::Red));
    }

    #[test]
    fn test_broken_runs_do_not_win() {
        let board = from_layout(&[
            ".......",
            ".......",
            "...R...",
            "..R....",
            "RRYRRR.",
            "YYRYYYR",
        ]);
        assert!(!board.is_winning_move(Player::Red));
        assert!(!board.is_winning_move(Player::Yellow));
    }

    #[test]
    fn test_alternating_bottom_row() {
        let mut board = Board::new();
        let mut player = Player::Red;
        for col in 0..COLS {
            board.drop_piece(col, player).unwrap();
            player = player.other();
        }
        assert_eq!(board.move_count(), 7);
        assert!(!board.is_full());
        assert!(!board.is_winning_move(Player::Red));
        assert!(!board.is_winning_move(Player::Yellow));
    }

    #[test]
    fn test_full_board_without_four_is_draw() {
        let board = from_layout(&[
            "RYRYRYY",
            "YRRRYRR",
            "YYYRYYY",
            "YYRRYYR",
            "RYRYRYY",
            "RRRYRRR",
        ]);
        assert!(board.is_full());
        assert!(!board.is_winning_move(Player::Red));
        assert!(!board.is_winning_move(Player::Yellow));
    }

    #[test]
    fn test_cell_owner() {
        assert_eq!(Cell::Empty.owner(), None);
        assert_eq!(Cell::Red.owner(), Some(Player::Red));
        assert_eq!(Cell::Yellow.owner(), Some(Player::Yellow));
    }
}
