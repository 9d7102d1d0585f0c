//! Board model and win detection.
//!
//! 3x3 grid, indexed 0-8 row-major.

/// Board side length
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A player's mark on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

/// The board: 9 cells, None = empty
pub type Board = [Option<Mark>; CELL_COUNT];

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
/// Win detection scans these in table order and reports the first match.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Cell index for (row, col)
pub fn cell_index(row: usize, col: usize) -> usize {
    row * BOARD_SIZE + col
}

/// Check if the board has no empty cells left
pub fn is_full(board: &Board) -> bool {
    board.iter().all(|cell| cell.is_some())
}

/// Indices of all currently empty cells, ascending
pub fn empty_cells(board: &Board) -> Vec<usize> {
    board
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_none())
        .map(|(i, _)| i)
        .collect()
}

/// Terminal result of a board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Three in a row for `mark` along `line`
    Win { mark: Mark, line: [usize; 3] },
    /// Board full, no line completed
    Draw,
}

/// Determine whether the board is finished.
///
/// Returns `None` while the game is ongoing. Total over any board; a board
/// with two completed lines (unreachable through legal play) reports the
/// first line in `LINES` order.
pub fn outcome(board: &Board) -> Option<Outcome> {
    for line in LINES {
        if let Some(mark) = board[line[0]] {
            if board[line[1]] == Some(mark) && board[line[2]] == Some(mark) {
                return Some(Outcome::Win { mark, line });
            }
        }
    }
    if is_full(board) {
        return Some(Outcome::Draw);
    }
    None
}
