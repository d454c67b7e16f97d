//! Grid board parameterized over size and winning run length

use serde::{Deserialize, Serialize};

use super::{Mark, Pos};
use crate::error::PlaceError;

/// Game board for one session.
///
/// The grid never resizes after creation; `place` is the only mutation
/// point. Snapshots serialize with serde so the enclosing session store
/// can persist them as opaque structured state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    win_length: usize,
    cells: Vec<Mark>,
}

impl Board {
    /// Create an empty board.
    ///
    /// `win_length` must be at least 2 and must fit on the longer axis.
    pub fn new(rows: usize, cols: usize, win_length: usize) -> Self {
        debug_assert!(rows > 0 && cols > 0);
        debug_assert!(win_length >= 2 && win_length <= rows.max(cols));
        Self {
            rows,
            cols,
            win_length,
            cells: vec![Mark::Empty; rows * cols],
        }
    }

    /// 15x15 board, five in a row (classic Caro/Gomoku)
    pub fn gomoku() -> Self {
        Self::new(15, 15, 5)
    }

    /// 10x10 board, four in a row
    pub fn caro_four() -> Self {
        Self::new(10, 10, 4)
    }

    /// 3x3 board, three in a row (Tic-Tac-Toe)
    pub fn tic_tac_toe() -> Self {
        Self::new(3, 3, 3)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Check signed coordinates against the grid bounds
    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && (row as usize) < self.rows && col >= 0 && (col as usize) < self.cols
    }

    /// Get mark at position. Position must be in bounds.
    #[inline]
    pub fn get(&self, pos: Pos) -> Mark {
        self.cells[self.idx(pos)]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Mark::Empty
    }

    /// Center cell (integer division), the fixed opening move
    #[inline]
    pub fn center(&self) -> Pos {
        Pos::new(self.rows / 2, self.cols / 2)
    }

    /// Place a mark.
    ///
    /// The UI layer is expected to only offer empty, in-bounds cells;
    /// the errors here are a safety net, not a control-flow path.
    pub fn place(&mut self, pos: Pos, mark: Mark) -> Result<(), PlaceError> {
        debug_assert!(mark != Mark::Empty);
        if pos.row >= self.rows || pos.col >= self.cols {
            return Err(PlaceError::OutOfBounds {
                row: pos.row,
                col: pos.col,
            });
        }
        if !self.is_empty(pos) {
            return Err(PlaceError::Occupied {
                row: pos.row,
                col: pos.col,
            });
        }
        let idx = self.idx(pos);
        self.cells[idx] = mark;
        Ok(())
    }

    /// Total marks on board
    #[inline]
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|&&m| m != Mark::Empty).count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|&m| m == Mark::Empty)
    }

    /// Check if no empty cell remains
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&m| m != Mark::Empty)
    }

    #[inline]
    fn idx(&self, pos: Pos) -> usize {
        debug_assert!(pos.row < self.rows && pos.col < self.cols);
        pos.row * self.cols + pos.col
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::gomoku();
        assert!(board.is_board_empty());
        assert_eq!(board.mark_count(), 0);
        assert_eq!(board.win_length(), 5);
    }

    #[test]
    fn test_place_and_get() {
        let mut board = Board::gomoku();
        board.place(Pos::new(7, 7), Mark::X).unwrap();
        assert_eq!(board.get(Pos::new(7, 7)), Mark::X);
        assert_eq!(board.get(Pos::new(7, 8)), Mark::Empty);
        assert_eq!(board.mark_count(), 1);
    }

    #[test]
    fn test_place_occupied_fails() {
        let mut board = Board::tic_tac_toe();
        board.place(Pos::new(1, 1), Mark::X).unwrap();
        let err = board.place(Pos::new(1, 1), Mark::O).unwrap_err();
        assert_eq!(err, PlaceError::Occupied { row: 1, col: 1 });
        // The failed placement must not mutate the cell
        assert_eq!(board.get(Pos::new(1, 1)), Mark::X);
    }

    #[test]
    fn test_place_out_of_bounds_fails() {
        let mut board = Board::tic_tac_toe();
        let err = board.place(Pos::new(3, 0), Mark::X).unwrap_err();
        assert_eq!(err, PlaceError::OutOfBounds { row: 3, col: 0 });
    }

    #[test]
    fn test_center_per_variant() {
        assert_eq!(Board::gomoku().center(), Pos::new(7, 7));
        assert_eq!(Board::caro_four().center(), Pos::new(5, 5));
        assert_eq!(Board::tic_tac_toe().center(), Pos::new(1, 1));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::tic_tac_toe();
        for row in 0..3 {
            for col in 0..3 {
                board.place(Pos::new(row, col), Mark::X).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(!board.is_board_empty());
    }

    #[test]
    fn test_in_bounds() {
        let board = Board::caro_four();
        assert!(board.in_bounds(0, 0));
        assert!(board.in_bounds(9, 9));
        assert!(!board.in_bounds(-1, 0));
        assert!(!board.in_bounds(0, 10));
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let mut board = Board::caro_four();
        board.place(Pos::new(4, 4), Mark::X).unwrap();
        board.place(Pos::new(4, 5), Mark::O).unwrap();

        let json = serde_json::to_string(&board).unwrap();
        let restored: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.get(Pos::new(4, 4)), Mark::X);
        assert_eq!(restored.get(Pos::new(4, 5)), Mark::O);
        assert_eq!(restored.win_length(), 4);
    }
}
