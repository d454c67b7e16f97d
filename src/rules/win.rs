//! Win condition checking generalized over board size and run length
//!
//! The check always starts from the just-placed cell and scans outward in
//! both senses of the four axis directions, so it is O(win_length) per
//! direction regardless of board size. It runs after every placement,
//! human or AI.

use crate::board::{Board, Mark, Pos};

/// Direction vectors for line checking (4 directions)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal down
    (1, -1), // Diagonal up
];

/// Fast win check at a specific position. No allocation.
#[inline]
pub fn is_winning_move(board: &Board, pos: Pos, mark: Mark) -> bool {
    let need = board.win_length();
    for &(dr, dc) in &DIRECTIONS {
        let count = 1 + count_run(board, pos, dr, dc, mark) + count_run(board, pos, -dr, -dc, mark);
        if count >= need {
            return true;
        }
    }
    false
}

/// Find the winning line through a just-placed cell.
///
/// Returns the exact participating cells of the first direction pair whose
/// combined run (origin counted once) reaches `win_length`, in board order.
/// Callers use the line to highlight the win. Returns `None` if no direction
/// qualifies.
pub fn find_winning_line(board: &Board, pos: Pos, mark: Mark) -> Option<Vec<Pos>> {
    let need = board.win_length();
    for &(dr, dc) in &DIRECTIONS {
        let mut line = vec![pos];

        // Extend in negative direction first so the line stays ordered
        for step in 1..need as i32 {
            let r = pos.row as i32 - dr * step;
            let c = pos.col as i32 - dc * step;
            if !board.in_bounds(r, c) {
                break;
            }
            let prev = Pos::new(r as usize, c as usize);
            if board.get(prev) == mark {
                line.insert(0, prev);
            } else {
                break;
            }
        }

        // Extend in positive direction
        for step in 1..need as i32 {
            let r = pos.row as i32 + dr * step;
            let c = pos.col as i32 + dc * step;
            if !board.in_bounds(r, c) {
                break;
            }
            let next = Pos::new(r as usize, c as usize);
            if board.get(next) == mark {
                line.push(next);
            } else {
                break;
            }
        }

        if line.len() >= need {
            return Some(line);
        }
    }
    None
}

/// Count consecutive same-mark cells walking away from `pos` (exclusive),
/// capped at `win_length - 1` steps. Edge, out-of-bounds and opposing
/// marks all stop the count.
fn count_run(board: &Board, pos: Pos, dr: i32, dc: i32, mark: Mark) -> usize {
    let mut count = 0;
    let mut r = pos.row as i32 + dr;
    let mut c = pos.col as i32 + dc;
    while count < board.win_length() - 1
        && board.in_bounds(r, c)
        && board.get(Pos::new(r as usize, c as usize)) == mark
    {
        count += 1;
        r += dr;
        c += dc;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(board: &mut Board, cells: &[(usize, usize)], mark: Mark) {
        for &(row, col) in cells {
            board.place(Pos::new(row, col), mark).unwrap();
        }
    }

    #[test]
    fn test_horizontal_five() {
        let mut board = Board::gomoku();
        fill(&mut board, &[(7, 0), (7, 1), (7, 2), (7, 3), (7, 4)], Mark::X);
        assert!(is_winning_move(&board, Pos::new(7, 4), Mark::X));
        let line = find_winning_line(&board, Pos::new(7, 4), Mark::X).unwrap();
        assert_eq!(line, vec![
            Pos::new(7, 0),
            Pos::new(7, 1),
            Pos::new(7, 2),
            Pos::new(7, 3),
            Pos::new(7, 4),
        ]);
    }

    #[test]
    fn test_detection_from_any_cell_in_run() {
        // A finished run is reported no matter which of its cells was
        // the most recently placed one.
        let mut board = Board::gomoku();
        fill(&mut board, &[(3, 3), (4, 4), (5, 5), (6, 6), (7, 7)], Mark::O);
        for i in 3..8 {
            assert!(
                is_winning_move(&board, Pos::new(i, i), Mark::O),
                "run not detected from ({i}, {i})"
            );
        }
    }

    #[test]
    fn test_vertical_and_diagonal_up() {
        let mut board = Board::caro_four();
        fill(&mut board, &[(2, 5), (3, 5), (4, 5), (5, 5)], Mark::X);
        assert!(is_winning_move(&board, Pos::new(3, 5), Mark::X));

        let mut board = Board::caro_four();
        fill(&mut board, &[(6, 2), (5, 3), (4, 4), (3, 5)], Mark::O);
        assert!(is_winning_move(&board, Pos::new(4, 4), Mark::O));
    }

    #[test]
    fn test_one_short_is_not_a_win() {
        // win_length - 1 marks hemmed in by both board edges
        let mut board = Board::tic_tac_toe();
        fill(&mut board, &[(0, 0), (0, 1)], Mark::X);
        assert!(!is_winning_move(&board, Pos::new(0, 1), Mark::X));
        assert!(find_winning_line(&board, Pos::new(0, 0), Mark::X).is_none());
    }

    #[test]
    fn test_edge_bounded_short_run_is_not_a_win() {
        // A diagonal of exactly win_length - 1 cells hemmed in by the
        // board edge on both ends
        let mut board = Board::gomoku();
        fill(&mut board, &[(11, 0), (12, 1), (13, 2), (14, 3)], Mark::X);
        for &(row, col) in &[(11, 0), (12, 1), (13, 2), (14, 3)] {
            assert!(!is_winning_move(&board, Pos::new(row, col), Mark::X));
        }
    }

    #[test]
    fn test_mixed_run_never_wins() {
        // X X O X X spans five cells but is no win for either mark
        let mut board = Board::gomoku();
        fill(&mut board, &[(7, 0), (7, 1), (7, 3), (7, 4)], Mark::X);
        fill(&mut board, &[(7, 2)], Mark::O);
        for col in 0..5 {
            let mark = board.get(Pos::new(7, col));
            assert!(!is_winning_move(&board, Pos::new(7, col), mark));
        }
    }

    #[test]
    fn test_opposing_mark_stops_count() {
        let mut board = Board::caro_four();
        fill(&mut board, &[(5, 1), (5, 2), (5, 3)], Mark::X);
        fill(&mut board, &[(5, 0), (5, 4)], Mark::O);
        assert!(!is_winning_move(&board, Pos::new(5, 2), Mark::X));
    }

    #[test]
    fn test_win_at_board_edge() {
        let mut board = Board::gomoku();
        fill(
            &mut board,
            &[(14, 10), (14, 11), (14, 12), (14, 13), (14, 14)],
            Mark::O,
        );
        assert!(is_winning_move(&board, Pos::new(14, 12), Mark::O));
    }

    #[test]
    fn test_overline_reports_whole_run() {
        // Six in a row: the reported line carries all participating cells
        let mut board = Board::gomoku();
        fill(
            &mut board,
            &[(6, 2), (6, 3), (6, 4), (6, 5), (6, 6), (6, 7)],
            Mark::X,
        );
        let line = find_winning_line(&board, Pos::new(6, 4), Mark::X).unwrap();
        assert!(line.len() >= 5);
        assert!(line.contains(&Pos::new(6, 2)));
    }

    #[test]
    fn test_tic_tac_toe_column() {
        let mut board = Board::tic_tac_toe();
        fill(&mut board, &[(0, 2), (1, 2), (2, 2)], Mark::O);
        let line = find_winning_line(&board, Pos::new(1, 2), Mark::O).unwrap();
        assert_eq!(line.len(), 3);
    }
}
