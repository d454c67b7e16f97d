//! Single-ply candidate evaluation
//!
//! This module measures, for a hypothetical mark at an empty cell, the
//! length and openness of the line it would extend in each of the four
//! axis directions, and combines the resulting threat scores into one
//! number per candidate:
//! - own offense at full weight
//! - the opponent's threat through the same cell at `DEFENSE_WEIGHT`,
//!   so the engine prefers advancing its own win over purely reactive
//!   blocking when both are comparable
//! - a small center-proximity bonus that only breaks ties between
//!   near-equal tactical scores

use crate::board::{Board, Mark, Pos};

use super::patterns::threat_score;

/// Direction vectors for line assessment (4 directions)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal down
    (1, -1), // Diagonal up
];

/// Weight applied to the opponent's threat through the evaluated cell
const DEFENSE_WEIGHT: f64 = 0.9;

/// Weight per step of center proximity
const CENTER_WEIGHT: f64 = 0.1;

/// Measured length and openness of the line through one cell in one
/// direction. Recomputed on every evaluation call, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineAssessment {
    /// Same-mark cells across both walk directions, the hypothetical
    /// placement included
    pub run_length: usize,
    /// How many of the two ends are unobstructed (0, 1 or 2)
    pub open_ends: u8,
}

/// Assess the line through `pos` in `dir`, treating `pos` as hypothetically
/// holding `mark`.
///
/// Walks up to `win_length - 1` steps in each sense of the direction. An
/// end is closed on the board edge or an opposing mark, open on an
/// in-bounds empty cell or on exhausting the step budget in bounds.
/// Callers only invoke this for empty cells; the cell itself is not
/// re-checked here.
pub fn assess(board: &Board, pos: Pos, dir: (i32, i32), mark: Mark) -> LineAssessment {
    let budget = board.win_length() - 1;
    let mut run_length = 1;
    let mut open_ends = 0;

    for sign in [1i32, -1] {
        let dr = dir.0 * sign;
        let dc = dir.1 * sign;
        let mut r = pos.row as i32 + dr;
        let mut c = pos.col as i32 + dc;
        let mut steps = 0;

        let open = loop {
            if steps >= budget {
                break true;
            }
            if !board.in_bounds(r, c) {
                break false;
            }
            match board.get(Pos::new(r as usize, c as usize)) {
                m if m == mark => {
                    run_length += 1;
                    steps += 1;
                    r += dr;
                    c += dc;
                }
                Mark::Empty => break true,
                _ => break false,
            }
        };
        if open {
            open_ends += 1;
        }
    }

    LineAssessment {
        run_length,
        open_ends,
    }
}

/// Score a hypothetical placement of `mark` at `pos`.
///
/// Sums, over the four directions, the own threat score plus the weighted
/// opponent threat score, then adds the center-proximity bonus.
pub fn evaluate(board: &Board, pos: Pos, mark: Mark) -> f64 {
    let opponent = mark.opponent();
    let win_length = board.win_length();
    let mut score = 0.0;

    for &dir in &DIRECTIONS {
        let own = assess(board, pos, dir, mark);
        score += f64::from(threat_score(own.run_length, own.open_ends, win_length));

        let theirs = assess(board, pos, dir, opponent);
        score += DEFENSE_WEIGHT * f64::from(threat_score(theirs.run_length, theirs.open_ends, win_length));
    }

    let span = board.rows().max(board.cols());
    let dist = pos.manhattan(board.center());
    score + (span as f64 - dist as f64) * CENTER_WEIGHT
}
