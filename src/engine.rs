//! Move engine facade: candidate filtering, evaluation and difficulty policy
//!
//! The engine answers one query — "best move for mark M" — by chaining
//! the neighbor filter, the single-ply evaluator and the difficulty
//! policy. The same call with the human's mark substituted implements
//! the hint feature, which keeps hints and opponent play strategically
//! consistent.
//!
//! # Example
//!
//! ```
//! use caro::{Board, Difficulty, Mark, MoveEngine, Pos};
//!
//! let mut board = Board::gomoku();
//! let mut engine = MoveEngine::with_seed(42);
//!
//! board.place(Pos::new(7, 7), Mark::X).unwrap();
//!
//! let reply = engine.best_move(&board, Mark::O, Difficulty::Hard).unwrap();
//! board.place(reply, Mark::O).unwrap();
//! ```

use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::debug;

use crate::board::{Board, Mark, Pos};
use crate::error::NoLegalMoveError;
use crate::eval::evaluate;

/// Chebyshev radius around existing marks that yields candidate cells
const CANDIDATE_RADIUS: i32 = 2;

/// Probability that the easy tier discards the ranking
const EASY_SLIP_CHANCE: f64 = 0.3;

/// Pool the easy tier samples from when it slips
const EASY_POOL: usize = 5;

/// Difficulty tier.
///
/// Tiers differ only in the post-evaluation selection policy, never in
/// evaluation depth or quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Nominal search depth associated with the tier.
    ///
    /// Evaluation is single-ply at every tier; the value is carried for
    /// display and logging only.
    pub fn depth(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown difficulty '{0}', expected easy, medium or hard")]
pub struct ParseDifficultyError(String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(ParseDifficultyError(other.to_string())),
        }
    }
}

/// One evaluated candidate cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateScore {
    pub pos: Pos,
    pub score: f64,
}

/// Collect every empty cell with at least one mark within Chebyshev
/// distance `CANDIDATE_RADIUS`, in row-major order.
///
/// On an entirely empty board this returns the single center cell: the
/// opening move is fixed, not evaluated. Restricting candidates to the
/// frontier of played cells keeps evaluation cost proportional to the
/// game so far rather than the board area.
pub fn candidate_moves(board: &Board) -> Vec<Pos> {
    if board.is_board_empty() {
        return vec![board.center()];
    }

    let mut moves = Vec::new();
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            let pos = Pos::new(row, col);
            if board.is_empty(pos) && has_neighbor(board, pos) {
                moves.push(pos);
            }
        }
    }
    moves
}

fn has_neighbor(board: &Board, pos: Pos) -> bool {
    for dr in -CANDIDATE_RADIUS..=CANDIDATE_RADIUS {
        for dc in -CANDIDATE_RADIUS..=CANDIDATE_RADIUS {
            if dr == 0 && dc == 0 {
                continue;
            }
            let r = pos.row as i32 + dr;
            let c = pos.col as i32 + dc;
            if board.in_bounds(r, c) && !board.is_empty(Pos::new(r as usize, c as usize)) {
                return true;
            }
        }
    }
    false
}

/// Heuristic move engine.
///
/// Holds the random source for the easy tier's selection noise. Inject a
/// fixed seed via [`MoveEngine::with_seed`] to make selection fully
/// deterministic in tests.
pub struct MoveEngine {
    rng: StdRng,
}

impl MoveEngine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Evaluate all candidates for `mark`, sorted descending by score.
    ///
    /// The sort is stable, so ties keep the row-major generation order and
    /// the result is deterministic for a fixed board.
    #[must_use]
    pub fn ranked_moves(&self, board: &Board, mark: Mark) -> Vec<CandidateScore> {
        let mut scored: Vec<CandidateScore> = candidate_moves(board)
            .into_iter()
            .map(|pos| CandidateScore {
                pos,
                score: evaluate(board, pos, mark),
            })
            .collect();
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored
    }

    /// Best move for `mark` under the given difficulty tier.
    ///
    /// The easy tier alone injects randomness: with probability
    /// `EASY_SLIP_CHANCE` it picks uniformly among the top
    /// `EASY_POOL` candidates instead of the top one. Higher tiers always
    /// return the top-scored candidate.
    ///
    /// # Errors
    ///
    /// `NoLegalMoveError` on a full board; callers treat it as a draw.
    pub fn best_move(
        &mut self,
        board: &Board,
        mark: Mark,
        difficulty: Difficulty,
    ) -> Result<Pos, NoLegalMoveError> {
        if board.is_board_empty() {
            return Ok(board.center());
        }

        let ranked = self.ranked_moves(board, mark);
        let Some(top) = ranked.first() else {
            return Err(NoLegalMoveError);
        };

        if difficulty == Difficulty::Easy && self.rng.gen_bool(EASY_SLIP_CHANCE) {
            let pool = ranked.len().min(EASY_POOL);
            let picked = ranked[self.rng.gen_range(0..pool)];
            debug!(
                row = picked.pos.row,
                col = picked.pos.col,
                score = picked.score,
                pool,
                "easy tier slipped to a pooled candidate"
            );
            return Ok(picked.pos);
        }

        debug!(
            row = top.pos.row,
            col = top.pos.col,
            score = top.score,
            candidates = ranked.len(),
            depth = difficulty.depth(),
            "selected top candidate"
        );
        Ok(top.pos)
    }
}

impl Default for MoveEngine {
    fn default() -> Self {
        Self::new()
    }
}
