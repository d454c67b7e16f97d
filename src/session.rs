//! Game session state machine
//!
//! One session owns one board and alternates turns between the human and
//! the AI. Board mutation, win detection and move evaluation are
//! synchronous; there is exactly one turn owner at a time, enforced by
//! the phase transitions rather than locks.
//!
//! The AI turn is preceded by a fixed short pause, purely for perceived
//! pacing. The pending computation is tagged with the session generation
//! and checked again when the move is applied, so a reset while the
//! pause is running discards the stale move instead of mutating a board
//! the user already abandoned.

use std::time::{Duration, Instant};

use tracing::info;

use crate::board::{Board, Mark, Pos};
use crate::engine::{Difficulty, MoveEngine};
use crate::error::SessionError;
use crate::rules::find_winning_line;

/// Pause before an AI move is applied (perceived pacing only)
const AI_MOVE_DELAY: Duration = Duration::from_millis(400);

/// Session phase. `Won` and `Draw` are terminal; only `reset` leaves them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    AwaitingHuman,
    AwaitingAi,
    Won { winner: Mark, line: Vec<Pos> },
    Draw,
}

/// Pending AI computation, tagged with the generation it was scheduled in
#[derive(Debug, Clone, Copy)]
struct PendingAi {
    generation: u64,
    ready_at: Instant,
}

/// One game of human versus AI on a single board.
pub struct GameSession {
    board: Board,
    human_mark: Mark,
    difficulty: Difficulty,
    phase: Phase,
    generation: u64,
    pending_ai: Option<PendingAi>,
    last_move: Option<Pos>,
    ai_delay: Duration,
}

impl GameSession {
    pub fn new(board: Board, human_mark: Mark, difficulty: Difficulty) -> Self {
        debug_assert!(human_mark != Mark::Empty);
        Self {
            board,
            human_mark,
            difficulty,
            phase: Phase::AwaitingHuman,
            generation: 0,
            pending_ai: None,
            last_move: None,
            ai_delay: AI_MOVE_DELAY,
        }
    }

    /// Override the AI pacing delay. Tests use `Duration::ZERO`.
    #[must_use]
    pub fn with_ai_delay(mut self, delay: Duration) -> Self {
        self.ai_delay = delay;
        self
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    #[inline]
    pub fn human_mark(&self) -> Mark {
        self.human_mark
    }

    #[inline]
    pub fn ai_mark(&self) -> Mark {
        self.human_mark.opponent()
    }

    /// Place the human's mark and hand the turn to the AI.
    ///
    /// Occupied and out-of-bounds cells are rejected without mutating
    /// state; the caller re-prompts.
    pub fn place_human(&mut self, pos: Pos) -> Result<(), SessionError> {
        match self.phase {
            Phase::Won { .. } | Phase::Draw => return Err(SessionError::GameOver),
            Phase::AwaitingAi => return Err(SessionError::NotYourTurn),
            Phase::AwaitingHuman => {}
        }

        self.board.place(pos, self.human_mark)?;
        self.last_move = Some(pos);

        if self.settle_after(pos, self.human_mark) {
            return Ok(());
        }

        self.phase = Phase::AwaitingAi;
        self.pending_ai = Some(PendingAi {
            generation: self.generation,
            ready_at: Instant::now() + self.ai_delay,
        });
        Ok(())
    }

    /// Apply the AI's move once its pacing delay has elapsed.
    ///
    /// Returns the applied cell, or `None` while the pause is still
    /// running, no AI turn is pending, or the pending computation turned
    /// out to be stale.
    pub fn poll_ai(&mut self, engine: &mut MoveEngine) -> Option<Pos> {
        let pending = self.pending_ai?;

        if pending.generation != self.generation {
            // Scheduled before a reset; the board it targeted is gone.
            info!(
                stale = pending.generation,
                current = self.generation,
                "discarding stale AI move"
            );
            self.pending_ai = None;
            return None;
        }
        if Instant::now() < pending.ready_at {
            return None;
        }
        self.pending_ai = None;

        let ai_mark = self.ai_mark();
        let pos = match engine.best_move(&self.board, ai_mark, self.difficulty) {
            Ok(pos) => pos,
            Err(_) => {
                self.phase = Phase::Draw;
                return None;
            }
        };

        // The engine only proposes empty in-bounds cells
        self.board
            .place(pos, ai_mark)
            .expect("engine proposed an illegal cell");
        self.last_move = Some(pos);

        if !self.settle_after(pos, ai_mark) {
            self.phase = Phase::AwaitingHuman;
        }
        Some(pos)
    }

    /// Suggest a move for the human. Same engine call as opponent play,
    /// with the human's mark substituted.
    pub fn hint(&self, engine: &mut MoveEngine) -> Option<Pos> {
        if self.phase != Phase::AwaitingHuman {
            return None;
        }
        engine
            .best_move(&self.board, self.human_mark, self.difficulty)
            .ok()
    }

    /// Start over with a fresh board of the same configuration.
    ///
    /// Bumps the generation so any still-pending AI computation is
    /// discarded at apply time.
    pub fn reset(&mut self) {
        self.board = Board::new(
            self.board.rows(),
            self.board.cols(),
            self.board.win_length(),
        );
        self.phase = Phase::AwaitingHuman;
        self.generation += 1;
        self.pending_ai = None;
        self.last_move = None;
        info!(generation = self.generation, "session reset");
    }

    /// Win/draw check after a placement. Returns true when the game ended.
    fn settle_after(&mut self, pos: Pos, mark: Mark) -> bool {
        if let Some(line) = find_winning_line(&self.board, pos, mark) {
            info!(winner = ?mark, "game won");
            self.phase = Phase::Won { winner: mark, line };
            return true;
        }
        if self.board.is_full() {
            self.phase = Phase::Draw;
            return true;
        }
        false
    }
}
