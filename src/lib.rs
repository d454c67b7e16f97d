//! Caro move engine
//!
//! A Gomoku-family move engine generalized over board size and winning
//! run length, powering the Caro and Tic-Tac-Toe variants:
//! - 15x15, five in a row
//! - 10x10, four in a row
//! - 3x3, three in a row
//!
//! Win detection scans outward from the just-placed mark, so it stays
//! O(win_length) per move regardless of board size. The opponent is a
//! single-ply heuristic evaluator: candidates near existing marks are
//! scored for offense, weighted defense and center proximity, and the
//! difficulty tiers differ only in how the ranked list is sampled.
//!
//! # Architecture
//!
//! - [`board`]: grid representation and placement
//! - [`rules`]: win condition checking
//! - [`eval`]: line assessment and threat-tier scoring
//! - [`engine`]: candidate filtering, difficulty policy, move selection
//! - [`session`]: turn state machine with cancellable AI pacing
//!
//! # Quick Start
//!
//! ```
//! use caro::{Board, Difficulty, Mark, MoveEngine, Pos};
//!
//! let mut board = Board::gomoku();
//! let mut engine = MoveEngine::with_seed(7);
//!
//! board.place(Pos::new(7, 7), Mark::X).unwrap();
//!
//! // AI responds as O; the same call with Mark::X would be the hint.
//! let reply = engine.best_move(&board, Mark::O, Difficulty::Medium).unwrap();
//! board.place(reply, Mark::O).unwrap();
//! ```

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod session;

// Re-export commonly used types for convenience
pub use board::{Board, Mark, Pos};
pub use engine::{candidate_moves, CandidateScore, Difficulty, MoveEngine};
pub use error::{NoLegalMoveError, PlaceError, SessionError};
pub use session::{GameSession, Phase};
