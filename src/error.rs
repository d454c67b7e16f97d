//! Error types for board mutation, move selection and session control

use thiserror::Error;

/// Errors from placing a mark on the board.
///
/// `OutOfBounds` is a caller bug (the UI only offers in-bounds cells);
/// `Occupied` is recoverable — reject the input and re-prompt without
/// mutating state.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    #[error("cell ({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("cell ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },
}

/// The board has no empty candidate cell left. Callers map this to a
/// draw outcome, never a crash.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("no legal move remains on the board")]
pub struct NoLegalMoveError;

/// Errors from driving a game session out of turn order.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("game is already over")]
    GameOver,

    #[error("not the human player's turn")]
    NotYourTurn,

    #[error(transparent)]
    Place(#[from] PlaceError),
}
