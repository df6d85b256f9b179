use crate::board::{Color, Square};

/// Why a requested move was refused.
///
/// Every variant means "illegal"; `moves::is_legal` collapses them to `false`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("square ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("no piece on {0}")]
    EmptySquare(Square),

    #[error("it is {0}'s turn")]
    WrongTurn(Color),

    #[error("{0} is occupied by a piece of the same side")]
    SelfCapture(Square),

    #[error("piece cannot move from {from} to {to}")]
    ShapeInvalid { from: Square, to: Square },

    #[error("path from {from} to {to} is blocked")]
    Blocked { from: Square, to: Square },
}

pub type MoveResult<T> = Result<T, MoveError>;
