use thiserror::Error;

use crate::moves::Move;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmazonsError {
    #[error("no moves to undo")]
    UndoUnderflow,

    #[error("could not parse '{0}' as a square, expected a1 to j10")]
    InvalidSquare(String),

    #[error("could not parse '{0}' as a move, expected e.g. d1-d4(d1)")]
    InvalidMove(String),

    #[error("illegal move {0}")]
    IllegalMove(Move),
}
