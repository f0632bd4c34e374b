use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("position outside board")]
    OutOfBounds,
    #[error("position already matched")]
    AlreadyMatched,
    #[error("already picked that card")]
    SameCard,
    #[error("board must hold a positive, even number of cards, got {0}")]
    OddCardCount(CellCount),
    #[error("board needs {needed} pairs but only {available} faces exist")]
    AlphabetExhausted {
        needed: CellCount,
        available: CellCount,
    },
    #[error("board shape does not match declared size")]
    InvalidBoardShape,
    #[error("board symbols are not arranged in pairs")]
    UnpairedCards,
    #[error("card faces must be uppercase letters")]
    InvalidFace,
    #[error("game already ended, no new picks are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
