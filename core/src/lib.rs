#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use card::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use level::*;
pub use parse::*;
pub use types::*;

mod card;
mod engine;
mod error;
mod generator;
mod level;
mod parse;
mod types;

/// Board dimensions requested for a game.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: Coord,
    pub cols: Coord,
}

impl GameConfig {
    pub const fn new_unchecked(rows: Coord, cols: Coord) -> Self {
        Self { rows, cols }
    }

    pub fn new(rows: Coord, cols: Coord) -> Result<Self> {
        let config = Self::new_unchecked(rows, cols);
        config.validate()?;
        Ok(config)
    }

    /// Checks that the dimensions describe a dealable board: a positive,
    /// even card count with no more pairs than the alphabet can label.
    pub fn validate(&self) -> Result<()> {
        let cards = self.total_cards();
        if cards == 0 || cards % 2 != 0 {
            return Err(GameError::OddCardCount(cards));
        }
        if self.pair_count() > ALPHABET_LEN {
            return Err(GameError::AlphabetExhausted {
                needed: self.pair_count(),
                available: ALPHABET_LEN,
            });
        }
        Ok(())
    }

    pub const fn total_cards(&self) -> CellCount {
        mult(self.rows, self.cols)
    }

    pub const fn pair_count(&self) -> CellCount {
        self.total_cards() / 2
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < self.rows && coords.1 < self.cols {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }
}

/// Shuffled arrangement of paired symbols, immutable once dealt.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cards: Array2<Symbol>,
}

impl Board {
    /// Builds a board from an explicit layout, checking that every symbol
    /// on it occurs exactly twice.
    pub fn from_cards(cards: Array2<Symbol>) -> Result<Self> {
        let board = Self { cards };
        board.config().validate()?;

        let mut seen = [0 as CellCount; ALPHABET_LEN as usize];
        for &card in board.cards.iter() {
            seen[card.index() as usize] += 1;
        }
        if seen.iter().any(|&count| count != 0 && count != 2) {
            return Err(GameError::UnpairedCards);
        }

        Ok(board)
    }

    /// Builds a board from rows of face letters, mainly for fixed layouts.
    pub fn from_faces(rows: &[&[char]]) -> Result<Self> {
        let col_count = rows.first().map_or(0, |row| row.len());
        if rows.iter().any(|row| row.len() != col_count) {
            return Err(GameError::InvalidBoardShape);
        }

        let mut cards = Vec::with_capacity(rows.len() * col_count);
        for row in rows {
            for &face in *row {
                cards.push(Symbol::from_char(face).ok_or(GameError::InvalidFace)?);
            }
        }

        let cards = Array2::from_shape_vec((rows.len(), col_count), cards)
            .map_err(|_| GameError::InvalidBoardShape)?;
        Self::from_cards(cards)
    }

    pub fn config(&self) -> GameConfig {
        let dim = self.cards.dim();
        GameConfig::new_unchecked(dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn size(&self) -> Coord2 {
        let config = self.config();
        (config.rows, config.cols)
    }

    pub fn total_cards(&self) -> CellCount {
        self.config().total_cards()
    }

    pub fn pair_count(&self) -> CellCount {
        self.config().pair_count()
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        self.config().validate_coords(coords)
    }

    pub fn symbol_at(&self, coords: Coord2) -> Symbol {
        self[coords]
    }
}

impl Index<Coord2> for Board {
    type Output = Symbol;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.cards[(row as usize, col as usize)]
    }
}

/// Result of comparing the two cards of a completed turn.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PairOutcome {
    Matched,
    NoMatch,
}

impl PairOutcome {
    pub const fn is_match(self) -> bool {
        matches!(self, Self::Matched)
    }
}

/// Progress made by a single accepted pick.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PickOutcome {
    /// The first card of the turn is face up, waiting for its partner.
    FirstUp(Coord2),
    /// Both cards were compared and the turn is over.
    Resolved {
        first: Coord2,
        second: Coord2,
        outcome: PairOutcome,
    },
}

impl PickOutcome {
    pub const fn ends_turn(self) -> bool {
        matches!(self, Self::Resolved { .. })
    }
}
