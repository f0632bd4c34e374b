use alloc::vec::Vec;

use super::*;

/// Deals the first `pair_count` alphabet symbols twice and lays the deck
/// out as a uniformly shuffled row-major grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ShuffledBoardGenerator {
    seed: u64,
}

impl ShuffledBoardGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for ShuffledBoardGenerator {
    fn generate(self, config: GameConfig) -> Result<Board> {
        use rand::prelude::*;

        config.validate()?;

        let pair_count = config.pair_count();
        let mut deck: Vec<Symbol> = Symbol::alphabet()
            .take(pair_count as usize)
            .flat_map(|symbol| [symbol, symbol])
            .collect();

        let mut rng = SmallRng::seed_from_u64(self.seed);
        deck.shuffle(&mut rng);

        log::debug!("dealt {} pairs from seed {}", pair_count, self.seed);

        let shape = (config.rows as usize, config.cols as usize);
        let cards = Array2::from_shape_vec(shape, deck).map_err(|_| GameError::InvalidBoardShape)?;
        Board::from_cards(cards)
    }
}
