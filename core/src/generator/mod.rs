use crate::*;
pub use random::*;

mod random;

/// Strategy for dealing a fresh board from a game configuration.
pub trait BoardGenerator {
    fn generate(self, config: GameConfig) -> Result<Board>;
}
