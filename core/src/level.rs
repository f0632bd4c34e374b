use serde::{Deserialize, Serialize};

use crate::GameConfig;

/// Built-in difficulty catalog, ordered easiest first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    Easy,
    Medium,
    Hard,
}

impl Level {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    pub const fn name(self) -> &'static str {
        use Level::*;
        match self {
            Easy => "Easy",
            Medium => "Medium",
            Hard => "Hard",
        }
    }

    pub const fn config(self) -> GameConfig {
        use Level::*;
        match self {
            Easy => GameConfig::new_unchecked(2, 2),
            Medium => GameConfig::new_unchecked(4, 4),
            Hard => GameConfig::new_unchecked(4, 6),
        }
    }
}
