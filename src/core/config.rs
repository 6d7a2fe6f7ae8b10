//! Table configuration.
//!
//! Everything the engine treats as a tunable constant lives here. The
//! defaults match the standard two-player setup: 50 health, 5-card hands
//! and a 5-card shop display.

use serde::{Deserialize, Serialize};

/// Table-wide configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Cards drawn into hand at every refresh.
    pub hand_size: usize,

    /// Number of face-up cards the shop keeps on display.
    pub shop_display_size: usize,

    /// Health each player starts with.
    pub starting_health: i64,

    /// Seed for the table's reshuffle RNG.
    /// Same seed produces the same reshuffles.
    pub seed: u64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            hand_size: 5,
            shop_display_size: 5,
            starting_health: 50,
            seed: 42,
        }
    }
}

impl TableConfig {
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    #[must_use]
    pub fn with_shop_display_size(mut self, size: usize) -> Self {
        self.shop_display_size = size;
        self
    }

    #[must_use]
    pub fn with_starting_health(mut self, health: i64) -> Self {
        self.starting_health = health;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
