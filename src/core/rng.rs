//! Deterministic shuffling for draw-pile recovery.
//!
//! The engine never reaches for ambient randomness. Every shuffle goes
//! through a `Shuffler`, which `GameState` owns as a seeded `GameRng` by
//! default. Tests swap in `KeepOrder` (or any scripted permutation) to make
//! reshuffles reproducible.
//!
//! ```
//! use rust_deckbattler::core::{EntityId, GameRng, Shuffler};
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! let mut left: Vec<_> = (0..10).map(EntityId).collect();
//! let mut right = left.clone();
//!
//! a.shuffle(&mut left);
//! b.shuffle(&mut right);
//! assert_eq!(left, right);
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::entity::EntityId;

/// Permutation service used whenever a pile is shuffled.
///
/// Implementations must produce a permutation of the input: same elements,
/// any order.
pub trait Shuffler {
    fn shuffle(&mut self, cards: &mut [EntityId]);
}

/// Seeded ChaCha8 shuffler.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Shuffler for GameRng {
    fn shuffle(&mut self, cards: &mut [EntityId]) {
        use rand::seq::SliceRandom;
        cards.shuffle(&mut self.inner);
    }
}

/// Identity permutation. Reshuffles become order-preserving moves.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeepOrder;

impl Shuffler for KeepOrder {
    fn shuffle(&mut self, _cards: &mut [EntityId]) {}
}
