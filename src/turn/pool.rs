//! Per-turn resource pool.
//!
//! Abilities accumulate damage, heal and currency here while the hand
//! resolves; attacks drain damage and the discard phase folds heal into
//! the player's health. A fresh pool starts every turn.

use serde::{Deserialize, Serialize};

/// The three counters of a resource pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resource {
    Damage,
    Heal,
    Currency,
}

/// Turn-scoped accumulators. All start at zero and are unbounded above.
///
/// Counters may be driven negative by `add`; callers that spend a
/// resource stop once it reaches zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePool {
    pub damage: i64,
    pub heal: i64,
    pub currency: i64,
}

impl ResourcePool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `delta` (possibly negative) to a counter.
    pub fn add(&mut self, resource: Resource, delta: i64) {
        *self.counter_mut(resource) += delta;
    }

    #[must_use]
    pub fn get(&self, resource: Resource) -> i64 {
        match resource {
            Resource::Damage => self.damage,
            Resource::Heal => self.heal,
            Resource::Currency => self.currency,
        }
    }

    /// Read a counter and reset it to zero.
    pub fn take(&mut self, resource: Resource) -> i64 {
        std::mem::take(self.counter_mut(resource))
    }

    fn counter_mut(&mut self, resource: Resource) -> &mut i64 {
        match resource {
            Resource::Damage => &mut self.damage,
            Resource::Heal => &mut self.heal,
            Resource::Currency => &mut self.currency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let pool = ResourcePool::new();
        assert_eq!(pool, ResourcePool { damage: 0, heal: 0, currency: 0 });
    }

    #[test]
    fn test_add_and_spend() {
        let mut pool = ResourcePool::new();

        pool.add(Resource::Damage, 7);
        pool.add(Resource::Currency, 3);
        pool.add(Resource::Damage, -4);

        assert_eq!(pool.get(Resource::Damage), 3);
        assert_eq!(pool.get(Resource::Currency), 3);
        assert_eq!(pool.get(Resource::Heal), 0);
    }

    #[test]
    fn test_take_resets() {
        let mut pool = ResourcePool::new();
        pool.add(Resource::Heal, 5);

        assert_eq!(pool.take(Resource::Heal), 5);
        assert_eq!(pool.heal, 0);
    }
}
