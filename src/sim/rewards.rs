//! Reward catalog and weighted reward selection
//!
//! Every reward kind is weighted by `total_value / value`, so a kind worth ten
//! times as much shows up a tenth as often. The whole economy follows from the
//! value column; there are no hand-tuned probabilities.

use std::sync::LazyLock;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Collectible reward kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RewardKind {
    Bill,
    Treasure,
    Gem,
}

impl RewardKind {
    /// Every kind, in declaration order
    pub const ALL: [RewardKind; 3] = [RewardKind::Bill, RewardKind::Treasure, RewardKind::Gem];

    /// Score contribution when caught
    pub const fn value(self) -> u32 {
        match self {
            RewardKind::Bill => 1,
            RewardKind::Treasure => 3,
            RewardKind::Gem => 10,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            RewardKind::Bill => "Bill",
            RewardKind::Treasure => "Treasure",
            RewardKind::Gem => "Gem",
        }
    }

    /// Glyph for presentation layers
    pub const fn symbol(self) -> &'static str {
        match self {
            RewardKind::Bill => "💵",
            RewardKind::Treasure => "💰",
            RewardKind::Gem => "💎",
        }
    }

    /// Stable slot index, used by `Tally`
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            RewardKind::Bill => 0,
            RewardKind::Treasure => 1,
            RewardKind::Gem => 2,
        }
    }
}

/// Kinds sorted by ascending value, with their normalized selection probabilities
#[derive(Debug, Clone)]
pub struct RewardCatalog {
    sorted: [RewardKind; 3],
    probabilities: [f64; 3],
}

impl RewardCatalog {
    pub fn new() -> Self {
        let mut sorted = RewardKind::ALL;
        sorted.sort_by_key(|kind| kind.value());

        let total_value: f64 = sorted.iter().map(|kind| kind.value() as f64).sum();
        let inverse = sorted.map(|kind| total_value / kind.value() as f64);
        let total_inverse: f64 = inverse.iter().sum();
        let probabilities = inverse.map(|weight| weight / total_inverse);

        log::debug!("Reward probabilities: {:?} -> {:?}", sorted, probabilities);

        Self {
            sorted,
            probabilities,
        }
    }

    /// Kinds in ascending value order
    pub fn sorted(&self) -> &[RewardKind; 3] {
        &self.sorted
    }

    /// Selection probability per kind, aligned with `sorted()`
    pub fn probabilities(&self) -> &[f64; 3] {
        &self.probabilities
    }

    /// Probability of drawing a specific kind
    pub fn probability_of(&self, kind: RewardKind) -> f64 {
        self.sorted
            .iter()
            .position(|k| *k == kind)
            .map(|i| self.probabilities[i])
            .unwrap_or(0.0)
    }

    /// Map a uniform draw in [0, 1) onto a kind by walking the cumulative mass.
    ///
    /// Rounding can leave the cumulative sum a hair short of 1.0. When nothing
    /// matches, the lowest-value kind is returned.
    pub fn select(&self, r: f64) -> RewardKind {
        let mut cumulative = 0.0;
        for (kind, p) in self.sorted.iter().zip(self.probabilities.iter()) {
            cumulative += p;
            if r < cumulative {
                return *kind;
            }
        }
        self.sorted[0]
    }
}

impl Default for RewardCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide catalog, built on first use
pub static REWARD_CATALOG: LazyLock<RewardCatalog> = LazyLock::new(RewardCatalog::new);

/// Select a reward kind for a given uniform draw
#[inline]
pub fn pick_reward_with(r: f64) -> RewardKind {
    REWARD_CATALOG.select(r)
}

/// Draw a reward kind, weighted by inverse value
pub fn pick_random_reward<R: Rng + ?Sized>(rng: &mut R) -> RewardKind {
    pick_reward_with(rng.random::<f64>())
}
