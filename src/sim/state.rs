//! Game state and core simulation types
//!
//! Everything a frame needs to render, and everything the next step reads,
//! lives in `GameState`. The driver replaces it wholesale each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rewards::RewardKind;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Playing,
    /// A hazard reached the cart; stepping is a no-op until reset
    GameOver,
}

/// The player's cart, sliding along the bottom edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    /// Horizontal center
    pub x: f32,
    /// Horizontal velocity (pixels per tick)
    pub velocity: f32,
}

impl Default for Cart {
    fn default() -> Self {
        Self {
            x: PLAYFIELD_WIDTH / 2.0,
            velocity: 0.0,
        }
    }
}

impl Cart {
    /// Apply one tick of thrust, friction and the speed cap, then move.
    ///
    /// Walls clamp the position only; velocity survives wall contact.
    pub fn advance(&mut self, moving_left: bool, moving_right: bool, accel: f32, friction: f32, max_speed: f32) {
        if moving_left {
            self.velocity -= accel;
        }
        if moving_right {
            self.velocity += accel;
        }
        self.velocity *= friction;
        self.velocity = self.velocity.min(max_speed).max(-max_speed);

        self.x = (self.x + self.velocity)
            .min(PLAYFIELD_WIDTH - HALF_CART_WIDTH)
            .max(HALF_CART_WIDTH);
    }

    /// Left edge of the cart footprint
    #[inline]
    pub fn left(&self) -> f32 {
        self.x - HALF_CART_WIDTH
    }

    /// Right edge of the cart footprint
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + HALF_CART_WIDTH
    }
}

/// Horizontal heading of the goblin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }

    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }
}

/// The bomb-dropping goblin that paces along the top
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Goblin {
    pub x: f32,
    pub facing: Facing,
}

impl Goblin {
    /// Step once; on reaching an edge, turn around and step from the old spot
    pub fn advance(&mut self) {
        let next = self.x + self.facing.sign() * GOBLIN_STEP;
        if next <= 0.0 || next >= PLAYFIELD_WIDTH {
            self.facing = self.facing.flipped();
            self.x += self.facing.sign() * GOBLIN_STEP;
        } else {
            self.x = next;
        }
    }
}

/// A reward on its way down
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FallingReward {
    /// Top-left corner of the sprite
    pub pos: Vec2,
    pub kind: RewardKind,
}

/// A bomb on its way down
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FallingHazard {
    /// Top-left corner of the sprite
    pub pos: Vec2,
}

/// Lifetime catch counts per reward kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Tally {
    counts: [u32; 3],
}

impl Tally {
    #[inline]
    pub fn get(&self, kind: RewardKind) -> u32 {
        self.counts[kind.index()]
    }

    #[inline]
    pub fn increment(&mut self, kind: RewardKind) {
        self.counts[kind.index()] += 1;
    }

    /// Total items caught across all kinds
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// (kind, count) pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (RewardKind, u32)> + '_ {
        RewardKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GameState {
    /// Current phase
    pub phase: GamePhase,
    /// Score
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Player cart
    pub cart: Cart,
    /// The goblin
    pub goblin: Goblin,
    /// Falling rewards, in spawn order
    pub rewards: Vec<FallingReward>,
    /// Falling hazards, in spawn order
    pub hazards: Vec<FallingHazard>,
    /// Catch counts per reward kind
    pub tally: Tally,
}

impl GameState {
    /// Fresh state: centered cart, goblin at the left edge heading right
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

/// Canonical starting state, used at launch and on restart
pub fn reset() -> GameState {
    GameState::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_canonical() {
        let state = reset();
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(!state.is_game_over());
        assert_eq!(state.score, 0);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.cart.x, PLAYFIELD_WIDTH / 2.0);
        assert_eq!(state.cart.velocity, 0.0);
        assert_eq!(state.goblin.x, 0.0);
        assert_eq!(state.goblin.facing, Facing::Right);
        assert!(state.rewards.is_empty());
        assert!(state.hazards.is_empty());
        for kind in RewardKind::ALL {
            assert_eq!(state.tally.get(kind), 0);
        }
        assert_eq!(reset(), reset());
    }

    #[test]
    fn test_cart_friction_and_cap() {
        let mut cart = Cart::default();
        cart.advance(false, true, 0.5, 0.98, 5.0);
        assert!((cart.velocity - 0.49).abs() < 1e-6);
        assert!((cart.x - (PLAYFIELD_WIDTH / 2.0 + 0.49)).abs() < 1e-4);

        for _ in 0..200 {
            cart.advance(false, true, 0.5, 0.98, 5.0);
        }
        assert_eq!(cart.velocity, 5.0);
    }

    #[test]
    fn test_cart_opposing_keys_cancel() {
        let mut cart = Cart::default();
        cart.advance(true, true, 0.5, 0.98, 5.0);
        assert_eq!(cart.velocity, 0.0);
        assert_eq!(cart.x, PLAYFIELD_WIDTH / 2.0);
    }

    #[test]
    fn test_cart_wall_keeps_velocity() {
        let mut cart = Cart {
            x: HALF_CART_WIDTH + 1.0,
            velocity: -4.0,
        };
        cart.advance(false, false, 0.5, 1.0, 5.0);
        assert_eq!(cart.x, HALF_CART_WIDTH);
        assert_eq!(cart.velocity, -4.0);

        // Can accelerate away on the next tick
        cart.advance(false, true, 5.0, 1.0, 5.0);
        assert!(cart.x > HALF_CART_WIDTH);
    }

    #[test]
    fn test_goblin_bounces_off_left_edge() {
        let mut goblin = Goblin {
            x: 2.0,
            facing: Facing::Left,
        };
        goblin.advance();
        assert_eq!(goblin.facing, Facing::Right);
        assert_eq!(goblin.x, 4.0);
    }

    #[test]
    fn test_goblin_bounces_off_right_edge() {
        let mut goblin = Goblin {
            x: PLAYFIELD_WIDTH - 1.0,
            facing: Facing::Right,
        };
        goblin.advance();
        assert_eq!(goblin.facing, Facing::Left);
        assert_eq!(goblin.x, PLAYFIELD_WIDTH - 3.0);
    }

    #[test]
    fn test_goblin_first_step_from_start() {
        let mut goblin = Goblin::default();
        goblin.advance();
        assert_eq!(goblin.x, GOBLIN_STEP);
        assert_eq!(goblin.facing, Facing::Right);
    }

    #[test]
    fn test_tally_counts() {
        let mut tally = Tally::default();
        tally.increment(RewardKind::Gem);
        tally.increment(RewardKind::Gem);
        tally.increment(RewardKind::Bill);
        assert_eq!(tally.get(RewardKind::Gem), 2);
        assert_eq!(tally.get(RewardKind::Treasure), 0);
        assert_eq!(tally.total(), 3);
        let pairs: Vec<_> = tally.iter().collect();
        assert_eq!(
            pairs,
            vec![(RewardKind::Bill, 1), (RewardKind::Treasure, 0), (RewardKind::Gem, 2)]
        );
    }
}
