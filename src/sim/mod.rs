//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed logical step per call, never scaled by wall-clock time
//! - Randomness only through an injected `Rng`
//! - `step` never mutates its input state
//! - No rendering or platform dependencies

pub mod collision;
pub mod rewards;
pub mod state;
pub mod tick;

pub use collision::{cart_catches, credit_reward};
pub use rewards::{REWARD_CATALOG, RewardCatalog, RewardKind, pick_random_reward, pick_reward_with};
pub use state::{Cart, FallingHazard, FallingReward, Facing, GamePhase, GameState, Goblin, Tally, reset};
pub use tick::{TickInput, autopilot_input, step};
