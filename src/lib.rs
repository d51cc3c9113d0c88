//! Money Cart - A falling-object catcher
//!
//! Core modules:
//! - `sim`: Deterministic simulation (cart physics, spawning, collisions, scoring)
//! - `settings`: Tunable simulation parameters and their loading
//! - `session`: Per-frame driver that owns state, input flags and the RNG

pub mod session;
pub mod settings;
pub mod sim;

pub use session::{RunSummary, Session};
pub use settings::{ConfigError, GameParams};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (pixels, origin top-left, y grows downward)
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 500.0;

    /// Cart footprint, anchored to the bottom edge and centered on `cart.x`
    pub const CART_WIDTH: f32 = 100.0;
    pub const CART_HEIGHT: f32 = 60.0;
    pub const HALF_CART_WIDTH: f32 = CART_WIDTH / 2.0;

    /// Falling sprite sizes (square, anchored at their top-left corner)
    pub const REWARD_SIZE: f32 = 40.0;
    pub const HAZARD_SIZE: f32 = 30.0;

    /// Goblin horizontal step per tick (not parameter-controlled)
    pub const GOBLIN_STEP: f32 = 2.0;
}
