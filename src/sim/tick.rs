//! Fixed logical step simulation
//!
//! Core game loop that advances simulation deterministically.

use rand::Rng;

use super::collision::{below_playfield, cart_catches, credit_reward};
use super::rewards::pick_random_reward;
use super::state::{FallingHazard, FallingReward, GamePhase, GameState};
use crate::consts::*;
use crate::settings::GameParams;
use glam::Vec2;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Left movement key held
    pub moving_left: bool,
    /// Right movement key held
    pub moving_right: bool,
}

impl TickInput {
    pub fn new(moving_left: bool, moving_right: bool) -> Self {
        Self {
            moving_left,
            moving_right,
        }
    }
}

/// Advance the game by one logical tick, returning the next state.
///
/// `prev` is left untouched. Once the game is over this returns an identical
/// copy and draws nothing from `rng`.
pub fn step<R: Rng + ?Sized>(prev: &GameState, params: &GameParams, input: &TickInput, rng: &mut R) -> GameState {
    let mut state = prev.clone();
    if state.is_game_over() {
        return state;
    }
    tick(&mut state, params, input, rng);
    state
}

fn tick<R: Rng + ?Sized>(state: &mut GameState, params: &GameParams, input: &TickInput, rng: &mut R) {
    state.time_ticks += 1;

    state.cart.advance(
        input.moving_left,
        input.moving_right,
        params.cart_accel,
        params.cart_friction,
        params.cart_max_speed,
    );

    state.goblin.advance();

    // Spawn order matters for replay: spawn roll, x, kind, then hazard roll
    if rng.random::<f32>() < params.reward_spawn_rate {
        let x = rng.random::<f32>() * (PLAYFIELD_WIDTH - REWARD_SIZE);
        let kind = pick_random_reward(rng);
        log::debug!("tick {}: spawn {:?} at x={:.1}", state.time_ticks, kind, x);
        state.rewards.push(FallingReward {
            pos: Vec2::new(x, -REWARD_SIZE),
            kind,
        });
    }

    if rng.random::<f32>() < params.hazard_spawn_rate {
        log::debug!("tick {}: goblin drops bomb at x={:.1}", state.time_ticks, state.goblin.x);
        state.hazards.push(FallingHazard {
            pos: Vec2::new(state.goblin.x, HAZARD_SIZE),
        });
    }

    let cart = state.cart;
    let fall = params.fall_speed;

    let score = &mut state.score;
    let tally = &mut state.tally;
    state.rewards.retain_mut(|reward| {
        reward.pos.y += fall;
        if cart_catches(&cart, reward.pos, REWARD_SIZE) {
            credit_reward(score, tally, reward.kind);
            return false;
        }
        !below_playfield(reward.pos)
    });

    let mut hit = false;
    state.hazards.retain_mut(|hazard| {
        hazard.pos.y += fall;
        if cart_catches(&cart, hazard.pos, HAZARD_SIZE) {
            hit = true;
            return false;
        }
        !below_playfield(hazard.pos)
    });

    if hit {
        state.phase = GamePhase::GameOver;
        log::info!("Game over at tick {} with score {}", state.time_ticks, state.score);
    }
}

/// How far above the cart's top line a bomb counts as a threat
const AUTOPILOT_LOOKAHEAD: f32 = 180.0;
/// Extra horizontal clearance kept from threatening bombs
const AUTOPILOT_MARGIN: f32 = 20.0;
/// Ticks of current velocity to extrapolate when steering
const AUTOPILOT_LEAD_TICKS: f32 = 8.0;
/// Dead zone around the steering target
const AUTOPILOT_DEADBAND: f32 = 6.0;

/// Demo mode: derive movement flags from the current state.
///
/// Dodges the lowest bomb that is about to land on the cart, otherwise chases
/// the lowest reward that is still catchable.
pub fn autopilot_input(state: &GameState) -> TickInput {
    let cart = &state.cart;
    let top_line = PLAYFIELD_HEIGHT - CART_HEIGHT;

    let threat = state
        .hazards
        .iter()
        .filter(|h| {
            let bottom = h.pos.y + HAZARD_SIZE;
            bottom <= top_line
                && bottom > top_line - AUTOPILOT_LOOKAHEAD
                && h.pos.x + HAZARD_SIZE > cart.left() - AUTOPILOT_MARGIN
                && h.pos.x < cart.right() + AUTOPILOT_MARGIN
        })
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));

    if let Some(hazard) = threat {
        let hazard_center = hazard.pos.x + HAZARD_SIZE / 2.0;
        let mut go_right = hazard_center < cart.x;
        // Pinned against a wall: the only way out is back past the bomb
        if go_right && cart.x >= PLAYFIELD_WIDTH - HALF_CART_WIDTH - 1.0 {
            go_right = false;
        } else if !go_right && cart.x <= HALF_CART_WIDTH + 1.0 {
            go_right = true;
        }
        return TickInput::new(!go_right, go_right);
    }

    let target = state
        .rewards
        .iter()
        .filter(|r| r.pos.y + REWARD_SIZE <= top_line)
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
        .map(|r| r.pos.x + REWARD_SIZE / 2.0);

    let Some(target) = target else {
        return TickInput::default();
    };

    let predicted = cart.x + cart.velocity * AUTOPILOT_LEAD_TICKS;
    if predicted < target - AUTOPILOT_DEADBAND {
        TickInput::new(false, true)
    } else if predicted > target + AUTOPILOT_DEADBAND {
        TickInput::new(true, false)
    } else {
        TickInput::default()
    }
}
