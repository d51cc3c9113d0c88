//! Per-frame driver
//!
//! Holds the one live `GameState`, the current input flags and the seeded
//! generator. Each `frame()` is one logical tick regardless of how much real
//! time has passed; pausing is simply not calling it.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::settings::GameParams;
use crate::sim::{GameState, RewardKind, TickInput, autopilot_input, reset, step};

/// Outcome of a headless run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub seed: u64,
    pub ticks: u64,
    pub score: u64,
    pub game_over: bool,
    /// (kind, caught) in ascending value order
    pub collection: Vec<(RewardKind, u32)>,
}

/// A play session
pub struct Session {
    pub state: GameState,
    pub params: GameParams,
    pub input: TickInput,
    seed: u64,
    rng: Pcg32,
}

impl Session {
    pub fn new(seed: u64, params: GameParams) -> Self {
        log::info!("Session started with seed {}", seed);
        Self {
            state: reset(),
            params,
            input: TickInput::default(),
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Latch the movement keys for the next frame
    pub fn set_input(&mut self, moving_left: bool, moving_right: bool) {
        self.input = TickInput::new(moving_left, moving_right);
    }

    /// Advance one tick with the latched input
    pub fn frame(&mut self) -> &GameState {
        let was_over = self.state.is_game_over();
        self.state = step(&self.state, &self.params, &self.input, &mut self.rng);
        if !was_over && self.state.is_game_over() {
            log::info!(
                "Session {} ended after {} ticks, score {}",
                self.seed,
                self.state.time_ticks,
                self.state.score
            );
        }
        &self.state
    }

    /// Play again after game over. Parameters and generator carry over.
    pub fn restart(&mut self) {
        log::info!("Restarting (previous score {})", self.state.score);
        self.state = reset();
        self.input = TickInput::default();
    }

    /// Run until game over or `max_ticks`, optionally letting the autopilot steer
    pub fn run_headless(&mut self, max_ticks: u64, autopilot: bool) -> RunSummary {
        let start = self.state.time_ticks;
        while !self.state.is_game_over() && self.state.time_ticks - start < max_ticks {
            if autopilot {
                self.input = autopilot_input(&self.state);
            }
            self.frame();
        }
        self.summary()
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            seed: self.seed,
            ticks: self.state.time_ticks,
            score: self.state.score,
            game_over: self.state.is_game_over(),
            collection: self.state.tally.iter().collect(),
        }
    }
}
