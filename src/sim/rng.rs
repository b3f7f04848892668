//! Injectable launch-angle sources
//!
//! Production scenes draw a uniformly random launch angle; tests plug in a
//! fixed seed (or a fixed angle) so trajectories can be asserted exactly.

use std::f32::consts::TAU;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Supplies the launch direction (radians) each time a scene resets
pub trait LaunchAngleSource {
    fn next_angle(&mut self) -> f32;
}

/// RNG seed wrapper for serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Pick a fresh seed from the thread RNG
    pub fn from_entropy() -> Self {
        Self::new(rand::rng().random())
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Uniform angles in [0, 2π) from a seeded PCG stream
#[derive(Debug, Clone)]
pub struct SeededAngles {
    state: RngState,
    rng: Pcg32,
}

impl SeededAngles {
    pub fn new(seed: u64) -> Self {
        Self::from_state(RngState::new(seed))
    }

    pub fn from_entropy() -> Self {
        Self::from_state(RngState::from_entropy())
    }

    fn from_state(state: RngState) -> Self {
        Self {
            rng: state.to_rng(),
            state,
        }
    }

    pub fn seed(&self) -> u64 {
        self.state.seed
    }

    /// Restart the stream from `seed`
    pub fn reseed(&mut self, seed: u64) {
        *self = Self::new(seed);
    }
}

impl LaunchAngleSource for SeededAngles {
    fn next_angle(&mut self) -> f32 {
        self.rng.random_range(0.0..TAU)
    }
}

/// Always launches in the same direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAngle(pub f32);

impl LaunchAngleSource for FixedAngle {
    fn next_angle(&mut self) -> f32 {
        self.0
    }
}
