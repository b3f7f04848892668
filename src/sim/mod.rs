//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Engines only change state inside `step`/`reset`/`set_params`
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod bouncing_ball;
pub mod clock;
pub mod collision;
pub mod pendulum;
pub mod projectile;
pub mod rng;
pub mod scene;
pub mod trace;

pub use bouncing_ball::{BallSample, BouncingBallEngine, BouncingBallParams};
pub use clock::SimClock;
pub use collision::{
    CollisionResult, Container, project_inside, reflect_velocity, reflect_with_elasticity,
    resolve_container_collision,
};
pub use pendulum::{PendulumEngine, PendulumParams, PendulumSample};
pub use projectile::{FlightStatus, ProjectileEngine, ProjectileParams, ProjectileSample};
pub use rng::{FixedAngle, LaunchAngleSource, RngState, SeededAngles};
pub use scene::{Engine, Scene};
pub use trace::TraceBuffer;
