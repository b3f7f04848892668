//! Ball bouncing inside a circular container
//!
//! Semi-implicit Euler under gravity, then a wall check against the
//! container. Time is measured in frame units (one unit ≈ 16 ms) and gravity
//! is scaled by `BALL_GRAVITY_SCALE`, so the fall rate is tuned per frame
//! rather than per real second.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Container, project_inside, resolve_container_collision};
use super::rng::{LaunchAngleSource, SeededAngles};
use super::scene::{Engine, Scene};
use crate::consts::*;
use crate::error::{Result, SimError, require_finite, require_non_negative};
use crate::unit_from_angle;

/// Ball and container parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BouncingBallParams {
    /// Downward acceleration (m/s²), scaled by `BALL_GRAVITY_SCALE` per frame
    pub gravity: f32,
    /// Restitution applied on wall contact. Not clamped.
    pub elasticity: f32,
    /// Ball radius (px)
    pub ball_radius: f32,
    /// Launch speed (px per frame unit)
    pub initial_speed: f32,
    pub container_center: Vec2,
    pub container_radius: f32,
}

impl Default for BouncingBallParams {
    fn default() -> Self {
        Self {
            gravity: EARTH_GRAVITY,
            elasticity: 0.7,
            ball_radius: 20.0,
            initial_speed: 2.0,
            container_center: Vec2::new(CONTAINER_CENTER_X, CONTAINER_CENTER_Y),
            container_radius: CONTAINER_RADIUS,
        }
    }
}

impl BouncingBallParams {
    pub fn validate(&self) -> Result<()> {
        require_finite("gravity", self.gravity)?;
        require_finite("elasticity", self.elasticity)?;
        require_non_negative("ball_radius", self.ball_radius)?;
        require_non_negative("initial_speed", self.initial_speed)?;
        require_finite("container_center.x", self.container_center.x)?;
        require_finite("container_center.y", self.container_center.y)?;
        require_non_negative("container_radius", self.container_radius)?;
        if self.container_radius == 0.0 {
            return Err(SimError::domain("container radius is zero"));
        }
        if self.container_radius <= self.ball_radius {
            return Err(SimError::domain(format!(
                "ball radius {} does not fit in container radius {}",
                self.ball_radius, self.container_radius
            )));
        }
        Ok(())
    }

    pub fn container(&self) -> Container {
        Container::new(self.container_center, self.container_radius)
    }
}

/// Ball state after a step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallSample {
    pub position: Vec2,
    pub velocity: Vec2,
}

/// Bouncing ball with an injectable launch direction
#[derive(Debug, Clone)]
pub struct BouncingBallEngine<A: LaunchAngleSource = SeededAngles> {
    params: BouncingBallParams,
    pos: Vec2,
    vel: Vec2,
    angles: A,
    launch_angle: f32,
    bounces: u64,
}

impl BouncingBallEngine<SeededAngles> {
    /// Create with a seeded launch direction, or a random one if `seed` is `None`
    pub fn new(params: BouncingBallParams, seed: Option<u64>) -> Result<Self> {
        let angles = match seed {
            Some(seed) => SeededAngles::new(seed),
            None => SeededAngles::from_entropy(),
        };
        Self::with_angle_source(params, angles)
    }

    pub fn seed(&self) -> u64 {
        self.angles.seed()
    }

    /// Restart the launch-angle stream; takes effect on the next reset
    pub fn reseed(&mut self, seed: u64) {
        self.angles.reseed(seed);
    }
}

impl Scene<BouncingBallEngine<SeededAngles>> {
    /// Restart the launch-angle stream; the next `reset` replays a run
    /// exactly as a fresh scene with `seed` would
    pub fn reseed(&mut self, seed: u64) {
        log::info!("{} reseeded with {}", BouncingBallEngine::<SeededAngles>::NAME, seed);
        self.engine_mut().reseed(seed);
    }
}

impl<A: LaunchAngleSource> BouncingBallEngine<A> {
    pub fn with_angle_source(params: BouncingBallParams, angles: A) -> Result<Self> {
        params.validate()?;
        let mut engine = Self {
            params,
            pos: params.container_center,
            vel: Vec2::ZERO,
            angles,
            launch_angle: 0.0,
            bounces: 0,
        };
        engine.launch();
        log::info!(
            "Bouncing ball created: radius={}, elasticity={}, launch angle={:.3} rad",
            params.ball_radius,
            params.elasticity,
            engine.launch_angle
        );
        Ok(engine)
    }

    /// Put the ball at the center with a fresh launch direction
    fn launch(&mut self) {
        self.launch_angle = self.angles.next_angle();
        self.pos = self.params.container_center;
        self.vel = unit_from_angle(self.launch_angle) * self.params.initial_speed;
        self.bounces = 0;
    }

    pub fn position(&self) -> Vec2 {
        self.pos
    }

    pub fn velocity(&self) -> Vec2 {
        self.vel
    }

    /// Direction (radians) drawn at the last reset
    pub fn launch_angle(&self) -> f32 {
        self.launch_angle
    }

    /// Wall contacts since the last reset
    pub fn bounces(&self) -> u64 {
        self.bounces
    }
}

impl<A: LaunchAngleSource> Engine for BouncingBallEngine<A> {
    type Params = BouncingBallParams;
    type Sample = BallSample;
    const NAME: &'static str = "Bouncing ball";

    fn params(&self) -> &BouncingBallParams {
        &self.params
    }

    fn step(&mut self, dt: f32) -> BallSample {
        let p = self.params;

        self.vel.y += p.gravity * BALL_GRAVITY_SCALE * dt;
        self.pos += self.vel * dt;

        let contact = resolve_container_collision(
            &mut self.pos,
            &mut self.vel,
            p.ball_radius,
            &p.container(),
            p.elasticity,
        );
        if contact.hit {
            self.bounces += 1;
            log::debug!(
                "Wall contact #{}: penetration={:.3}, speed={:.3}",
                self.bounces,
                contact.penetration,
                self.vel.length()
            );
        }

        self.sample()
    }

    fn sample(&self) -> BallSample {
        BallSample {
            position: self.pos,
            velocity: self.vel,
        }
    }

    fn reset(&mut self, params: BouncingBallParams) -> Result<()> {
        params.validate()?;
        self.params = params;
        self.launch();
        Ok(())
    }

    /// Apply new parameters mid-flight. A shrunken container or grown ball
    /// is resolved by moving the ball back inside; velocity is untouched.
    fn set_params(&mut self, params: BouncingBallParams) -> Result<()> {
        params.validate()?;
        self.params = params;
        self.pos = project_inside(self.pos, params.ball_radius, &params.container());
        Ok(())
    }

    fn frame_dt(&self, elapsed_ms: f64) -> f32 {
        (elapsed_ms / BALL_MS_PER_FRAME) as f32
    }
}


#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::{BouncingBallEngine, BouncingBallParams, Engine};
    use crate::consts::CONTAINMENT_EPSILON;

    proptest! {
        #[test]
        fn prop_ball_stays_in_container(
            seed in any::<u64>(),
            gravity in -50.0f32..50.0,
            elasticity in -1.0f32..3.0,
            ball_radius in 0.0f32..170.0,
            initial_speed in 0.0f32..50.0,
            dt in 0.0f32..5.0,
        ) {
            let params = BouncingBallParams {
                gravity,
                elasticity,
                ball_radius,
                initial_speed,
                ..Default::default()
            };
            let mut engine = BouncingBallEngine::new(params, Some(seed)).unwrap();
            let container = params.container();
            for _ in 0..300 {
                let s = engine.step(dt);
                prop_assert!(s.position.is_finite());
                prop_assert!(container.contains(s.position, ball_radius, CONTAINMENT_EPSILON));
            }
        }
    }
}
