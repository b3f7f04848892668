//! Projectile motion under constant gravity
//!
//! Position is closed-form in elapsed time, so stepping only advances the
//! clock and records the path. Screen coordinates: y grows downward, the
//! launch point sits near the bottom-left corner.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::scene::Engine;
use super::trace::TraceBuffer;
use crate::consts::*;
use crate::deg_to_rad;
use crate::error::{Result, SimError, require_finite, require_non_negative};

/// Launch and world parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileParams {
    /// Launch angle above the horizontal (degrees)
    pub angle_deg: f32,
    /// Launch speed (m/s)
    pub speed: f32,
    /// Downward acceleration (m/s²)
    pub gravity: f32,
    /// Launch point in screen space
    pub origin: Vec2,
    /// Right and bottom viewport edges; crossing either ends the run
    pub bounds: Vec2,
    /// Optional cap on recorded path points (unbounded when `None`)
    pub path_capacity: Option<usize>,
}

impl Default for ProjectileParams {
    fn default() -> Self {
        Self {
            angle_deg: 45.0,
            speed: 60.0,
            gravity: EARTH_GRAVITY,
            origin: Vec2::new(PROJECTILE_ORIGIN_X, PROJECTILE_ORIGIN_Y),
            bounds: Vec2::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT),
            path_capacity: None,
        }
    }
}

impl ProjectileParams {
    pub fn validate(&self) -> Result<()> {
        require_finite("angle_deg", self.angle_deg)?;
        require_non_negative("speed", self.speed)?;
        require_finite("gravity", self.gravity)?;
        require_finite("origin.x", self.origin.x)?;
        require_finite("origin.y", self.origin.y)?;
        require_finite("bounds.x", self.bounds.x)?;
        require_finite("bounds.y", self.bounds.y)?;
        if self.bounds.x <= 0.0 || self.bounds.y <= 0.0 {
            return Err(SimError::domain(format!(
                "viewport {}x{} has no area",
                self.bounds.x, self.bounds.y
            )));
        }
        Ok(())
    }

    /// Launch velocity split into (horizontal, vertical-up) components
    pub fn velocity_components(&self) -> Vec2 {
        let theta = deg_to_rad(self.angle_deg);
        Vec2::new(self.speed * theta.cos(), self.speed * theta.sin())
    }
}

/// Where the projectile is in its run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightStatus {
    InFlight,
    /// Dropped below the bottom edge
    Landed,
    /// Passed the right edge
    OutOfBounds,
}

impl FlightStatus {
    pub fn is_terminal(self) -> bool {
        self != FlightStatus::InFlight
    }
}

/// One point on the trajectory
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileSample {
    /// Seconds since launch
    pub elapsed: f32,
    pub position: Vec2,
    pub status: FlightStatus,
}

/// Closed-form projectile with a recorded path
#[derive(Debug, Clone)]
pub struct ProjectileEngine {
    params: ProjectileParams,
    elapsed: f32,
    status: FlightStatus,
    last: ProjectileSample,
    path: TraceBuffer,
}

impl ProjectileEngine {
    pub fn new(params: ProjectileParams) -> Result<Self> {
        params.validate()?;
        log::info!(
            "Projectile created: angle={}°, speed={}, gravity={}",
            params.angle_deg,
            params.speed,
            params.gravity
        );
        Ok(Self::initial(params))
    }

    fn initial(params: ProjectileParams) -> Self {
        let path = match params.path_capacity {
            Some(cap) => TraceBuffer::bounded(cap),
            None => TraceBuffer::unbounded(),
        };
        Self {
            params,
            elapsed: 0.0,
            status: FlightStatus::InFlight,
            last: ProjectileSample {
                elapsed: 0.0,
                position: params.origin,
                status: FlightStatus::InFlight,
            },
            path,
        }
    }

    /// Position after `t` seconds of flight
    pub fn position_at(&self, t: f32) -> Vec2 {
        let p = &self.params;
        let v = p.velocity_components();
        Vec2::new(
            p.origin.x + v.x * t,
            p.origin.y - (v.y * t - 0.5 * p.gravity * t * t),
        )
    }

    fn classify(&self, pos: Vec2) -> FlightStatus {
        if pos.y >= self.params.bounds.y {
            FlightStatus::Landed
        } else if pos.x >= self.params.bounds.x {
            FlightStatus::OutOfBounds
        } else {
            FlightStatus::InFlight
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn status(&self) -> FlightStatus {
        self.status
    }

    /// Recorded positions, oldest first
    pub fn path(&self) -> &TraceBuffer {
        &self.path
    }
}

impl Engine for ProjectileEngine {
    type Params = ProjectileParams;
    type Sample = ProjectileSample;
    const NAME: &'static str = "Projectile";

    fn params(&self) -> &ProjectileParams {
        &self.params
    }

    /// Advance flight time by `dt` seconds. A finished run returns its
    /// final sample unchanged.
    fn step(&mut self, dt: f32) -> ProjectileSample {
        if self.status.is_terminal() {
            return self.last;
        }

        self.elapsed += dt.max(0.0);
        let position = self.position_at(self.elapsed);
        self.path.push(position);
        self.status = self.classify(position);
        self.last = ProjectileSample {
            elapsed: self.elapsed,
            position,
            status: self.status,
        };

        if self.status.is_terminal() {
            log::info!(
                "Projectile {:?} at t={:.2}s, x={:.1}",
                self.status,
                self.elapsed,
                position.x
            );
        }
        self.last
    }

    fn sample(&self) -> ProjectileSample {
        self.last
    }

    fn reset(&mut self, params: ProjectileParams) -> Result<()> {
        params.validate()?;
        *self = Self::initial(params);
        Ok(())
    }

    /// Swap parameters mid-flight. The path keeps its history; position
    /// follows the new parameters from the next step on.
    fn set_params(&mut self, params: ProjectileParams) -> Result<()> {
        params.validate()?;
        self.path.set_capacity(params.path_capacity);
        self.params = params;
        Ok(())
    }

    fn frame_dt(&self, elapsed_ms: f64) -> f32 {
        (elapsed_ms / PROJECTILE_MS_PER_SECOND) as f32
    }

    fn is_finished(&self) -> bool {
        self.status.is_terminal()
    }
}
