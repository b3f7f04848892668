//! Damped nonlinear pendulum
//!
//! Integrated with semi-implicit Euler: acceleration updates velocity, the
//! velocity is damped, then the damped velocity moves the angle. The damping
//! is a fixed fraction removed once per step, so how quickly a swing dies
//! out in wall time depends on how often `step` runs.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::scene::Engine;
use super::trace::TraceBuffer;
use crate::consts::*;
use crate::deg_to_rad;
use crate::error::{Result, SimError, require_finite, require_non_negative};

/// Pendulum parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PendulumParams {
    /// Gravitational acceleration (m/s²)
    pub gravity: f32,
    /// Rod length (px)
    pub length: f32,
    /// Fraction of angular velocity removed each step
    pub damping: f32,
    /// Release angle from vertical (degrees)
    pub initial_angle_deg: f32,
    /// Pivot point in screen space
    pub origin: Vec2,
    /// Record bob positions into the trace
    pub trace_enabled: bool,
    /// Number of bob positions kept in the trace
    pub trace_capacity: usize,
    /// Simulation time advanced per rendered frame
    pub frame_dt: f32,
}

impl Default for PendulumParams {
    fn default() -> Self {
        Self {
            gravity: EARTH_GRAVITY,
            length: 150.0,
            damping: 0.02,
            initial_angle_deg: 45.0,
            origin: Vec2::new(PENDULUM_ORIGIN_X, PENDULUM_ORIGIN_Y),
            trace_enabled: true,
            trace_capacity: PENDULUM_TRACE_CAPACITY,
            frame_dt: PENDULUM_FRAME_DT,
        }
    }
}

impl PendulumParams {
    /// Reject non-finite values and rods that can't swing.
    ///
    /// A rod too short for `gravity / length` to stay finite (zero or
    /// subnormal) is refused up front instead of turning the state into NaN.
    pub fn validate(&self) -> Result<()> {
        require_finite("gravity", self.gravity)?;
        require_non_negative("length", self.length)?;
        if self.length == 0.0 {
            return Err(SimError::domain("pendulum rod length is zero"));
        }
        if !(self.gravity / self.length).is_finite() {
            return Err(SimError::domain(format!(
                "pendulum rod length {} is too short for gravity {}",
                self.length, self.gravity
            )));
        }
        require_finite("damping", self.damping)?;
        require_finite("initial_angle_deg", self.initial_angle_deg)?;
        require_finite("origin.x", self.origin.x)?;
        require_finite("origin.y", self.origin.y)?;
        require_non_negative("frame_dt", self.frame_dt)?;
        Ok(())
    }
}

/// Pendulum state after a step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendulumSample {
    /// Angle from vertical (radians, positive swings right)
    pub angle: f32,
    /// Angular velocity (radians per simulation unit)
    pub angular_velocity: f32,
    /// Bob position in screen space
    pub bob: Vec2,
}

#[derive(Debug, Clone)]
pub struct PendulumEngine {
    params: PendulumParams,
    angle: f32,
    angular_velocity: f32,
    trace_enabled: bool,
    trace: TraceBuffer,
}

impl PendulumEngine {
    pub fn new(params: PendulumParams) -> Result<Self> {
        params.validate()?;
        log::info!(
            "Pendulum created: length={}, damping={}, angle={}°",
            params.length,
            params.damping,
            params.initial_angle_deg
        );
        Ok(Self::initial(params))
    }

    fn initial(params: PendulumParams) -> Self {
        Self {
            params,
            angle: deg_to_rad(params.initial_angle_deg),
            angular_velocity: 0.0,
            trace_enabled: params.trace_enabled,
            trace: TraceBuffer::bounded(params.trace_capacity),
        }
    }

    /// Bob position for a given angle
    pub fn bob_at(&self, angle: f32) -> Vec2 {
        let p = &self.params;
        Vec2::new(
            p.origin.x + angle.sin() * p.length,
            p.origin.y + angle.cos() * p.length,
        )
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn angular_velocity(&self) -> f32 {
        self.angular_velocity
    }

    /// Angle in degrees as shown on the info overlay (remainder of 360)
    pub fn display_angle_deg(&self) -> f32 {
        self.angle.to_degrees() % 360.0
    }

    /// Turn trace recording on or off; existing points are kept
    pub fn set_trace_enabled(&mut self, enabled: bool) {
        self.trace_enabled = enabled;
    }

    pub fn trace_enabled(&self) -> bool {
        self.trace_enabled
    }

    /// Recent bob positions, oldest first
    pub fn trace(&self) -> &TraceBuffer {
        &self.trace
    }
}

impl Engine for PendulumEngine {
    type Params = PendulumParams;
    type Sample = PendulumSample;
    const NAME: &'static str = "Pendulum";

    fn params(&self) -> &PendulumParams {
        &self.params
    }

    fn step(&mut self, dt: f32) -> PendulumSample {
        let p = &self.params;
        let angular_acceleration = -(p.gravity / p.length) * self.angle.sin();

        self.angular_velocity += angular_acceleration * dt;
        self.angular_velocity *= 1.0 - p.damping;
        self.angle += self.angular_velocity * dt;

        let sample = self.sample();
        if self.trace_enabled {
            self.trace.push(sample.bob);
        }
        sample
    }

    fn sample(&self) -> PendulumSample {
        PendulumSample {
            angle: self.angle,
            angular_velocity: self.angular_velocity,
            bob: self.bob_at(self.angle),
        }
    }

    fn reset(&mut self, params: PendulumParams) -> Result<()> {
        params.validate()?;
        *self = Self::initial(params);
        Ok(())
    }

    /// Apply new parameters to the swinging pendulum without restarting it
    fn set_params(&mut self, params: PendulumParams) -> Result<()> {
        params.validate()?;
        if params.trace_capacity != self.params.trace_capacity {
            self.trace.set_capacity(Some(params.trace_capacity));
        }
        if params.trace_enabled != self.params.trace_enabled {
            self.trace_enabled = params.trace_enabled;
        }
        self.params = params;
        Ok(())
    }

    /// The pendulum advances a fixed amount per frame regardless of wall time
    fn frame_dt(&self, _elapsed_ms: f64) -> f32 {
        self.params.frame_dt
    }
}
