//! Physics Lab - simulation engines for real-time physics scenes
//!
//! Core modules:
//! - `sim`: Deterministic engines (projectile, pendulum, bouncing ball) and the clock
//! - `settings`: Per-scene parameter defaults and JSON configuration
//! - `error`: Parameter and geometry validation errors

pub mod error;
pub mod settings;
pub mod sim;

pub use error::{Result, SimError};
pub use settings::Settings;

use glam::Vec2;

/// Scene configuration constants
pub mod consts {
    /// Viewport shared by all scenes (px-equivalent units)
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 400.0;

    /// Default gravity for every scene (m/s²)
    pub const EARTH_GRAVITY: f32 = 9.8;

    /// Projectile launch point, 50px in from the bottom-left corner
    pub const PROJECTILE_ORIGIN_X: f32 = 50.0;
    pub const PROJECTILE_ORIGIN_Y: f32 = VIEWPORT_HEIGHT - 50.0;
    /// Wall-clock milliseconds per simulated projectile second
    pub const PROJECTILE_MS_PER_SECOND: f64 = 1000.0;

    /// Pendulum pivot, horizontally centered near the top edge
    pub const PENDULUM_ORIGIN_X: f32 = VIEWPORT_WIDTH / 2.0;
    pub const PENDULUM_ORIGIN_Y: f32 = 50.0;
    /// Simulation time advanced per pendulum frame, independent of wall time
    pub const PENDULUM_FRAME_DT: f32 = 0.1;
    /// Most recent bob positions kept for the trace
    pub const PENDULUM_TRACE_CAPACITY: usize = 500;

    /// Ball container, centered in the viewport with a 20px margin
    pub const CONTAINER_CENTER_X: f32 = VIEWPORT_WIDTH / 2.0;
    pub const CONTAINER_CENTER_Y: f32 = VIEWPORT_HEIGHT / 2.0;
    pub const CONTAINER_RADIUS: f32 = VIEWPORT_HEIGHT / 2.0 - 20.0;
    /// Wall-clock milliseconds per ball frame unit (~60 Hz)
    pub const BALL_MS_PER_FRAME: f64 = 16.0;
    /// Scales gravity into per-frame velocity gain for the ball.
    ///
    /// Together with `BALL_MS_PER_FRAME` this ties the ball's fall rate to
    /// the frame unit rather than to real seconds.
    pub const BALL_GRAVITY_SCALE: f32 = 0.02;
    /// Slack allowed on the containment check after positional correction
    pub const CONTAINMENT_EPSILON: f32 = 1e-3;
}

/// Convert an angle in degrees to radians
#[inline]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees.to_radians()
}

/// Unit vector pointing along `theta` (radians)
#[inline]
pub fn unit_from_angle(theta: f32) -> Vec2 {
    Vec2::new(theta.cos(), theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_deg_to_rad() {
        assert!((deg_to_rad(180.0) - PI).abs() < 1e-6);
        assert_eq!(deg_to_rad(0.0), 0.0);
    }

    #[test]
    fn test_unit_from_angle() {
        let v = unit_from_angle(PI / 2.0);
        assert!(v.x.abs() < 1e-6);
        assert!((v.y - 1.0).abs() < 1e-6);
        assert!((v.length() - 1.0).abs() < 1e-6);
    }
}
