//! Collision detection and response against the circular container
//!
//! The ball lives inside a circle. Whenever it reaches the wall we reflect
//! its velocity about the wall normal and project it back inside so it can
//! never sink through the boundary.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Fixed circular boundary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub center: Vec2,
    pub radius: f32,
}

impl Container {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Distance a ball of `ball_radius` sits past the wall (negative when clear)
    #[inline]
    pub fn overlap(&self, pos: Vec2, ball_radius: f32) -> f32 {
        (pos - self.center).length() + ball_radius - self.radius
    }

    /// Whether a ball sits inside the wall, allowing `tolerance` of overlap
    #[inline]
    pub fn contains(&self, pos: Vec2, ball_radius: f32, tolerance: f32) -> bool {
        self.overlap(pos, ball_radius) <= tolerance
    }
}

/// Result of a wall check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    /// Whether the ball reached the wall
    pub hit: bool,
    /// Outward wall normal at the contact (zero when undefined)
    pub normal: Vec2,
    /// How far past the wall the ball was before correction
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Textbook reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Reflection with restitution as the scenes have always applied it:
/// v' = v - 2(v·n)n·e
///
/// This is not textbook restitution. The standard form scales only the
/// outgoing normal component, v' = v - (1 + e)(v·n)n. The two agree at
/// e = 1 and diverge otherwise: at e = 0.5 the normal component is zeroed
/// rather than halved, and below that the ball keeps drifting into the wall
/// until the positional correction stops it.
#[inline]
pub fn reflect_with_elasticity(velocity: Vec2, normal: Vec2, elasticity: f32) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal * elasticity
}

/// Move a ball that sits past the wall back onto it along the radial line.
/// Balls already inside, or sitting on the center, are returned unchanged.
pub fn project_inside(pos: Vec2, ball_radius: f32, container: &Container) -> Vec2 {
    let offset = pos - container.center;
    let distance = offset.length();
    if distance + ball_radius <= container.radius || distance <= f32::EPSILON {
        return pos;
    }
    container.center + offset / distance * (container.radius - ball_radius)
}

/// Resolve a ball against the container wall in place.
///
/// On contact the velocity is reflected with [`reflect_with_elasticity`] and
/// the ball is moved back to `center + n·(R − r)`. A ball sitting exactly on
/// the center has no defined normal; it is left where it is.
pub fn resolve_container_collision(
    pos: &mut Vec2,
    vel: &mut Vec2,
    ball_radius: f32,
    container: &Container,
    elasticity: f32,
) -> CollisionResult {
    let offset = *pos - container.center;
    let distance = offset.length();

    if distance + ball_radius <= container.radius {
        return CollisionResult::miss();
    }

    let penetration = distance + ball_radius - container.radius;
    if distance <= f32::EPSILON {
        // Ball larger than the container; nowhere better to put it
        *pos = container.center;
        return CollisionResult {
            hit: true,
            normal: Vec2::ZERO,
            penetration,
        };
    }

    let normal = offset / distance;
    *vel = reflect_with_elasticity(*vel, normal, elasticity);
    *pos = project_inside(*pos, ball_radius, container);

    CollisionResult {
        hit: true,
        normal,
        penetration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> Container {
        Container::new(Vec2::new(400.0, 200.0), 180.0)
    }

    #[test]
    fn test_reflect_velocity() {
        // Ball moving right, hits vertical wall (normal pointing right)
        let reflected = reflect_velocity(Vec2::new(100.0, 0.0), Vec2::X);
        assert!((reflected.x - (-100.0)).abs() < 0.001);
        assert!(reflected.y.abs() < 0.001);
    }

    #[test]
    fn test_reflect_with_elasticity_matches_textbook_at_one() {
        let v = Vec2::new(3.0, -4.0);
        let n = Vec2::new(1.0, 1.0).normalize();
        let a = reflect_with_elasticity(v, n, 1.0);
        let b = reflect_velocity(v, n);
        assert!((a - b).length() < 1e-5);
    }

    #[test]
    fn test_reflect_with_elasticity_half_kills_normal_component() {
        let v = Vec2::new(10.0, 5.0);
        let out = reflect_with_elasticity(v, Vec2::X, 0.5);
        assert!(out.x.abs() < 1e-6);
        assert!((out.y - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_no_collision_inside() {
        let c = arena();
        let mut pos = c.center + Vec2::new(100.0, 0.0);
        let mut vel = Vec2::new(1.0, 0.0);
        let result = resolve_container_collision(&mut pos, &mut vel, 20.0, &c, 0.7);
        assert!(!result.hit);
        assert_eq!(pos, c.center + Vec2::new(100.0, 0.0));
        assert_eq!(vel, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_collision_reflects_and_projects_back() {
        let c = arena();
        let mut pos = c.center + Vec2::new(170.0, 0.0);
        let mut vel = Vec2::new(2.0, 1.0);
        let result = resolve_container_collision(&mut pos, &mut vel, 20.0, &c, 1.0);

        assert!(result.hit);
        assert!((result.penetration - 10.0).abs() < 1e-4);
        assert!((result.normal - Vec2::X).length() < 1e-6);
        assert!((pos - (c.center + Vec2::new(160.0, 0.0))).length() < 1e-4);
        assert!((vel - Vec2::new(-2.0, 1.0)).length() < 1e-5);
        assert!(c.contains(pos, 20.0, 1e-3));
    }

    #[test]
    fn test_touching_wall_counts_only_when_past_it() {
        let c = arena();
        let mut pos = c.center + Vec2::new(0.0, 160.0);
        let mut vel = Vec2::new(0.0, 1.0);
        let result = resolve_container_collision(&mut pos, &mut vel, 20.0, &c, 0.7);
        assert!(!result.hit);
    }

    #[test]
    fn test_zero_distance_skips_reflection() {
        // Degenerate: ball bigger than the container, sitting on the center
        let c = Container::new(Vec2::ZERO, 10.0);
        let mut pos = Vec2::ZERO;
        let mut vel = Vec2::new(3.0, 4.0);
        let result = resolve_container_collision(&mut pos, &mut vel, 20.0, &c, 0.7);
        assert!(result.hit);
        assert_eq!(result.normal, Vec2::ZERO);
        assert_eq!(vel, Vec2::new(3.0, 4.0));
        assert!(pos.is_finite());
    }

    #[test]
    fn test_project_inside() {
        let c = arena();
        let inside = c.center + Vec2::new(0.0, -50.0);
        assert_eq!(project_inside(inside, 20.0, &c), inside);

        let outside = c.center + Vec2::new(0.0, -300.0);
        let projected = project_inside(outside, 20.0, &c);
        assert!((projected - (c.center + Vec2::new(0.0, -160.0))).length() < 1e-4);
        assert!(c.contains(projected, 20.0, 1e-3));
    }

    #[test]
    fn test_tunneling_ball_is_pulled_back() {
        let c = arena();
        // Way outside the wall after a huge step
        let mut pos = c.center + Vec2::new(-1000.0, 0.0);
        let mut vel = Vec2::new(-500.0, 0.0);
        resolve_container_collision(&mut pos, &mut vel, 20.0, &c, 0.7);
        assert!(c.contains(pos, 20.0, 1e-3));
        assert!(vel.x > 0.0);
    }
}
