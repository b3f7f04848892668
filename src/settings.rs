//! Scene settings
//!
//! Default parameters for every scene plus an optional launch seed. The
//! presentation layer may hand in a JSON override; nothing is written back.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::sim::{
    BouncingBallEngine, BouncingBallParams, PendulumEngine, PendulumParams, ProjectileEngine,
    ProjectileParams, Scene,
};

/// Parameters for all three scenes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed for the bouncing ball's launch direction (random when absent)
    pub seed: Option<u64>,
    pub projectile: ProjectileParams,
    pub pendulum: PendulumParams,
    pub bouncing_ball: BouncingBallParams,
}

impl Settings {
    /// Parse settings from JSON; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Use the JSON override when it parses and validates, defaults otherwise
    pub fn load_or_default(json: Option<&str>) -> Self {
        match json.map(Self::from_json) {
            Some(Ok(settings)) => {
                log::info!("Loaded scene settings");
                settings
            }
            Some(Err(err)) => {
                log::warn!("Ignoring scene settings: {}", err);
                Self::default()
            }
            None => {
                log::info!("Using default scene settings");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.projectile.validate()?;
        self.pendulum.validate()?;
        self.bouncing_ball.validate()
    }

    pub fn projectile_scene(&self) -> Result<Scene<ProjectileEngine>> {
        Ok(Scene::new(ProjectileEngine::new(self.projectile)?))
    }

    pub fn pendulum_scene(&self) -> Result<Scene<PendulumEngine>> {
        Ok(Scene::new(PendulumEngine::new(self.pendulum)?))
    }

    pub fn bouncing_ball_scene(&self) -> Result<Scene<BouncingBallEngine>> {
        Ok(Scene::new(BouncingBallEngine::new(
            self.bouncing_ball,
            self.seed,
        )?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SimError;
    use crate::consts::*;
    use crate::sim::Engine;

    #[test]
    fn test_defaults_match_scenes() {
        let s = Settings::default();
        assert!(s.validate().is_ok());
        assert_eq!(s.projectile.angle_deg, 45.0);
        assert_eq!(s.projectile.speed, 60.0);
        assert_eq!(s.pendulum.length, 150.0);
        assert_eq!(s.pendulum.damping, 0.02);
        assert_eq!(s.pendulum.trace_capacity, PENDULUM_TRACE_CAPACITY);
        assert_eq!(s.bouncing_ball.elasticity, 0.7);
        assert_eq!(s.bouncing_ball.container_radius, 180.0);
        assert_eq!(s.seed, None);
    }

    #[test]
    fn test_partial_json_override() {
        let json = r#"{
            "seed": 7,
            "pendulum": { "length": 220.0, "trace_enabled": false },
            "bouncing_ball": { "elasticity": 1.0 }
        }"#;
        let s = Settings::from_json(json).unwrap();
        assert_eq!(s.seed, Some(7));
        assert_eq!(s.pendulum.length, 220.0);
        assert!(!s.pendulum.trace_enabled);
        assert_eq!(s.pendulum.damping, 0.02);
        assert_eq!(s.bouncing_ball.elasticity, 1.0);
        assert_eq!(s.projectile, ProjectileParams::default());
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(SimError::Config(_))
        ));

        let zero_rod = r#"{ "pendulum": { "length": 0.0 } }"#;
        assert!(matches!(
            Settings::from_json(zero_rod),
            Err(SimError::Domain { .. })
        ));
    }

    #[test]
    fn test_load_or_default_falls_back() {
        assert_eq!(Settings::load_or_default(None), Settings::default());
        assert_eq!(
            Settings::load_or_default(Some(r#""not an object""#)),
            Settings::default()
        );
        let loaded = Settings::load_or_default(Some(r#"{ "seed": 3 }"#));
        assert_eq!(loaded.seed, Some(3));
    }

    #[test]
    fn test_scenes_built_from_settings() {
        let s = Settings {
            seed: Some(11),
            ..Default::default()
        };
        let ball = s.bouncing_ball_scene().unwrap();
        assert_eq!(ball.engine().seed(), 11);
        assert_eq!(ball.sample().position, s.bouncing_ball.container_center);

        let pendulum = s.pendulum_scene().unwrap();
        assert_eq!(*pendulum.engine().params(), s.pendulum);

        let projectile = s.projectile_scene().unwrap();
        assert_eq!(projectile.sample().position, s.projectile.origin);
    }
}
