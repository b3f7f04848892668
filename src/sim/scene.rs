//! Engine contract and the clock-driven scene wrapper
//!
//! Every scene shares one shape: clock tick → `Engine::step` → sample →
//! render. `Scene` owns the clock and exactly one engine; the presentation
//! layer drives it with frame timestamps and pause/resume/reset commands.

use crate::error::Result;

use super::clock::SimClock;

/// A steppable simulation with validated parameters
pub trait Engine {
    /// User-adjustable parameters, passed by value and never mutated
    type Params: Clone;
    /// Per-step snapshot handed to the renderer
    type Sample: Copy;

    /// Human-readable scene name for logs
    const NAME: &'static str;

    /// Parameters currently in effect
    fn params(&self) -> &Self::Params;

    /// Advance by `dt` simulation units. Never fails on validated parameters.
    fn step(&mut self, dt: f32) -> Self::Sample;

    /// Current state without advancing
    fn sample(&self) -> Self::Sample;

    /// Validate `params` and reinitialize state from them, clearing traces
    fn reset(&mut self, params: Self::Params) -> Result<()>;

    /// Validate `params` and apply them to the running state in place
    fn set_params(&mut self, params: Self::Params) -> Result<()>;

    /// Map a wall-clock delta (ms) onto this scene's simulation time unit
    fn frame_dt(&self, elapsed_ms: f64) -> f32;

    /// Whether the run has ended and further steps are no-ops
    fn is_finished(&self) -> bool {
        false
    }
}

/// An engine paired with its simulation clock
#[derive(Debug, Clone)]
pub struct Scene<E: Engine> {
    engine: E,
    clock: SimClock,
}

impl<E: Engine> Scene<E> {
    pub fn new(engine: E) -> Self {
        log::info!("{} scene created", E::NAME);
        Self {
            engine,
            clock: SimClock::new(),
        }
    }

    /// Feed one frame timestamp (ms).
    ///
    /// Returns the new sample, or `None` when the tick only set a baseline,
    /// the scene is paused, or the run has finished.
    pub fn frame(&mut self, timestamp_ms: f64) -> Option<E::Sample> {
        if self.engine.is_finished() {
            return None;
        }
        let elapsed_ms = self.clock.tick(timestamp_ms)?;
        let dt = self.engine.frame_dt(elapsed_ms);
        let sample = self.engine.step(dt);

        if self.engine.is_finished() {
            log::info!("{} run finished, pausing clock", E::NAME);
            self.clock.pause();
        }
        Some(sample)
    }

    /// Stop stepping; engine state is kept as-is
    pub fn pause(&mut self) {
        self.clock.pause();
    }

    pub fn resume(&mut self) {
        self.clock.resume();
    }

    /// Toggle pause, returning the new paused state
    pub fn toggle_pause(&mut self) -> bool {
        if self.clock.is_paused() {
            self.resume();
        } else {
            self.pause();
        }
        self.clock.is_paused()
    }

    /// Reapply (possibly changed) parameters and restart the run.
    ///
    /// A rejected parameter set leaves both the engine and clock untouched.
    pub fn reset(&mut self, params: E::Params) -> Result<()> {
        if let Err(err) = self.engine.reset(params) {
            log::warn!("{} reset rejected: {}", E::NAME, err);
            return Err(err);
        }
        self.clock.reset();
        log::info!("{} scene reset", E::NAME);
        Ok(())
    }

    /// Apply new parameters without restarting the run
    pub fn set_params(&mut self, params: E::Params) -> Result<()> {
        self.engine.set_params(params).inspect_err(|err| {
            log::warn!("{} parameters rejected: {}", E::NAME, err);
        })
    }

    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    pub fn sample(&self) -> E::Sample {
        self.engine.sample()
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub(crate) fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;

    /// Counts steps and accumulated time; finishes after a time limit
    #[derive(Debug, Clone)]
    struct Counter {
        limit: f32,
        elapsed: f32,
        steps: u32,
    }

    impl Engine for Counter {
        type Params = f32;
        type Sample = (u32, f32);
        const NAME: &'static str = "Counter";

        fn params(&self) -> &f32 {
            &self.limit
        }

        fn step(&mut self, dt: f32) -> (u32, f32) {
            if !self.is_finished() {
                self.elapsed += dt;
                self.steps += 1;
            }
            self.sample()
        }

        fn sample(&self) -> (u32, f32) {
            (self.steps, self.elapsed)
        }

        fn reset(&mut self, limit: f32) -> Result<()> {
            if limit <= 0.0 {
                return Err(SimError::invalid("limit", limit, "must be positive"));
            }
            *self = Counter {
                limit,
                elapsed: 0.0,
                steps: 0,
            };
            Ok(())
        }

        fn set_params(&mut self, limit: f32) -> Result<()> {
            self.limit = limit;
            Ok(())
        }

        fn frame_dt(&self, elapsed_ms: f64) -> f32 {
            (elapsed_ms / 1000.0) as f32
        }

        fn is_finished(&self) -> bool {
            self.elapsed >= self.limit
        }
    }

    fn counter_scene(limit: f32) -> Scene<Counter> {
        Scene::new(Counter {
            limit,
            elapsed: 0.0,
            steps: 0,
        })
    }

    #[test]
    fn test_first_frame_does_not_step() {
        let mut scene = counter_scene(100.0);
        assert_eq!(scene.frame(1000.0), None);
        let (steps, elapsed) = scene.frame(1016.0).unwrap();
        assert_eq!(steps, 1);
        assert!((elapsed - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_pause_keeps_state() {
        let mut scene = counter_scene(100.0);
        scene.frame(0.0);
        scene.frame(500.0);
        assert!(scene.toggle_pause());
        assert_eq!(scene.frame(600.0), None);
        assert_eq!(scene.sample().0, 1);

        assert!(!scene.toggle_pause());
        // Long gap while paused is not replayed
        assert_eq!(scene.frame(60_000.0), None);
        let (steps, elapsed) = scene.frame(60_100.0).unwrap();
        assert_eq!(steps, 2);
        assert!((elapsed - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_finish_pauses_clock() {
        let mut scene = counter_scene(1.0);
        scene.frame(0.0);
        assert!(scene.frame(2000.0).is_some());
        assert!(scene.engine().is_finished());
        assert!(scene.is_paused());
        assert_eq!(scene.frame(2016.0), None);
    }

    #[test]
    fn test_rejected_reset_leaves_scene_untouched() {
        let mut scene = counter_scene(10.0);
        scene.frame(0.0);
        scene.frame(1000.0);
        assert!(scene.reset(-1.0).is_err());
        assert_eq!(scene.sample().0, 1);
        assert!(scene.clock().has_baseline());

        scene.reset(5.0).unwrap();
        assert_eq!(scene.sample(), (0, 0.0));
        assert!(!scene.clock().has_baseline());
        assert_eq!(*scene.engine().params(), 5.0);
    }
}
