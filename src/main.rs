//! Physics Lab headless driver
//!
//! Runs every scene through its clock with synthetic ~60 Hz frame timestamps
//! and logs what a renderer would receive. Settings JSON can be supplied via
//! the `PHYSICS_LAB_SETTINGS` environment variable.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use physics_lab::sim::{Engine, Scene};
    use physics_lab::{Result, Settings};
    use serde::Serialize;

    /// Frame spacing of the synthetic scheduler (ms)
    const FRAME_MS: f64 = 16.0;
    /// Frames to run per scene
    const FRAMES: u32 = 600;

    /// Feed `frames` timestamps starting at `start_ms`, returning the last sample
    fn drive<E: Engine>(scene: &mut Scene<E>, start_ms: f64, frames: u32) -> Option<E::Sample> {
        let mut last = None;
        for i in 0..frames {
            if scene.is_paused() {
                break;
            }
            if let Some(sample) = scene.frame(start_ms + i as f64 * FRAME_MS) {
                last = Some(sample);
            }
        }
        last
    }

    fn report<T: Serialize>(scene: &str, sample: Option<T>) {
        match sample.map(|s| serde_json::to_string(&s)) {
            Some(Ok(json)) => log::info!("{} final sample: {}", scene, json),
            Some(Err(err)) => log::warn!("{} sample not serializable: {}", scene, err),
            None => log::warn!("{} produced no samples", scene),
        }
    }

    pub fn run() -> Result<()> {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        log::info!("Physics Lab (headless) starting...");

        let json = std::env::var("PHYSICS_LAB_SETTINGS").ok();
        let settings = Settings::load_or_default(json.as_deref());

        let mut projectile = settings.projectile_scene()?;
        let sample = drive(&mut projectile, 0.0, FRAMES * 4);
        log::info!(
            "Projectile: {} path points, status {:?}",
            projectile.engine().path().len(),
            projectile.engine().status()
        );
        report("Projectile", sample);

        let mut pendulum = settings.pendulum_scene()?;
        let sample = drive(&mut pendulum, 0.0, FRAMES);
        log::info!(
            "Pendulum: angle {:.1}°, {} trace points",
            pendulum.engine().display_angle_deg(),
            pendulum.engine().trace().len()
        );
        report("Pendulum", sample);

        let mut ball = settings.bouncing_ball_scene()?;
        drive(&mut ball, 0.0, FRAMES / 2);
        // Simulate a backgrounded tab: a long gap must not move the ball
        ball.pause();
        let before = ball.sample();
        ball.resume();
        let resume_at = 60_000.0;
        ball.frame(resume_at);
        if ball.sample() != before {
            log::warn!("Bouncing ball moved across a pause");
        }
        let sample = drive(&mut ball, resume_at + FRAME_MS, FRAMES / 2);
        log::info!(
            "Bouncing ball: seed {}, {} wall contacts",
            ball.engine().seed(),
            ball.engine().bounces()
        );
        report("Bouncing ball", sample);

        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> physics_lab::Result<()> {
    headless::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Scenes are driven by the host page on the web
}
