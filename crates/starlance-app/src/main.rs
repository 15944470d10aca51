//! Headless STARLANCE demo.
//!
//! Acquires mission parameters (static fallback path), drives the
//! engine for a few simulated seconds against a recording surface, and
//! logs the shell events a real host would receive.

use starlance_app::{acquire_mission, StaticMissionSource};
use starlance_core::input::InputState;
use starlance_render::RecordingSurface;
use starlance_sim::{GameCore, SimConfig};

const WIDTH: f32 = 1280.0;
const HEIGHT: f32 = 720.0;
const FRAME_MS: f32 = 16.0;

fn main() {
    env_logger::init();

    let mission = acquire_mission(&StaticMissionSource);
    log::info!("mission: {} — {}", mission.title, mission.briefing);

    let mut core = GameCore::new(SimConfig { seed: 42, mission });
    let mut surface = RecordingSurface::new();

    // Ten simulated seconds of sweeping the pointer across the lane.
    for i in 0..600 {
        let t = i as f32 * FRAME_MS / 1000.0;
        let input = InputState::pointing_at((t * 0.9).sin() * 0.6, (t * 0.6).cos() * 0.25);

        let report = core.frame(input, FRAME_MS, WIDTH, HEIGHT);
        for event in &report.events {
            log::info!("event: {event:?}");
        }

        surface.reset();
        starlance_render::render(&core.scene(), &mut surface, WIDTH, HEIGHT);
    }

    log::info!(
        "demo complete: score {}, health {}, {} draw commands in the last frame",
        core.score(),
        core.health(),
        surface.commands.len()
    );
}
