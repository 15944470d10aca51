//! Snapshot system: assembles the drawable `SceneView` for a frame.
//!
//! Pure read path; the world is never modified here.

use hecs::World;

use starlance_core::components::{Bank, Position, Scale, Tint};
use starlance_core::enums::{EntityKind, SessionPhase};
use starlance_core::input::InputState;
use starlance_core::mission::MissionParameters;
use starlance_core::state::{EntityView, HudView, SceneView};
use starlance_core::types::FrameClock;

use crate::particles::ParticleStore;

#[allow(clippy::too_many_arguments)]
pub fn build_scene(
    world: &World,
    particles: &ParticleStore,
    mission: &MissionParameters,
    phase: SessionPhase,
    clock: FrameClock,
    score: u32,
    health: i32,
    reticle: glam::Vec2,
    input: &InputState,
) -> SceneView {
    let entities: Vec<EntityView> = world
        .query::<(&EntityKind, &Position, &Scale, &Bank, &Tint)>()
        .iter()
        .map(|(_entity, (kind, pos, scale, bank, tint))| EntityView {
            kind: *kind,
            position: pos.0,
            scale: scale.0,
            bank: bank.0,
            tint: tint.0,
        })
        .collect();

    SceneView {
        phase,
        clock,
        theme_color: mission.theme_color,
        score,
        health,
        entities,
        particles: particles.particles().to_vec(),
        hud: HudView {
            pointer: input.pointer,
            reticle,
            pointer_active: input.pointer_active,
        },
    }
}
