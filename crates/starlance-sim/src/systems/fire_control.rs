//! Player fire control.
//!
//! Autofire: the minimum interval between shots is the only gate while
//! the pointer is active. Aim uses the raw, unlagged pointer
//! unprojected at the fixed aim depth, so shot placement is
//! pixel-precise regardless of the HUD reticle's visual lag.

use hecs::World;

use starlance_core::components::Position;
use starlance_core::constants::{AIM_DEPTH, FIRE_INTERVAL_MS, PLAYER_PROJECTILE_SPEED};
use starlance_core::input::InputState;
use starlance_core::projection;

use crate::world_setup;

/// Muzzle offset ahead of the ship along the shot direction.
const MUZZLE_OFFSET: f32 = 3.0;

pub fn run(
    world: &mut World,
    player: hecs::Entity,
    input: &InputState,
    fire_clock: &mut f32,
    dt_ms: f32,
    width: f32,
    height: f32,
) {
    *fire_clock += dt_ms;
    if !input.pointer_active || *fire_clock < FIRE_INTERVAL_MS {
        return;
    }

    let ship = match world.get::<&Position>(player) {
        Ok(p) => p.0,
        Err(_) => return,
    };
    // Degenerate aim: skip the shot this frame, retry on the next.
    let aim = match projection::unproject(input.pointer.x, input.pointer.y, AIM_DEPTH, width, height)
    {
        Some(p) => p,
        None => return,
    };
    let dir = (aim - ship).normalize_or_zero();
    if dir == glam::Vec3::ZERO {
        return;
    }

    // Carry the remainder so the average cadence is exact, but never
    // bank more than one interval.
    *fire_clock = (*fire_clock - FIRE_INTERVAL_MS).min(FIRE_INTERVAL_MS);

    world_setup::spawn_player_projectile(
        world,
        ship + dir * MUZZLE_OFFSET,
        dir * PLAYER_PROJECTILE_SPEED,
    );
}
