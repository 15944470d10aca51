//! Enemy spawning system.
//!
//! After an initial grace period, each frame rolls one spawn with
//! probability scaled by the mission's enemy density. The roll picks a
//! kind: mostly interceptors, sometimes turrets, occasionally a ground
//! pillar.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starlance_core::constants::{
    SPAWN_CHANCE, SPAWN_GRACE_MS, SPAWN_LANE_HALF_WIDTH, SPAWN_SHARE_INTERCEPTOR,
    SPAWN_SHARE_TURRET,
};
use starlance_core::mission::MissionParameters;

use crate::world_setup;

pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    mission: &MissionParameters,
    elapsed_ms: f32,
    spawn_serial: &mut u32,
) {
    if elapsed_ms < SPAWN_GRACE_MS {
        return;
    }
    if rng.gen::<f32>() >= SPAWN_CHANCE * mission.enemy_density {
        return;
    }

    let x = rng.gen_range(-SPAWN_LANE_HALF_WIDTH..SPAWN_LANE_HALF_WIDTH);
    let roll = rng.gen::<f32>();
    *spawn_serial += 1;

    if roll < SPAWN_SHARE_INTERCEPTOR {
        world_setup::spawn_interceptor(world, x, *spawn_serial, mission.theme_color);
    } else if roll < SPAWN_SHARE_TURRET {
        world_setup::spawn_turret(world, x, mission.theme_color);
    } else {
        world_setup::spawn_pillar(world, x, mission.theme_color);
    }
}
