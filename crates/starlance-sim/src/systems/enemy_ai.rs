//! Enemy fire decisions.
//!
//! While inside the firing Z band, interceptors and turrets roll a
//! per-frame chance to fire. Shots are aimed at the player's position
//! at fire time and never steer afterwards. Spawns are collected first
//! and applied after the query ends to keep hecs borrows disjoint.

use glam::Vec3;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starlance_core::components::Position;
use starlance_core::constants::{
    ENEMY_FIRE_CHANCE, ENEMY_FIRE_FAR_Z, ENEMY_FIRE_NEAR_Z, TURRET_FIRE_CHANCE,
};
use starlance_core::enums::EntityKind;

use crate::world_setup;

pub fn run(world: &mut World, player: hecs::Entity, rng: &mut ChaCha8Rng) {
    let player_pos = match world.get::<&Position>(player) {
        Ok(p) => p.0,
        Err(_) => return,
    };

    let mut shots: Vec<Vec3> = Vec::new();
    {
        let mut query = world.query::<(&EntityKind, &Position)>();
        for (_entity, (kind, pos)) in query.iter() {
            let chance = match kind {
                EntityKind::EnemyInterceptor => ENEMY_FIRE_CHANCE,
                EntityKind::EnemyTurret => TURRET_FIRE_CHANCE,
                _ => continue,
            };
            if pos.0.z <= ENEMY_FIRE_NEAR_Z || pos.0.z >= ENEMY_FIRE_FAR_Z {
                continue;
            }
            if rng.gen::<f32>() < chance {
                shots.push(pos.0);
            }
        }
    }

    for origin in shots {
        world_setup::spawn_enemy_projectile(world, origin, player_pos);
    }
}
