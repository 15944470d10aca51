//! Collision resolution.
//!
//! All pairwise checks run against a snapshot of positions taken at
//! the top of the pass, and every effect (damage, consumption,
//! deactivation) is computed from that snapshot. Results are therefore
//! independent of processing order: an enemy that dies this frame
//! still rams with its pre-frame state, and vice versa. Entities are
//! only marked for removal here; the cleanup system despawns them
//! afterwards.

use glam::Vec3;
use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use starlance_core::components::{Bounty, CollisionRadius, Hull, Position, Tint};
use starlance_core::constants::{ENEMY_SHOT_DAMAGE, PROJECTILE_HIT_DAMAGE, RAM_DAMAGE};
use starlance_core::enums::EntityKind;
use starlance_core::projection::collides;
use starlance_core::types::Color;

use crate::particles::ParticleStore;
use crate::world_setup;

/// Aggregate result of one collision pass, applied by the engine.
#[derive(Debug, Default)]
pub struct Outcome {
    pub score_delta: u32,
    pub player_damage: f32,
}

#[derive(Clone, Copy)]
struct Collider {
    entity: Entity,
    kind: EntityKind,
    position: Vec3,
    radius: f32,
    tint: Color,
}

pub fn run(
    world: &mut World,
    player: Entity,
    despawn_buffer: &mut Vec<Entity>,
    particles: &mut ParticleStore,
    rng: &mut ChaCha8Rng,
) -> Outcome {
    // Pre-frame snapshot of every collidable entity not already
    // deactivated (e.g. by the out-of-bounds cull).
    let mut colliders: Vec<Collider> = Vec::new();
    {
        let mut query = world.query::<(&EntityKind, &Position, &CollisionRadius, &Tint)>();
        for (entity, (kind, pos, radius, tint)) in query.iter() {
            if despawn_buffer.contains(&entity) {
                continue;
            }
            colliders.push(Collider {
                entity,
                kind: *kind,
                position: pos.0,
                radius: radius.0,
                tint: tint.0,
            });
        }
    }

    let ship = match colliders.iter().find(|c| c.entity == player) {
        Some(c) => *c,
        None => return Outcome::default(),
    };

    let mut outcome = Outcome::default();
    // Damage accumulates per entity in snapshot order; a Vec keeps the
    // pass deterministic where a hash map would not be.
    let mut damage: Vec<(Entity, f32)> = Vec::new();
    let mut explosions: Vec<(Vec3, Color)> = Vec::new();

    // Player projectiles vs. hostiles. A shot is consumed once but
    // damages everything it overlaps this frame.
    for shot in colliders.iter().filter(|c| c.kind == EntityKind::ProjectilePlayer) {
        let mut hit_any = false;
        for target in colliders.iter().filter(|c| c.kind.is_hostile()) {
            if collides(shot.position, shot.radius, target.position, target.radius) {
                hit_any = true;
                accumulate(&mut damage, target.entity, PROJECTILE_HIT_DAMAGE);
                explosions.push((target.position, target.tint));
            }
        }
        if hit_any {
            despawn_buffer.push(shot.entity);
        }
    }

    // Hostiles and pillars ramming the player.
    for attacker in colliders
        .iter()
        .filter(|c| c.kind.is_hostile() || c.kind == EntityKind::ObstaclePillar)
    {
        if collides(attacker.position, attacker.radius, ship.position, ship.radius) {
            despawn_buffer.push(attacker.entity);
            outcome.player_damage += RAM_DAMAGE;
            explosions.push((ship.position, ship.tint));
        }
    }

    // Enemy projectiles vs. the player.
    for shot in colliders.iter().filter(|c| c.kind == EntityKind::ProjectileEnemy) {
        if collides(shot.position, shot.radius, ship.position, ship.radius) {
            despawn_buffer.push(shot.entity);
            outcome.player_damage += ENEMY_SHOT_DAMAGE;
            explosions.push((ship.position, shot.tint));
        }
    }

    // Apply accumulated damage; deaths score and shed debris.
    let mut deaths: Vec<(Vec3, Color)> = Vec::new();
    for (entity, amount) in damage {
        let dead = match world.get::<&mut Hull>(entity) {
            Ok(mut hull) => {
                hull.health -= amount;
                hull.health <= 0.0
            }
            Err(_) => false,
        };
        if dead {
            despawn_buffer.push(entity);
            if let Ok(bounty) = world.get::<&Bounty>(entity) {
                outcome.score_delta += bounty.0;
            }
            if let Some(c) = colliders.iter().find(|c| c.entity == entity) {
                deaths.push((c.position, c.tint));
            }
        }
    }

    for (origin, tint) in explosions {
        particles.emit_explosion(origin, tint, rng);
    }
    for (origin, tint) in deaths {
        particles.emit_explosion(origin, tint, rng);
        world_setup::spawn_debris_burst(world, rng, origin, tint);
    }

    outcome
}

fn accumulate(damage: &mut Vec<(Entity, f32)>, entity: Entity, amount: f32) {
    if let Some(entry) = damage.iter_mut().find(|(e, _)| *e == entity) {
        entry.1 += amount;
    } else {
        damage.push((entity, amount));
    }
}
