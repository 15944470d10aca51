//! Kinematic integration, dispatched by entity kind.
//!
//! Projectiles and debris integrate their stored velocity; enemies
//! advance along their camera ray at the scroll speed; pillars scroll
//! straight with the floor. The enemy weave is applied as a closed-form
//! sinusoid of game time, so it contributes nothing when dt is zero and
//! is identical across runs.

use hecs::World;

use starlance_core::components::{Bank, Expiry, Position, Spin, Velocity, Weave};
use starlance_core::constants::{TURRET_SCROLL_FACTOR, WEAVE_AMPLITUDE, WEAVE_RATE};
use starlance_core::enums::EntityKind;

pub fn run(world: &mut World, scroll: f32, dtf: f32, dt_ms: f32, elapsed_ms: f32) {
    for (_entity, (kind, pos, vel)) in
        world.query_mut::<(&EntityKind, &mut Position, &Velocity)>()
    {
        match kind {
            EntityKind::EnemyInterceptor => pos.0 += vel.0 * scroll,
            EntityKind::EnemyTurret => pos.0 += vel.0 * scroll * TURRET_SCROLL_FACTOR,
            EntityKind::ObstaclePillar => pos.0.z -= scroll,
            EntityKind::ProjectilePlayer
            | EntityKind::ProjectileEnemy
            | EntityKind::Debris => pos.0 += vel.0 * dtf,
            // The ship is moved by the ship system.
            EntityKind::Player => {}
        }
    }

    // Weave: difference of the absolute sinusoid between the previous
    // and current game time, phase-shifted per entity.
    let t1 = elapsed_ms * WEAVE_RATE;
    let t0 = (elapsed_ms - dt_ms) * WEAVE_RATE;
    for (_entity, (pos, weave)) in world.query_mut::<(&mut Position, &Weave)>() {
        pos.0.x += ((t1 + weave.phase).sin() - (t0 + weave.phase).sin()) * WEAVE_AMPLITUDE;
    }

    for (_entity, (bank, spin)) in world.query_mut::<(&mut Bank, &Spin)>() {
        bank.0 += spin.0 * dtf;
    }

    for (_entity, expiry) in world.query_mut::<&mut Expiry>() {
        expiry.remaining_ms -= dt_ms;
    }
}
