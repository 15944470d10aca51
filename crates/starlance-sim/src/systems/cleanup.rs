//! Cleanup system: deactivation and end-of-frame compaction.
//!
//! `cull_out_of_bounds` marks entities outside the play volume and
//! expired debris; `drain` despawns everything marked during the
//! frame. Marking and despawning are separate passes so no system ever
//! observes a half-removed frame.

use hecs::{Entity, World};

use starlance_core::components::{Expiry, Position};
use starlance_core::constants::{CULL_FAR_Z, CULL_NEAR_Z};
use starlance_core::enums::EntityKind;

/// Mark entities outside the Z play band, and debris past its
/// lifetime.
pub fn cull_out_of_bounds(world: &mut World, player: Entity, despawn_buffer: &mut Vec<Entity>) {
    for (entity, (_kind, pos)) in world.query_mut::<(&EntityKind, &Position)>() {
        if entity == player {
            continue;
        }
        if pos.0.z < CULL_NEAR_Z || pos.0.z > CULL_FAR_Z {
            despawn_buffer.push(entity);
        }
    }

    for (entity, expiry) in world.query_mut::<&Expiry>() {
        if expiry.remaining_ms <= 0.0 {
            despawn_buffer.push(entity);
        }
    }
}

/// Despawn everything marked this frame. Duplicate marks are harmless;
/// the second despawn is a no-op.
pub fn drain(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
