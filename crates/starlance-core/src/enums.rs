//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// The closed set of simulated entity kinds.
///
/// Per-kind update, collision, and draw behavior is dispatched by
/// matching on this enum; the set is fixed at design time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// The player's ship. Exactly one exists for the session lifetime.
    Player,
    /// Weaving fighter that closes on the camera.
    EnemyInterceptor,
    /// Slow gun platform, fires more eagerly, does not weave.
    EnemyTurret,
    /// Inert scenery column that scrolls with the floor and rams.
    ObstaclePillar,
    /// Player shot, fixed launch-time velocity.
    ProjectilePlayer,
    /// Enemy shot, aimed at the player's position when fired.
    ProjectileEnemy,
    /// Tumbling wreckage shed by destroyed enemies.
    Debris,
}

impl EntityKind {
    /// Kinds the player's shots can damage.
    pub fn is_hostile(self) -> bool {
        matches!(self, EntityKind::EnemyInterceptor | EntityKind::EnemyTurret)
    }

    /// Kinds rendered as depth-scaled glow discs instead of wireframes.
    pub fn is_projectile(self) -> bool {
        matches!(
            self,
            EntityKind::ProjectilePlayer | EntityKind::ProjectileEnemy
        )
    }
}

/// Session lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Simulation advancing normally.
    #[default]
    Playing,
    /// Simulation frozen; rendering continues.
    Paused,
    /// Player health reached zero. Terminal; rendering continues.
    Ended,
}
