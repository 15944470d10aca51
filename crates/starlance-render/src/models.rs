//! Vector models: closed polylines of local-space points, one
//! silhouette per wireframe entity kind.
//!
//! Points are `[x, y, z]` in local units with +Z pointing away from
//! the camera. The scene pass rotates X/Y about the viewing axis by
//! the entity's bank, applies the per-axis scale, translates, and
//! projects point by point.

use starlance_core::enums::EntityKind;

/// Dart silhouette, nose forward.
const PLAYER: [[f32; 3]; 5] = [
    [0.0, 0.0, 3.2],
    [2.4, 0.0, -2.0],
    [0.9, 0.5, -1.4],
    [-0.9, 0.5, -1.4],
    [-2.4, 0.0, -2.0],
];

/// Diamond fighter, nose toward the camera.
const INTERCEPTOR: [[f32; 3]; 4] = [
    [0.0, 0.0, -2.6],
    [2.0, 0.4, 1.2],
    [0.0, 1.0, 2.6],
    [-2.0, 0.4, 1.2],
];

/// Squat hexagonal platform.
const TURRET: [[f32; 3]; 6] = [
    [2.6, 0.0, 0.0],
    [1.3, 1.4, 0.0],
    [-1.3, 1.4, 0.0],
    [-2.6, 0.0, 0.0],
    [-1.3, -1.4, 0.0],
    [1.3, -1.4, 0.0],
];

/// Tall floor-standing slab.
const PILLAR: [[f32; 3]; 4] = [
    [-1.6, -6.0, 0.0],
    [-1.6, 6.0, 0.0],
    [1.6, 6.0, 0.0],
    [1.6, -6.0, 0.0],
];

/// Small irregular shard.
const DEBRIS: [[f32; 3]; 3] = [
    [0.0, 0.8, 0.0],
    [0.9, -0.5, 0.3],
    [-0.7, -0.4, -0.3],
];

/// The silhouette for a wireframe kind; `None` for projectile kinds,
/// which render as depth-scaled discs instead.
pub fn model_points(kind: EntityKind) -> Option<&'static [[f32; 3]]> {
    match kind {
        EntityKind::Player => Some(&PLAYER),
        EntityKind::EnemyInterceptor => Some(&INTERCEPTOR),
        EntityKind::EnemyTurret => Some(&TURRET),
        EntityKind::ObstaclePillar => Some(&PILLAR),
        EntityKind::Debris => Some(&DEBRIS),
        EntityKind::ProjectilePlayer | EntityKind::ProjectileEnemy => None,
    }
}
