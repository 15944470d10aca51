//! Entity spawn factories.
//!
//! Creates the player ship, enemies, obstacles, projectiles, and
//! debris with appropriate component bundles. Interceptors and turrets
//! fly the straight line through their spawn point and the camera, so
//! an approaching enemy holds its screen position while growing.

use glam::Vec3;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starlance_core::components::*;
use starlance_core::constants::*;
use starlance_core::enums::EntityKind;
use starlance_core::projection;
use starlance_core::types::Color;

/// World position the ship eases back to for a centered pointer: the
/// unprojection of screen center at depth zero.
pub fn ship_rest_position() -> Vec3 {
    // Screen-center unprojection is independent of the surface size.
    projection::unproject(0.0, 0.0, 0.0, 2.0, 2.0)
        .unwrap_or_else(|| Vec3::new(0.0, CAMERA_POS.y, 0.0))
}

/// Altitude of the lane center (the screen-center ray) at world Z.
pub fn lane_altitude(z: f32) -> f32 {
    projection::unproject(0.0, 0.0, z, 2.0, 2.0)
        .map(|p| p.y)
        .unwrap_or(CAMERA_POS.y)
}

/// Spawn the player's ship. Exactly one exists per session.
pub fn spawn_player(world: &mut World) -> hecs::Entity {
    world.spawn((
        PlayerShip,
        EntityKind::Player,
        Position(ship_rest_position()),
        Velocity::default(),
        Scale::default(),
        Bank(0.0),
        Tint(PLAYER_COLOR),
        Hull {
            health: PLAYER_START_HEALTH,
        },
        CollisionRadius(PLAYER_RADIUS),
    ))
}

/// Spawn a weaving interceptor at the given lane X.
pub fn spawn_interceptor(world: &mut World, x: f32, serial: u32, tint: Color) -> hecs::Entity {
    let position = Vec3::new(x, lane_altitude(SPAWN_DEPTH), SPAWN_DEPTH);
    let ray = (CAMERA_POS - position).normalize();
    world.spawn((
        EntityKind::EnemyInterceptor,
        Position(position),
        Velocity(ray),
        Scale::default(),
        Bank(0.0),
        Tint(tint),
        Hull {
            health: INTERCEPTOR_HEALTH,
        },
        CollisionRadius(INTERCEPTOR_RADIUS),
        Bounty(INTERCEPTOR_BOUNTY),
        Weave {
            phase: serial as f32 * WEAVE_PHASE_STRIDE,
        },
    ))
}

/// Spawn a turret platform at the given lane X. Turrets ride the same
/// camera ray as interceptors but slower, and never weave.
pub fn spawn_turret(world: &mut World, x: f32, tint: Color) -> hecs::Entity {
    let position = Vec3::new(x, lane_altitude(SPAWN_DEPTH), SPAWN_DEPTH);
    let ray = (CAMERA_POS - position).normalize();
    world.spawn((
        EntityKind::EnemyTurret,
        Position(position),
        Velocity(ray),
        Scale(Vec3::splat(1.2)),
        Bank(0.0),
        Tint(tint),
        Hull {
            health: TURRET_HEALTH,
        },
        CollisionRadius(TURRET_RADIUS),
        Bounty(TURRET_BOUNTY),
    ))
}

/// Spawn a ground pillar. Scrolls with the floor, rams the player,
/// shrugs off player fire.
pub fn spawn_pillar(world: &mut World, x: f32, tint: Color) -> hecs::Entity {
    world.spawn((
        EntityKind::ObstaclePillar,
        Position(Vec3::new(x, PILLAR_CENTER_Y, SPAWN_DEPTH)),
        Velocity::default(),
        Scale::default(),
        Bank(0.0),
        Tint(tint),
        CollisionRadius(PILLAR_RADIUS),
    ))
}

/// Spawn a player shot with its fixed launch-time velocity.
pub fn spawn_player_projectile(
    world: &mut World,
    origin: Vec3,
    velocity: Vec3,
) -> hecs::Entity {
    world.spawn((
        EntityKind::ProjectilePlayer,
        Position(origin),
        Velocity(velocity),
        Scale::default(),
        Bank(0.0),
        Tint(PLAYER_PROJECTILE_COLOR),
        CollisionRadius(PLAYER_PROJECTILE_RADIUS),
    ))
}

/// Spawn an enemy shot aimed at the target's position at fire time.
/// The velocity never updates afterwards.
pub fn spawn_enemy_projectile(world: &mut World, origin: Vec3, target: Vec3) -> hecs::Entity {
    let dir = (target - origin).normalize_or_zero();
    let dir = if dir == Vec3::ZERO { Vec3::NEG_Z } else { dir };
    world.spawn((
        EntityKind::ProjectileEnemy,
        Position(origin),
        Velocity(dir * ENEMY_PROJECTILE_SPEED),
        Scale::default(),
        Bank(0.0),
        Tint(ENEMY_PROJECTILE_COLOR),
        CollisionRadius(ENEMY_PROJECTILE_RADIUS),
    ))
}

/// Scatter tumbling wreckage where an enemy died.
pub fn spawn_debris_burst(world: &mut World, rng: &mut ChaCha8Rng, origin: Vec3, tint: Color) {
    for _ in 0..DEBRIS_PIECES {
        let speed = rng.gen_range(0.3..DEBRIS_SPEED_MAX);
        let velocity = random_direction(rng) * speed;
        let size = rng.gen_range(0.5..1.0);
        world.spawn((
            EntityKind::Debris,
            Position(origin),
            Velocity(velocity),
            Scale(Vec3::splat(size)),
            Bank(rng.gen_range(0.0..std::f32::consts::TAU)),
            Spin(rng.gen_range(-0.3..0.3)),
            Tint(tint.with_alpha(0.8)),
            Expiry {
                remaining_ms: DEBRIS_LIFE_MS,
            },
        ));
    }
}

/// Uniform-ish random unit vector (rejection-free, adequate for
/// cosmetic scatter).
pub(crate) fn random_direction(rng: &mut ChaCha8Rng) -> Vec3 {
    let v = Vec3::new(
        rng.gen_range(-1.0..1.0),
        rng.gen_range(-1.0..1.0),
        rng.gen_range(-1.0..1.0),
    );
    let v = v.normalize_or_zero();
    if v == Vec3::ZERO {
        Vec3::X
    } else {
        v
    }
}
