//! Simulation constants and tuning parameters.

use glam::Vec3;

use crate::types::Color;

// --- Camera ---

/// Fixed camera position in world space.
pub const CAMERA_POS: Vec3 = Vec3::new(0.0, 8.0, -30.0);

/// Camera pitch about the horizontal axis (radians).
pub const CAMERA_PITCH: f32 = 0.2;

/// Focal length in pixels.
pub const FOCAL_LENGTH: f32 = 500.0;

/// Near clip plane (camera-space depth).
pub const NEAR_CLIP: f32 = 1.0;

/// Far clip plane (camera-space depth).
pub const FAR_CLIP: f32 = 5000.0;

// --- Frame timing ---

/// Nominal frame duration; velocities are expressed per nominal frame
/// and integrated as `dt / NOMINAL_FRAME_MS`.
pub const NOMINAL_FRAME_MS: f32 = 16.0;

// --- Control feel ---

/// Per-frame exponential smoothing factor for the HUD reticle.
/// Applied per frame, not per unit time: the visual lag is tied to the
/// nominal frame cadence.
pub const RETICLE_LAG: f32 = 0.15;

/// Per-frame exponential factor pulling the ship toward its target.
/// Same per-frame semantics as `RETICLE_LAG`.
pub const SHIP_LAG: f32 = 0.08;

/// Bank angle per world unit of lag distance behind the target.
pub const BANK_FACTOR: f32 = 0.09;

/// Playfield clamp margin inside the unprojected screen bounds.
pub const SHIP_MARGIN: f32 = 2.0;

/// Lowest allowed ship altitude, keeps the hull above the floor grid.
pub const SHIP_FLOOR_Y: f32 = 1.0;

/// Depth ahead of the ship's nose anchoring the HUD targeting line.
pub const NOSE_AHEAD: f32 = 12.0;

// --- World scroll ---

/// Base scroll speed in world units per nominal frame, before the
/// mission speed modifier.
pub const BASE_SCROLL_SPEED: f32 = 2.0;

/// Scroll factor applied to turrets (heavier, slower platforms).
pub const TURRET_SCROLL_FACTOR: f32 = 0.75;

// --- Spawning ---

/// No enemies spawn during the first moments of a session.
pub const SPAWN_GRACE_MS: f32 = 1500.0;

/// Per-frame spawn probability at enemy density 1.0.
pub const SPAWN_CHANCE: f32 = 0.02;

/// World Z at which enemies and pillars appear.
pub const SPAWN_DEPTH: f32 = 400.0;

/// Spawn X is randomized within this half-width around the lane center.
pub const SPAWN_LANE_HALF_WIDTH: f32 = 20.0;

/// Spawn-roll share producing an interceptor.
pub const SPAWN_SHARE_INTERCEPTOR: f32 = 0.70;

/// Cumulative spawn-roll share producing a turret; the remainder is a
/// pillar.
pub const SPAWN_SHARE_TURRET: f32 = 0.90;

// --- Firing ---

/// Minimum interval between player shots (milliseconds).
pub const FIRE_INTERVAL_MS: f32 = 100.0;

/// World Z of the aim plane; the shot direction runs from the ship to
/// the unprojected pointer at this depth.
pub const AIM_DEPTH: f32 = 400.0;

/// Player projectile speed, world units per nominal frame.
pub const PLAYER_PROJECTILE_SPEED: f32 = 6.0;

/// Enemy projectile speed, world units per nominal frame.
pub const ENEMY_PROJECTILE_SPEED: f32 = 3.5;

/// Per-frame probability an interceptor fires while in the firing band.
pub const ENEMY_FIRE_CHANCE: f32 = 0.015;

/// Per-frame probability a turret fires while in the firing band.
pub const TURRET_FIRE_CHANCE: f32 = 0.03;

/// Enemies only fire while NEAR < z < FAR.
pub const ENEMY_FIRE_NEAR_Z: f32 = 50.0;
pub const ENEMY_FIRE_FAR_Z: f32 = 300.0;

// --- Damage & health ---

pub const PLAYER_START_HEALTH: f32 = 100.0;

/// Damage per player projectile hit.
pub const PROJECTILE_HIT_DAMAGE: f32 = 50.0;

/// Damage to the player when an enemy or pillar rams the ship.
pub const RAM_DAMAGE: f32 = 20.0;

/// Damage to the player per enemy projectile hit.
pub const ENEMY_SHOT_DAMAGE: f32 = 10.0;

// --- Per-kind defaults ---

pub const INTERCEPTOR_HEALTH: f32 = 50.0;
pub const INTERCEPTOR_RADIUS: f32 = 4.0;
pub const INTERCEPTOR_BOUNTY: u32 = 100;

pub const TURRET_HEALTH: f32 = 80.0;
pub const TURRET_RADIUS: f32 = 4.5;
pub const TURRET_BOUNTY: u32 = 250;

pub const PILLAR_RADIUS: f32 = 6.0;

/// Pillars stand on the floor; the collision sphere is centered at this
/// altitude.
pub const PILLAR_CENTER_Y: f32 = 6.0;

pub const PLAYER_RADIUS: f32 = 2.5;
pub const PLAYER_PROJECTILE_RADIUS: f32 = 1.5;
pub const ENEMY_PROJECTILE_RADIUS: f32 = 1.2;

// --- Culling ---

/// Entities outside (CULL_NEAR_Z, CULL_FAR_Z) are removed at end of
/// frame.
pub const CULL_NEAR_Z: f32 = -40.0;
pub const CULL_FAR_Z: f32 = 500.0;

// --- Enemy weave ---

/// Sinusoidal weave amplitude in world X.
pub const WEAVE_AMPLITUDE: f32 = 2.5;

/// Weave angular rate, radians per millisecond of game time.
pub const WEAVE_RATE: f32 = 0.003;

/// Phase stride between consecutive spawns (golden angle) so each
/// enemy's weave is deterministic but decorrelated from the others.
pub const WEAVE_PHASE_STRIDE: f32 = 2.399_963;

// --- Particles ---

/// Thruster emission cadence in accumulated game time.
pub const THRUSTER_INTERVAL_MS: f32 = 30.0;

pub const THRUSTER_LIFE_MS: f32 = 240.0;

/// Lateral offset of the two thruster nozzles from the ship centerline.
pub const THRUSTER_OFFSET_X: f32 = 0.9;

pub const EXPLOSION_PARTICLES: usize = 18;
pub const EXPLOSION_LIFE_MIN_MS: f32 = 380.0;
pub const EXPLOSION_LIFE_MAX_MS: f32 = 650.0;
pub const EXPLOSION_SPEED_MAX: f32 = 2.5;

// --- Debris ---

pub const DEBRIS_PIECES: usize = 3;
pub const DEBRIS_LIFE_MS: f32 = 900.0;
pub const DEBRIS_SPEED_MAX: f32 = 1.5;

// --- Colors ---

pub const PLAYER_COLOR: Color = Color::rgb(0.55, 0.95, 1.0);
pub const PLAYER_PROJECTILE_COLOR: Color = Color::rgb(1.0, 0.95, 0.5);
pub const ENEMY_PROJECTILE_COLOR: Color = Color::rgb(1.0, 0.45, 0.35);
