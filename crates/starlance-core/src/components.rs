//! ECS components for hecs entities, plus the particle record.
//!
//! All plain data; behavior belongs to the systems that read and
//! write these.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::types::Color;

/// World-space position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec3);

/// World-space velocity in units per nominal frame. For interceptors
/// and turrets this is a unit ray direction scaled by the scroll speed
/// at integration time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec3);

/// Per-axis draw scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale(pub Vec3);

impl Default for Scale {
    fn default() -> Self {
        Self(Vec3::ONE)
    }
}

/// Bank angle about the viewing axis (radians).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bank(pub f32);

/// Draw color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Tint(pub Color);

/// Remaining structural integrity. Conceptually floored at zero; an
/// entity whose health reaches zero is deactivated the same frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hull {
    pub health: f32,
}

/// Collision sphere radius. Always positive for collidable kinds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CollisionRadius(pub f32);

/// Points awarded when this entity is destroyed by player fire.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Bounty(pub u32);

/// Sinusoidal X weave. The phase is derived from the entity's spawn
/// serial, so each enemy's weave is deterministic but decorrelated.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Weave {
    pub phase: f32,
}

/// Spin rate about the viewing axis, radians per nominal frame.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Spin(pub f32);

/// Remaining lifetime for self-expiring entities (debris).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Expiry {
    pub remaining_ms: f32,
}

/// Marks the entity as the player's ship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerShip;

/// A single ephemeral particle. Owned by the particle store, never by
/// the ECS world; removed once `life` reaches zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Remaining life in milliseconds. Monotonically decreasing.
    pub life: f32,
    /// Initial life, for fade alpha (`life / max_life`).
    pub max_life: f32,
    pub color: Color,
}
