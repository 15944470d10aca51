//! Scene snapshot — the complete drawable state built after each frame.
//!
//! The renderer consumes a `SceneView` and a surface; it never touches
//! the ECS world. Snapshots are serializable so determinism tests can
//! compare whole frames.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::components::Particle;
use crate::enums::{EntityKind, SessionPhase};
use crate::types::{Color, FrameClock};

/// Complete drawable state for one frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneView {
    pub phase: SessionPhase,
    pub clock: FrameClock,
    pub theme_color: Color,
    pub score: u32,
    /// Player health, clamped to 0..=100 for display.
    pub health: i32,
    /// Player plus all live entities, unordered; the renderer
    /// depth-sorts before drawing.
    pub entities: Vec<EntityView>,
    pub particles: Vec<Particle>,
    pub hud: HudView,
}

/// One drawable entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EntityView {
    pub kind: EntityKind,
    pub position: Vec3,
    pub scale: Vec3,
    /// Bank angle about the viewing axis.
    pub bank: f32,
    pub tint: Color,
}

/// Aiming state for the HUD overlay.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct HudView {
    /// Raw pointer position in normalized screen space: the true aim
    /// reference, drawn without smoothing.
    pub pointer: Vec2,
    /// Smoothed reticle position: cosmetic targeting-computer lag only.
    pub reticle: Vec2,
    pub pointer_active: bool,
}

impl SceneView {
    /// The player's entity view, if present.
    pub fn player(&self) -> Option<&EntityView> {
        self.entities.iter().find(|e| e.kind == EntityKind::Player)
    }
}
