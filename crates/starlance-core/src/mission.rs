//! Mission parameters supplied once at session start.
//!
//! Produced by an external mission-generation collaborator; the core is
//! agnostic to whether the record came from a remote service or its
//! static fallback, and only sanitizes non-finite numerics.

use serde::{Deserialize, Serialize};

use crate::types::Color;

/// Fallback spawn-probability scale.
pub const FALLBACK_ENEMY_DENSITY: f32 = 0.5;

/// Fallback world scroll scale.
pub const FALLBACK_SPEED_MODIFIER: f32 = 1.0;

/// Tunables scoping one play session. Immutable for the session
/// lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionParameters {
    pub title: String,
    pub briefing: String,
    pub theme_color: Color,
    /// Spawn-probability scale, roughly 0.0..=1.0.
    pub enemy_density: f32,
    /// World scroll speed scale.
    pub speed_modifier: f32,
}

impl MissionParameters {
    /// The fixed synthetic record used when no generator is available.
    pub fn fallback() -> Self {
        Self {
            title: "Patrol the Lane".into(),
            briefing: "Hostile contacts inbound along the corridor. \
                       Hold the lane and return intact."
                .into(),
            theme_color: Color::rgb(0.95, 0.35, 0.55),
            enemy_density: FALLBACK_ENEMY_DENSITY,
            speed_modifier: FALLBACK_SPEED_MODIFIER,
        }
    }

    /// Replace non-finite numerics with the fallback values. The core
    /// performs no other validation; range discipline is the
    /// generator's responsibility.
    pub fn sanitized(mut self) -> Self {
        if !self.enemy_density.is_finite() {
            self.enemy_density = FALLBACK_ENEMY_DENSITY;
        }
        if !self.speed_modifier.is_finite() {
            self.speed_modifier = FALLBACK_SPEED_MODIFIER;
        }
        if !self.theme_color.is_finite() {
            self.theme_color = Self::fallback().theme_color;
        }
        self
    }
}

impl Default for MissionParameters {
    fn default() -> Self {
        Self::fallback()
    }
}
