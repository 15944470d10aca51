//! Dual-stage aiming reticle.
//!
//! Two markers from the same raw input: a small immediate marker at
//! the raw pointer position (the true firing-aim reference), and a
//! larger bracket at the smoothed reticle position — pure
//! targeting-computer lag. A dashed line ties a point ahead of the
//! ship's nose to the bracket. Drawn last, outside the world depth
//! sort.

use glam::{Vec2, Vec3};

use starlance_core::constants::NOSE_AHEAD;
use starlance_core::projection;
use starlance_core::state::SceneView;
use starlance_core::types::Color;

use crate::surface::Surface;

const MARKER_COLOR: Color = Color::rgb(0.95, 1.0, 0.98);

/// Immediate marker radius (pixels).
const MARKER_RADIUS: f32 = 2.5;
const MARKER_ARM: f32 = 7.0;

/// Bracket half-size and corner arm length (pixels).
const BRACKET_HALF: f32 = 18.0;
const BRACKET_ARM: f32 = 8.0;

pub fn draw(surface: &mut dyn Surface, view: &SceneView, width: f32, height: f32) {
    if !view.hud.pointer_active {
        return;
    }

    let raw = to_screen(view.hud.pointer, width, height);
    let lagged = to_screen(view.hud.reticle, width, height);
    let bracket_color = view.theme_color.with_alpha(0.9);

    // Dashed link from ahead of the ship's nose to the lagged bracket.
    if let Some(player) = view.player() {
        let nose = player.position + Vec3::new(0.0, 0.0, NOSE_AHEAD);
        if let Some(anchor) = projection::project(nose, width, height) {
            surface.dashed_line(anchor, lagged, bracket_color.with_alpha(0.5), 1.0, 6.0, 5.0);
        }
    }

    // Lagged bracket: four corner angles.
    for (sx, sy) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
        let corner = lagged + Vec2::new(sx * BRACKET_HALF, sy * BRACKET_HALF);
        let arm = [
            corner + Vec2::new(0.0, -sy * BRACKET_ARM),
            corner,
            corner + Vec2::new(-sx * BRACKET_ARM, 0.0),
        ];
        surface.stroke_polyline(&arm, bracket_color, 1.5, false);
    }

    // Immediate marker: dot plus a thin cross.
    surface.fill_circle(raw, MARKER_RADIUS, MARKER_COLOR);
    surface.line(
        raw + Vec2::new(-MARKER_ARM, 0.0),
        raw + Vec2::new(MARKER_ARM, 0.0),
        MARKER_COLOR.with_alpha(0.7),
        1.0,
    );
    surface.line(
        raw + Vec2::new(0.0, -MARKER_ARM),
        raw + Vec2::new(0.0, MARKER_ARM),
        MARKER_COLOR.with_alpha(0.7),
        1.0,
    );
}

/// Normalized [-1, 1] position to surface pixels.
fn to_screen(n: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new(
        n.x * width * 0.5 + width * 0.5,
        n.y * height * 0.5 + height * 0.5,
    )
}
