//! Backdrop passes: gradient sky, scrolling floor grid, starfield.
//!
//! The starfield uses closed-form periodic placement from the star
//! index and elapsed time — no persisted state, so a given time value
//! always produces the same sky.

use glam::Vec3;

use starlance_core::constants::{CAMERA_PITCH, FOCAL_LENGTH};
use starlance_core::projection;
use starlance_core::state::SceneView;
use starlance_core::types::Color;

use crate::surface::Surface;

const SKY_TOP: Color = Color::rgb(0.01, 0.01, 0.04);

/// Longitudinal grid line spacing and extent (world units).
const GRID_SPACING_X: f32 = 8.0;
const GRID_HALF_WIDTH: f32 = 64.0;
const GRID_NEAR_Z: f32 = -20.0;
const GRID_FAR_Z: f32 = 600.0;

/// Latitudinal line spacing; their Z offset cycles with the scroll
/// phase to sell forward motion.
const GRID_SPACING_Z: f32 = 40.0;

const STAR_COUNT: u32 = 70;

/// Screen Y of the horizon: where the floor plane vanishes.
pub fn horizon_y(height: f32) -> f32 {
    height * 0.5 + FOCAL_LENGTH * CAMERA_PITCH.tan()
}

/// Vertical gradient from deep sky down to the theme-tinted horizon.
pub fn draw_sky(surface: &mut dyn Surface, view: &SceneView, width: f32, height: f32) {
    let glow = view.theme_color.with_alpha(0.45);
    surface.fill_vertical_gradient(0.0, 0.0, width, horizon_y(height), SKY_TOP, glow);
}

/// Scrolling floor grid on the Y = 0 plane. Straight world lines
/// project to straight screen lines, so two endpoints per line
/// suffice.
pub fn draw_grid(surface: &mut dyn Surface, view: &SceneView, width: f32, height: f32) {
    let color = view.theme_color.with_alpha(0.30);

    // Fixed-X longitudinal lines running away from the camera.
    let mut x = -GRID_HALF_WIDTH;
    while x <= GRID_HALF_WIDTH {
        let near = projection::project(Vec3::new(x, 0.0, GRID_NEAR_Z), width, height);
        let far = projection::project(Vec3::new(x, 0.0, GRID_FAR_Z), width, height);
        if let (Some(a), Some(b)) = (near, far) {
            surface.line(a, b, color, 1.0);
        }
        x += GRID_SPACING_X;
    }

    // Latitudinal lines; the cycle offset makes them stream toward the
    // camera as the world scrolls.
    let offset = view.clock.scroll_phase.rem_euclid(GRID_SPACING_Z);
    let mut k = 0;
    loop {
        let z = GRID_FAR_Z - offset - k as f32 * GRID_SPACING_Z;
        if z < GRID_NEAR_Z {
            break;
        }
        let left = projection::project(Vec3::new(-GRID_HALF_WIDTH, 0.0, z), width, height);
        let right = projection::project(Vec3::new(GRID_HALF_WIDTH, 0.0, z), width, height);
        if let (Some(a), Some(b)) = (left, right) {
            surface.line(a, b, color, 1.0);
        }
        k += 1;
    }
}

/// Procedural starfield above the horizon.
pub fn draw_starfield(surface: &mut dyn Surface, view: &SceneView, width: f32, height: f32) {
    let ceiling = horizon_y(height) * 0.9;
    for i in 0..STAR_COUNT {
        let fx = hash01(i as f32 * 12.9898);
        let fy = hash01(i as f32 * 78.233);
        let fs = hash01(i as f32 * 39.425);

        // Slow index-dependent drift, wrapped across the surface.
        let drift = view.clock.elapsed_ms * 0.004 * (0.2 + fs * 0.8);
        let x = (fx * width + drift).rem_euclid(width);
        let y = fy * ceiling;
        let color = Color::rgb(0.9, 0.92, 1.0).with_alpha(0.25 + fs * 0.6);
        surface.fill_circle(glam::Vec2::new(x, y), 0.8 + fs * 1.1, color);
    }
}

/// Cheap deterministic hash onto 0.0..1.0.
fn hash01(seed: f32) -> f32 {
    (seed.sin() * 43_758.547).rem_euclid(1.0)
}
