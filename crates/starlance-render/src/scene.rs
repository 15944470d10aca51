//! Scene orchestration: painter's-algorithm entity pass plus the
//! backdrop and HUD passes.
//!
//! Entities are sorted by descending world Z and drawn back to front,
//! so nearer wireframes overdraw farther ones without a depth buffer.
//! Runs every frame regardless of simulation phase, and reads the
//! surface size per call so host resizes apply on the next render.

use glam::{Vec2, Vec3};

use starlance_core::projection;
use starlance_core::state::{EntityView, SceneView};
use starlance_core::types::Color;

use crate::backdrop;
use crate::hud;
use crate::models;
use crate::surface::Surface;

const BACKGROUND: Color = Color::rgb(0.0, 0.0, 0.01);

/// Stroke width for entity outlines.
const OUTLINE_WIDTH: f32 = 1.5;

/// Alpha of the translucent glow fill behind each outline.
const FILL_ALPHA: f32 = 0.12;

/// Billboard radius of a projectile disc in world units at unit scale.
const PROJECTILE_DISC_RADIUS: f32 = 0.6;

/// Billboard radius of a particle disc in world units.
const PARTICLE_RADIUS: f32 = 0.45;

/// Render one frame of the scene.
pub fn render(view: &SceneView, surface: &mut dyn Surface, width: f32, height: f32) {
    surface.clear(BACKGROUND);
    backdrop::draw_sky(surface, view, width, height);
    backdrop::draw_grid(surface, view, width, height);
    backdrop::draw_starfield(surface, view, width, height);

    // Painter's algorithm: farthest first.
    let mut order: Vec<&EntityView> = view.entities.iter().collect();
    order.sort_by(|a, b| {
        b.position
            .z
            .partial_cmp(&a.position.z)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    for entity in order {
        draw_entity(entity, surface, width, height);
    }

    draw_particles(view, surface, width, height);
    hud::draw(surface, view, width, height);
}

fn draw_entity(entity: &EntityView, surface: &mut dyn Surface, width: f32, height: f32) {
    if entity.kind.is_projectile() {
        draw_projectile(entity, surface, width, height);
        return;
    }
    let Some(points) = models::model_points(entity.kind) else {
        return;
    };

    // Transform the closed polyline: bank about the viewing axis,
    // per-axis scale, translate, then project point by point. If any
    // point is clipped the whole silhouette is skipped this frame.
    let (sin_b, cos_b) = entity.bank.sin_cos();
    let mut screen: Vec<Vec2> = Vec::with_capacity(points.len());
    for &[x, y, z] in points {
        let local = Vec3::new(
            (x * cos_b - y * sin_b) * entity.scale.x,
            (x * sin_b + y * cos_b) * entity.scale.y,
            z * entity.scale.z,
        );
        match projection::project(entity.position + local, width, height) {
            Some(p) => screen.push(p),
            None => return,
        }
    }

    surface.fill_polygon(&screen, entity.tint.with_alpha(FILL_ALPHA));
    surface.stroke_polyline(&screen, entity.tint, OUTLINE_WIDTH, true);
}

/// Projectiles render as a glowing disc sized by the projected depth
/// scale rather than a full wireframe.
fn draw_projectile(entity: &EntityView, surface: &mut dyn Surface, width: f32, height: f32) {
    let s = projection::scale_factor(entity.position.z);
    if s <= 0.0 {
        return;
    }
    let Some(center) = projection::project(entity.position, width, height) else {
        return;
    };
    let radius = PROJECTILE_DISC_RADIUS * entity.scale.x * s;
    surface.fill_circle(center, radius * 2.2, entity.tint.with_alpha(0.25));
    surface.fill_circle(center, radius, entity.tint);
}

fn draw_particles(view: &SceneView, surface: &mut dyn Surface, width: f32, height: f32) {
    for particle in &view.particles {
        let Some(center) = projection::project(particle.position, width, height) else {
            continue;
        };
        let s = projection::scale_factor(particle.position.z);
        if s <= 0.0 {
            continue;
        }
        let fade = (particle.life / particle.max_life).clamp(0.0, 1.0);
        surface.fill_circle(
            center,
            PARTICLE_RADIUS * s,
            particle.color.with_alpha(particle.color.a * fade),
        );
    }
}
