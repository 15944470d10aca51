//! Renderer tests against recorded draw-command lists.

use glam::{Vec2, Vec3};

use starlance_core::components::Particle;
use starlance_core::enums::EntityKind;
use starlance_core::state::{EntityView, HudView, SceneView};
use starlance_core::types::Color;

use crate::scene::render;
use crate::surface::{DrawCmd, RecordingSurface};

const W: f32 = 1280.0;
const H: f32 = 720.0;

const RED: Color = Color::rgb(1.0, 0.0, 0.0);
const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);

fn entity(kind: EntityKind, position: Vec3, tint: Color) -> EntityView {
    EntityView {
        kind,
        position,
        scale: Vec3::ONE,
        bank: 0.0,
        tint,
    }
}

fn base_view() -> SceneView {
    SceneView {
        theme_color: Color::rgb(0.95, 0.35, 0.55),
        health: 100,
        entities: vec![entity(
            EntityKind::Player,
            Vec3::new(0.0, 14.0, 0.0),
            Color::rgb(0.55, 0.95, 1.0),
        )],
        hud: HudView {
            pointer: Vec2::new(0.5, 0.0),
            reticle: Vec2::new(0.2, 0.1),
            pointer_active: true,
        },
        ..SceneView::default()
    }
}

fn rendered(view: &SceneView, width: f32, height: f32) -> Vec<DrawCmd> {
    let mut surface = RecordingSurface::new();
    render(view, &mut surface, width, height);
    surface.commands
}

fn outline_index(commands: &[DrawCmd], tint: Color) -> Option<usize> {
    commands.iter().position(|c| {
        matches!(c, DrawCmd::StrokePolyline { color, closed: true, .. } if *color == tint)
    })
}

#[test]
fn test_frame_begins_with_clear_and_sky() {
    let commands = rendered(&base_view(), W, H);
    assert!(matches!(commands[0], DrawCmd::Clear { .. }));
    assert!(matches!(commands[1], DrawCmd::VerticalGradient { .. }));
}

#[test]
fn test_entities_draw_back_to_front() {
    let mut view = base_view();
    view.entities.push(entity(
        EntityKind::EnemyInterceptor,
        Vec3::new(0.0, 30.0, 100.0),
        GREEN,
    ));
    view.entities.push(entity(
        EntityKind::EnemyInterceptor,
        Vec3::new(0.0, 50.0, 300.0),
        RED,
    ));

    let commands = rendered(&view, W, H);
    let far = outline_index(&commands, RED).expect("far enemy drawn");
    let near = outline_index(&commands, GREEN).expect("near enemy drawn");
    let player = outline_index(&commands, view.entities[0].tint).expect("player drawn");
    assert!(far < near, "farther entity must be drawn first");
    assert!(near < player, "player at depth zero draws last");
}

#[test]
fn test_clipped_entity_skipped_entirely() {
    let mut view = base_view();
    view.entities.push(entity(
        EntityKind::EnemyInterceptor,
        Vec3::new(0.0, 50.0, 6000.0),
        RED,
    ));
    let commands = rendered(&view, W, H);
    assert!(
        outline_index(&commands, RED).is_none(),
        "beyond the far clip nothing of the silhouette may draw"
    );
}

#[test]
fn test_wireframe_has_glow_fill_under_outline() {
    let view = base_view();
    let commands = rendered(&view, W, H);
    let tint = view.entities[0].tint;
    let fill = commands
        .iter()
        .position(|c| matches!(c, DrawCmd::FillPolygon { color, .. } if color.r == tint.r))
        .expect("glow fill present");
    let outline = outline_index(&commands, tint).unwrap();
    assert!(fill < outline, "fill renders beneath the stroke");
}

#[test]
fn test_projectile_renders_as_disc() {
    let mut view = base_view();
    view.entities.push(entity(
        EntityKind::ProjectilePlayer,
        Vec3::new(0.0, 50.0, 200.0),
        RED,
    ));
    let commands = rendered(&view, W, H);
    assert!(outline_index(&commands, RED).is_none(), "no wireframe for shots");
    let discs = commands
        .iter()
        .filter(|c| matches!(c, DrawCmd::FillCircle { color, .. } if color.r == RED.r && color.g == RED.g))
        .count();
    assert_eq!(discs, 2, "glow halo plus core disc");
}

#[test]
fn test_particle_alpha_fades_with_life() {
    let mut view = base_view();
    view.particles.push(Particle {
        position: Vec3::new(0.0, 20.0, 100.0),
        velocity: Vec3::ZERO,
        life: 60.0,
        max_life: 240.0,
        color: RED,
    });
    let commands = rendered(&view, W, H);
    let alpha = commands.iter().find_map(|c| match c {
        DrawCmd::FillCircle { color, .. } if color.r == RED.r && color.g == RED.g => {
            Some(color.a)
        }
        _ => None,
    });
    let alpha = alpha.expect("particle disc drawn");
    assert!((alpha - 0.25).abs() < 1e-6, "alpha = life/max_life, got {alpha}");
}

#[test]
fn test_hud_draws_last_and_only_when_active() {
    let view = base_view();
    let commands = rendered(&view, W, H);

    let dashed = commands
        .iter()
        .position(|c| matches!(c, DrawCmd::DashedLine { .. }))
        .expect("targeting link drawn");
    let last_world = commands
        .iter()
        .rposition(|c| matches!(c, DrawCmd::StrokePolyline { closed: true, .. }))
        .unwrap();
    assert!(dashed > last_world, "HUD must draw over the world pass");

    let mut inactive = base_view();
    inactive.hud.pointer_active = false;
    let commands = rendered(&inactive, W, H);
    assert!(
        !commands.iter().any(|c| matches!(c, DrawCmd::DashedLine { .. })),
        "no reticle without an active pointer"
    );
}

#[test]
fn test_resize_honored_on_next_render() {
    let view = base_view();
    let marker = Color::rgb(0.95, 1.0, 0.98);

    let find_marker_x = |commands: &[DrawCmd]| {
        commands.iter().find_map(|c| match c {
            DrawCmd::FillCircle { center, color, .. } if *color == marker => Some(center.x),
            _ => None,
        })
    };

    let narrow = find_marker_x(&rendered(&view, 800.0, 600.0)).expect("marker at 800px");
    let wide = find_marker_x(&rendered(&view, 1600.0, 600.0)).expect("marker at 1600px");
    assert!((narrow - 600.0).abs() < 1e-3, "0.5 normalized on 800px → 600");
    assert!((wide - 1200.0).abs() < 1e-3, "0.5 normalized on 1600px → 1200");
}

#[test]
fn test_render_is_deterministic() {
    let mut view = base_view();
    view.clock.elapsed_ms = 1234.0;
    view.clock.scroll_phase = 77.0;
    view.entities.push(entity(
        EntityKind::EnemyTurret,
        Vec3::new(-6.0, 40.0, 250.0),
        GREEN,
    ));
    assert_eq!(rendered(&view, W, H), rendered(&view, W, H));
}

#[test]
fn test_grid_scrolls_with_phase() {
    let mut view_a = base_view();
    view_a.hud.pointer_active = false;
    let mut view_b = view_a.clone();
    view_b.clock.scroll_phase = 13.0;
    assert_ne!(
        rendered(&view_a, W, H),
        rendered(&view_b, W, H),
        "latitudinal lines must move with the scroll phase"
    );
}
