//! The caller-provided 2D drawing surface.
//!
//! Hosts implement `Surface` over whatever backend they render with
//! (a canvas, a GPU quad batcher, a test recorder). The renderer only
//! ever speaks these primitives. `RecordingSurface` captures the draw
//! command list for headless hosts and tests; recorded frames are
//! serializable and comparable.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use starlance_core::types::Color;

pub trait Surface {
    fn clear(&mut self, color: Color);
    /// Axis-aligned rectangle filled with a vertical gradient.
    fn fill_vertical_gradient(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        top: Color,
        bottom: Color,
    );
    fn line(&mut self, a: Vec2, b: Vec2, color: Color, width: f32);
    fn dashed_line(&mut self, a: Vec2, b: Vec2, color: Color, width: f32, dash: f32, gap: f32);
    /// Stroke a polyline; `closed` joins the last point back to the
    /// first.
    fn stroke_polyline(&mut self, points: &[Vec2], color: Color, width: f32, closed: bool);
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
}

/// One recorded drawing primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCmd {
    Clear {
        color: Color,
    },
    VerticalGradient {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        top: Color,
        bottom: Color,
    },
    Line {
        a: Vec2,
        b: Vec2,
        color: Color,
        width: f32,
    },
    DashedLine {
        a: Vec2,
        b: Vec2,
        color: Color,
        width: f32,
        dash: f32,
        gap: f32,
    },
    StrokePolyline {
        points: Vec<Vec2>,
        color: Color,
        width: f32,
        closed: bool,
    },
    FillPolygon {
        points: Vec<Vec2>,
        color: Color,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
}

/// A surface that records everything drawn into it.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCmd>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the recorded frame, keeping the allocation.
    pub fn reset(&mut self) {
        self.commands.clear();
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCmd::Clear { color });
    }

    fn fill_vertical_gradient(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        top: Color,
        bottom: Color,
    ) {
        self.commands.push(DrawCmd::VerticalGradient {
            x,
            y,
            width,
            height,
            top,
            bottom,
        });
    }

    fn line(&mut self, a: Vec2, b: Vec2, color: Color, width: f32) {
        self.commands.push(DrawCmd::Line { a, b, color, width });
    }

    fn dashed_line(&mut self, a: Vec2, b: Vec2, color: Color, width: f32, dash: f32, gap: f32) {
        self.commands.push(DrawCmd::DashedLine {
            a,
            b,
            color,
            width,
            dash,
            gap,
        });
    }

    fn stroke_polyline(&mut self, points: &[Vec2], color: Color, width: f32, closed: bool) {
        self.commands.push(DrawCmd::StrokePolyline {
            points: points.to_vec(),
            color,
            width,
            closed,
        });
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        self.commands.push(DrawCmd::FillPolygon {
            points: points.to_vec(),
            color,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCmd::FillCircle {
            center,
            radius,
            color,
        });
    }
}
