//! Wireframe renderer for STARLANCE.
//!
//! Draws a `SceneView` through a caller-provided `Surface`: gradient
//! sky, scrolling floor grid, procedural starfield, depth-sorted
//! vector-model entities, alpha-faded particles, and the dual-stage
//! aiming reticle. No simulation state lives here; rendering is a pure
//! function of the snapshot and the surface size.

pub mod backdrop;
pub mod hud;
pub mod models;
pub mod scene;
pub mod surface;

pub use scene::render;
pub use surface::{DrawCmd, RecordingSurface, Surface};

#[cfg(test)]
mod tests;
