//! Simulation engine for STARLANCE.
//!
//! Owns the hecs ECS world and the particle store, runs systems once
//! per rendered frame, and produces `SceneView` snapshots for the
//! renderer. Completely headless, enabling deterministic testing.

pub mod engine;
pub mod particles;
pub mod systems;
pub mod world_setup;

pub use engine::{FrameReport, GameCore, SimConfig};
pub use starlance_core as core;
