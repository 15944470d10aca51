//! Core types and definitions for the STARLANCE simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, events, mission parameters, scene snapshots,
//! and the camera projection math. It has no dependency on any runtime
//! framework or drawing backend.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod input;
pub mod mission;
pub mod projection;
pub mod state;
pub mod types;
