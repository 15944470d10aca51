//! STARLANCE host application layer.
//!
//! Wires the simulation engine and renderer into a per-frame session
//! loop, and owns the mission-source collaborator seam. The actual
//! window/canvas shell stays outside; it supplies a `FrameTarget` and
//! pointer/keyboard state, and receives shell events back.

pub mod mission;
pub mod session;

pub use mission::{acquire_mission, MissionSource, MissionSourceError, StaticMissionSource};
pub use session::{FrameTarget, Session, SessionConfig};
pub use starlance_core as core;
