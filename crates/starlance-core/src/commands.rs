//! Shell commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next frame boundary.

use serde::{Deserialize, Serialize};

/// Control actions the external shell can issue. Pointer and keyboard
/// state travel separately through the latest-value input slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShellCommand {
    /// Freeze the simulation; rendering continues.
    Pause,
    /// Resume from pause. The next frame's elapsed time is treated as
    /// zero so the frozen interval does not produce a motion jump.
    Resume,
}
