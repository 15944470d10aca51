//! Normalized input state handed to the core by the external shell.
//!
//! The shell's pointer/keyboard handlers only overwrite a latest-value
//! slot holding one of these records; the simulation reads it once at
//! the start of each frame.

use bitflags::bitflags;
use glam::Vec2;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Keyboard boolean state map, as reported by the shell.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct KeyFlags: u8 {
        const FIRE = 1 << 0;
        const PAUSE = 1 << 1;
    }
}

/// One frame's worth of normalized input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputState {
    /// Pointer position in [-1, 1] x [-1, 1], Y growing down-screen.
    pub pointer: Vec2,
    /// Whether the pointer is currently over the play surface.
    pub pointer_active: bool,
    pub keys: KeyFlags,
}

impl InputState {
    pub fn pointing_at(x: f32, y: f32) -> Self {
        Self {
            pointer: Vec2::new(x, y),
            pointer_active: true,
            keys: KeyFlags::empty(),
        }
    }
}
