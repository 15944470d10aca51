//! Events emitted by the simulation for the external shell.
//!
//! Score and health events fire at most once per frame and only on
//! change; the game-over event fires exactly once per session.

use serde::{Deserialize, Serialize};

/// One-way notifications to the shell. External observers receive only
/// these derived scalars; no component mutates core state directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShellEvent {
    ScoreChanged { score: u32 },
    /// Current player health, clamped to 0..=100.
    HealthChanged { health: i32 },
    /// Terminal state: player health reached zero. Carries the score
    /// observed the frame health first reached zero.
    GameOver { final_score: u32 },
}
