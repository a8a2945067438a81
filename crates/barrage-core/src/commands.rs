//! Player commands sent from the shell to the simulation.
//!
//! Commands are queued and processed at the next step boundary, which keeps
//! input sampling ahead of the simulation steps that consume it.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Update the target point missiles home toward (the cursor, sampled
    /// once per rendered frame).
    SetTarget { x: f32, y: f32 },
    /// Fire a single missile from the surface center.
    FireMissile,
    /// Fire a burst of missiles in one go.
    FireSalvo { count: u32 },
}
