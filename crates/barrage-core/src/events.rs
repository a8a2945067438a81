//! Events emitted by the simulation for audio feedback.

use serde::{Deserialize, Serialize};

use crate::types::Vec2;

/// Audio events for the host sound system.
///
/// Only the target-reached detonation makes a sound; a missile that times
/// out and force-detonates dies silently.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// A missile reached its target and detonated.
    Detonation { position: Vec2 },
}
