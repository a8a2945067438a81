//! The simulation world — one struct owning all mutable entity state.

use barrage_core::entities::{Missile, SmokeParticle, SparkParticle};
use barrage_core::types::Vec2;

use crate::systems::shake::ShakeState;

/// All mutable simulation state: the three entity collections, the screen
/// shake oscillator, and the cached target point.
///
/// Collections have flat, unordered semantics; the one exception is
/// `missiles`, which the steering system keeps sorted by ascending x after
/// each step. That ordering governs draw depth only — no physics reads it.
#[derive(Debug, Default)]
pub struct World {
    pub missiles: Vec<Missile>,
    pub smoke: Vec<SmokeParticle>,
    pub sparks: Vec<SparkParticle>,
    pub shake: ShakeState,
    /// Target point missiles home toward, updated from `SetTarget` commands.
    pub target: Vec2,
}
