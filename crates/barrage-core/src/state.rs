//! Frame snapshot — the complete drawable state handed to the render pass.

use serde::{Deserialize, Serialize};

use crate::events::AudioEvent;
use crate::types::{SimTime, Vec2};

/// Complete drawable state, built once per rendered frame after all due
/// simulation steps have run. The render pass only ever reads this.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    /// Current target point (cursor cache).
    pub target: Vec2,
    /// Screen-shake offset to apply to world-space draws. Never affects
    /// simulation coordinates.
    pub shake_offset: Vec2,
    /// Live missiles in ascending-x order (draw/depth order only).
    pub missiles: Vec<MissileView>,
    pub smoke: Vec<SmokeView>,
    pub sparks: Vec<SparkView>,
    /// Audio events since the last snapshot; drained on build.
    pub audio_events: Vec<AudioEvent>,
}

/// A missile as the render pass sees it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MissileView {
    pub position: Vec2,
    pub velocity: Vec2,
    pub target: Vec2,
    /// True once homing life has run out (drawn in the dead color).
    pub ballistic: bool,
}

/// A smoke particle as the render pass sees it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SmokeView {
    pub position: Vec2,
    /// Fraction of lifetime elapsed, in `[0, 1)`; drives the size ramp.
    pub age_fraction: f32,
}

/// An explosion spark as the render pass sees it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SparkView {
    pub position: Vec2,
    /// Current velocity; drives streak length and direction.
    pub velocity: Vec2,
}
