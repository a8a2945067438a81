//! Snapshot system: builds a complete `FrameSnapshot` from the world.
//!
//! This system is read-only — it never modifies the world.

use barrage_core::events::AudioEvent;
use barrage_core::state::{FrameSnapshot, MissileView, SmokeView, SparkView};
use barrage_core::types::SimTime;

use crate::world::World;

/// Build the drawable state for one rendered frame. Missile views come out
/// in the collection's ascending-x order.
pub fn build_snapshot(world: &World, time: &SimTime, audio_events: Vec<AudioEvent>) -> FrameSnapshot {
    FrameSnapshot {
        time: *time,
        target: world.target,
        shake_offset: world.shake.offset,
        missiles: world
            .missiles
            .iter()
            .map(|m| MissileView {
                position: m.position,
                velocity: m.velocity,
                target: m.target,
                ballistic: m.life < 0.0,
            })
            .collect(),
        smoke: world
            .smoke
            .iter()
            .map(|p| SmokeView {
                position: p.position,
                age_fraction: p.time / p.life,
            })
            .collect(),
        sparks: world
            .sparks
            .iter()
            .map(|p| SparkView {
                position: p.position,
                velocity: p.velocity,
            })
            .collect(),
        audio_events,
    }
}
