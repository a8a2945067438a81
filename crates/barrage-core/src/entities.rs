//! Simulation entities.
//!
//! Entities are plain data structs with no methods.
//! All behavior lives in the sim crate's systems.

use serde::{Deserialize, Serialize};

use crate::types::Vec2;

/// A homing missile.
///
/// `life > 0` means the missile is homing; `life <= 0` means it is in the
/// ballistic fallback phase, pending forced detonation once `life` drops
/// below the dead-time threshold.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Missile {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Last target point this missile steered toward.
    pub target: Vec2,
    /// Remaining homing time in seconds; goes negative in the ballistic phase.
    pub life: f32,
    /// Staging oscillator, reserved; not yet driven by the update loop.
    pub stage: f32,
    pub stage_dir: f32,
    pub stage_max: f32,
    pub stage_min: f32,
}

impl Default for Missile {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            target: Vec2::ZERO,
            life: 0.0,
            stage: 0.0,
            stage_dir: -1.0,
            stage_max: 0.5,
            stage_min: -0.02,
        }
    }
}

/// A smoke trail particle, emitted while a missile is homing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SmokeParticle {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Total lifetime in seconds.
    pub life: f32,
    /// Seconds lived so far.
    pub time: f32,
}

impl Default for SmokeParticle {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            life: 0.7,
            time: 0.0,
        }
    }
}

/// An explosion spark, spawned in radial bursts when a missile detonates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SparkParticle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub life: f32,
    pub time: f32,
}

impl Default for SparkParticle {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            life: 1.2,
            time: 0.0,
        }
    }
}

/// Integration constants for one particle family: per-axis multiplicative
/// drag and a constant force. Passed into the integrator rather than baked
/// in, so tests can run it with arbitrary constants.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Kinematics {
    /// Per-axis velocity decay factor applied each step (values < 1 shed speed).
    pub drag: Vec2,
    /// Constant acceleration in surface space.
    pub force: Vec2,
}
