//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 2D vector in surface space (pixels). Positions, velocities, and
/// per-axis drag factors all use this type.
pub use glam::Vec2;

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current step number (increments by 1 each fixed step).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per step at the fixed step rate.
    pub fn dt(&self) -> f64 {
        1.0 / crate::constants::TICK_RATE as f64
    }

    /// Advance by one fixed step.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
