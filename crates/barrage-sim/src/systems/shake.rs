//! Screen-shake effect — a decaying oscillator independent of entities.
//!
//! The offset applies to the final render blit only; simulation
//! coordinates never see it.

use barrage_core::constants::{DT, SHAKE_AMPLITUDE, SHAKE_SPEED};
use barrage_core::types::Vec2;

use crate::world::World;

/// Oscillator state. `life` is the duration of the current shake; `time`
/// is how long it has been running.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShakeState {
    pub time: f32,
    pub life: f32,
    /// Current blit offset in pixels; zero while inactive.
    pub offset: Vec2,
}

/// Advance the oscillator by one step.
pub fn run(world: &mut World) {
    let shake = &mut world.shake;

    if shake.time > shake.life {
        shake.offset = Vec2::ZERO;
        return;
    }

    shake.time += DT;
    shake.offset.y = (shake.time * SHAKE_SPEED).sin() * SHAKE_AMPLITUDE;
    // The x term reads the duration rather than the elapsed time, so the
    // horizontal offset holds constant for the length of one shake.
    shake.offset.x = (shake.life * SHAKE_SPEED * 2.0).cos() * SHAKE_AMPLITUDE / 4.0;
}
