//! Simulation constants and tuning parameters.

use crate::entities::Kinematics;
use crate::types::Vec2;

/// Fixed simulation step rate (Hz).
pub const TICK_RATE: u32 = 100;

/// Seconds per fixed step.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- Render surface defaults ---

/// Default surface width in pixels.
pub const SURFACE_WIDTH: u32 = 800;

/// Default surface height in pixels.
pub const SURFACE_HEIGHT: u32 = 600;

// --- Missile steering ---

/// Per-axis velocity decay applied each ballistic-phase step.
pub const MISSILE_DRAG: Vec2 = Vec2::new(0.97, 0.97);

/// Gravity-like pull. Subtracted from velocity in the ballistic phase,
/// matching the homing-phase sign convention (the missile arcs upward).
pub const MISSILE_GRAVITY: Vec2 = Vec2::new(0.0, -480.0);

/// Maximum heading change while homing (degrees per second).
pub const MISSILE_TURN_RATE_DEG: f32 = 200.0;

/// Seconds a missile may coast ballistically past `life == 0` before it is
/// force-detonated.
pub const MISSILE_DEAD_TIME_SECS: f32 = 2.0;

/// Squared distance to the target at which a homing missile detonates.
pub const DETONATE_RADIUS_SQ: f32 = 5.0;

// --- Missile spawn ---

/// Base homing lifetime in seconds.
pub const MISSILE_BASE_LIFE_SECS: f32 = 5.0;

/// Extra lifetime, uniform in `[0, this)` seconds.
pub const MISSILE_LIFE_JITTER_SECS: f32 = 5.0;

/// Base launch speed in pixels per second.
pub const MISSILE_BASE_SPEED: f32 = 150.0;

/// Extra launch speed, integer draw in `[0, this)`.
pub const MISSILE_SPEED_JITTER: i32 = 20;

// --- Smoke trail ---

/// Smoke integration constants: mild drag, upward drift.
pub const SMOKE_KINEMATICS: Kinematics = Kinematics {
    drag: Vec2::new(0.98, 0.98),
    force: Vec2::new(0.0, -200.0),
};

/// One integer draw in `[0, this)` per homing step; a zero emits smoke.
pub const SMOKE_EMIT_DIE: i32 = 4;

/// Smoke launch speed is this factor times the step dt.
pub const SMOKE_SPEED_FACTOR: f32 = 32.0;

/// Heading jitter for emitted smoke, integer degrees in `[-this, this)`.
pub const SMOKE_ANGLE_JITTER_DEG: i32 = 3;

/// Smoke lifetime: `SMOKE_LIFE_MIN + [0, 1) * SMOKE_LIFE_JITTER` seconds.
pub const SMOKE_LIFE_MIN_SECS: f32 = 0.4;
pub const SMOKE_LIFE_JITTER_SECS: f32 = 1.2;

// --- Explosion sparks ---

/// Spark integration constants: light drag, downward pull.
pub const SPARK_KINEMATICS: Kinematics = Kinematics {
    drag: Vec2::new(0.99, 0.99),
    force: Vec2::new(0.0, 100.0),
};

/// Sparks per detonation burst.
pub const SPARK_COUNT: usize = 16;

/// Shared angular offset for a burst, integer degrees in `[0, this)`.
pub const SPARK_OFFSET_MAX_DEG: i32 = 360 / SPARK_COUNT as i32;

/// Base spark speed in pixels per second.
pub const SPARK_BASE_SPEED: f32 = 80.0;

/// Extra spark speed, integer draw in `[0, this)`.
pub const SPARK_SPEED_JITTER: i32 = 50;

/// Spark lifetime: `SPARK_LIFE_MIN + [0, 1) * SPARK_LIFE_JITTER` seconds.
pub const SPARK_LIFE_MIN_SECS: f32 = 0.9;
pub const SPARK_LIFE_JITTER_SECS: f32 = 0.5;

// --- Screen shake ---

/// How long a triggered shake lasts, in seconds.
pub const SHAKE_DURATION_SECS: f32 = 0.5;

/// Oscillator frequency scale.
pub const SHAKE_SPEED: f32 = 48.0;

/// Peak vertical offset in pixels.
pub const SHAKE_AMPLITUDE: f32 = 5.0;

// --- Input ---

/// Missiles fired per frame while the salvo button is held.
pub const SALVO_SIZE: u32 = 32;
