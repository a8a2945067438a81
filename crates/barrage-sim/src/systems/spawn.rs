//! Spawn factories: missile launch, radial spark bursts, shake trigger.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use barrage_core::constants::*;
use barrage_core::entities::{Missile, SparkParticle};
use barrage_core::math::with_length;
use barrage_core::types::Vec2;

use crate::world::World;

/// Launch one missile from the surface center with a randomized heading,
/// speed, and extra lifetime.
pub fn fire_missile(world: &mut World, rng: &mut ChaCha8Rng, center: Vec2) {
    let cx = center.x as i32;
    let cy = center.y as i32;

    // Heading comes from an integer point drawn across the surface; the
    // all-zero draw has no direction, so it is redrawn.
    let direction = loop {
        let x = rng.gen_range(-cx..cx) as f32;
        let y = rng.gen_range(-cy..cy) as f32;
        if x != 0.0 || y != 0.0 {
            break Vec2::new(x, y);
        }
    };

    let speed = MISSILE_BASE_SPEED + rng.gen_range(0..MISSILE_SPEED_JITTER) as f32;
    let life =
        MISSILE_BASE_LIFE_SECS + (rng.gen_range(0..100) as f32 / 100.0) * MISSILE_LIFE_JITTER_SECS;

    world.missiles.push(Missile {
        position: center,
        velocity: with_length(direction, speed),
        life,
        ..Missile::default()
    });

    debug!(speed, life, "missile fired");
}

/// Spawn a radial burst of sparks at `position`: `SPARK_COUNT` particles
/// evenly spaced around the circle from a shared random angular offset,
/// each with its own speed and lifetime.
pub fn explode(world: &mut World, rng: &mut ChaCha8Rng, position: Vec2) {
    let step = std::f32::consts::TAU / SPARK_COUNT as f32;
    let offset = (rng.gen_range(0..SPARK_OFFSET_MAX_DEG) as f32).to_radians();

    let mut angle = 0.0f32;
    for _ in 0..SPARK_COUNT {
        let speed = SPARK_BASE_SPEED + rng.gen_range(0..SPARK_SPEED_JITTER) as f32;
        let life =
            SPARK_LIFE_MIN_SECS + (rng.gen_range(0..100) as f32 / 100.0) * SPARK_LIFE_JITTER_SECS;

        world.sparks.push(SparkParticle {
            position,
            velocity: Vec2::from_angle(angle + offset) * speed,
            life,
            time: 0.0,
        });

        angle += step;
    }
}

/// Restart the screen-shake oscillator. Called only from the
/// target-reached detonation path.
pub fn trigger_shake(world: &mut World) {
    world.shake.life = SHAKE_DURATION_SECS;
    world.shake.time = 0.0;
}
