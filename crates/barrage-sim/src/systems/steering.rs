//! Missile steering system — the per-missile phase machine.
//!
//! Homing (`life > 0`): chase the target point, emit smoke, detonate on
//! proximity. Ballistic (`life <= 0`): coast under drag and the gravity
//! term, no steering. Past the dead time: forced detonation, silent.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use barrage_core::constants::*;
use barrage_core::entities::{Missile, SmokeParticle};
use barrage_core::events::AudioEvent;
use barrage_core::math::{angle_of, wrap_angle_deg};
use barrage_core::types::Vec2;

use crate::systems::spawn;
use crate::world::World;

/// Update every missile by one step, drop the dead ones, and re-sort the
/// survivors by ascending x. The sort governs draw depth only.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, audio_events: &mut Vec<AudioEvent>) {
    // The update pushes smoke and sparks while missiles are borrowed, so
    // take the missile list out of the world for the duration.
    let mut missiles = std::mem::take(&mut world.missiles);
    missiles.retain_mut(|m| update_missile(m, world, rng, audio_events));
    missiles.sort_unstable_by(|a, b| a.position.x.total_cmp(&b.position.x));
    world.missiles = missiles;
}

/// One step of the phase machine. Returns false when the missile is done
/// and must be removed from the live collection.
fn update_missile(
    m: &mut Missile,
    world: &mut World,
    rng: &mut ChaCha8Rng,
    audio_events: &mut Vec<AudioEvent>,
) -> bool {
    m.life -= DT;

    if m.life < -MISSILE_DEAD_TIME_SECS {
        // Timed out: burst, but no sound and no shake.
        spawn::explode(world, rng, m.position);
        debug!(x = m.position.x, y = m.position.y, "missile timed out");
        return false;
    }

    if m.life <= 0.0 {
        // Ballistic coast: no steering, no smoke emission.
        m.velocity *= MISSILE_DRAG;
        m.velocity -= MISSILE_GRAVITY * DT;
        m.position += m.velocity * DT;
        return true;
    }

    m.target = world.target;
    m.position += m.velocity * DT;

    let diff = m.target - m.position;
    if diff.length_squared() <= DETONATE_RADIUS_SQ {
        audio_events.push(AudioEvent::Detonation {
            position: m.position,
        });
        spawn::explode(world, rng, m.position);
        spawn::trigger_shake(world);
        debug!(x = m.position.x, y = m.position.y, "missile detonated on target");
        return false;
    }

    if rng.gen_range(0..SMOKE_EMIT_DIE) == 0 {
        emit_smoke(m, world, rng);
    }

    let target_angle = angle_of(diff).to_degrees();
    let mut current_angle = angle_of(m.velocity).to_degrees();
    let diff_angle = wrap_angle_deg(target_angle - current_angle);

    let max_turn = MISSILE_TURN_RATE_DEG * DT;
    if diff_angle < 180.0 {
        current_angle += max_turn.min(diff_angle);
    } else if diff_angle > 180.0 {
        current_angle -= max_turn.min(360.0 - diff_angle);
    }
    // Exactly 180: no preferred turn direction, heading is left alone.

    // Heading change only; speed is conserved.
    m.velocity = Vec2::from_angle(current_angle.to_radians()) * m.velocity.length();

    true
}

/// Emit one smoke particle trailing the missile.
fn emit_smoke(m: &Missile, world: &mut World, rng: &mut ChaCha8Rng) {
    let life =
        SMOKE_LIFE_MIN_SECS + (rng.gen_range(0..100) as f32 / 100.0) * SMOKE_LIFE_JITTER_SECS;

    let mut heading_deg = angle_of(m.velocity).to_degrees();
    heading_deg += rng.gen_range(-SMOKE_ANGLE_JITTER_DEG..SMOKE_ANGLE_JITTER_DEG) as f32;

    world.smoke.push(SmokeParticle {
        position: m.position,
        // Negated angle: the exhaust heading is mirrored across the x axis.
        velocity: Vec2::from_angle((-heading_deg).to_radians()) * (SMOKE_SPEED_FACTOR * DT),
        life,
        time: 0.0,
    });
}
