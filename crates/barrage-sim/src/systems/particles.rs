//! Particle kinematics — the shared drag + constant-force integrator.
//!
//! Smoke and sparks run the same contract with different `Kinematics`
//! constants: age, cull at end of life, decay velocity, accelerate,
//! integrate position.

use barrage_core::constants::{DT, SMOKE_KINEMATICS, SPARK_KINEMATICS};
use barrage_core::entities::Kinematics;
use barrage_core::types::Vec2;

use crate::world::World;

/// Advance one particle by `dt`. Returns false once the particle has
/// outlived `life`; the caller removes it from the collection.
pub fn step_particle(
    position: &mut Vec2,
    velocity: &mut Vec2,
    time: &mut f32,
    life: f32,
    dt: f32,
    kin: &Kinematics,
) -> bool {
    *time += dt;

    if *time >= life {
        return false;
    }

    *velocity *= kin.drag;
    *velocity += kin.force * dt;
    *position += *velocity * dt;

    true
}

/// Age and move all smoke particles, compacting out the dead ones.
/// Survivor order is not significant.
pub fn update_smoke(world: &mut World) {
    world.smoke.retain_mut(|p| {
        step_particle(
            &mut p.position,
            &mut p.velocity,
            &mut p.time,
            p.life,
            DT,
            &SMOKE_KINEMATICS,
        )
    });
}

/// Age and move all explosion sparks, compacting out the dead ones.
pub fn update_sparks(world: &mut World) {
    world.sparks.retain_mut(|p| {
        step_particle(
            &mut p.position,
            &mut p.velocity,
            &mut p.time,
            p.life,
            DT,
            &SPARK_KINEMATICS,
        )
    });
}
