//! Systems that operate on the simulation world each fixed step.
//!
//! Systems are plain functions taking `&mut World` (or `&World` for the
//! read-only snapshot builder). They do not own state — all state lives in
//! the world.

pub mod particles;
pub mod shake;
pub mod snapshot;
pub mod spawn;
pub mod steering;
