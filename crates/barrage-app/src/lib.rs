//! Application shell for barrage.
//!
//! Wires the simulation engine to a host windowing/input/audio layer
//! behind the `Platform` trait: samples input once per rendered frame,
//! drains the fixed-timestep scheduler, and draws the resulting snapshot.

pub mod platform;
pub mod render;
pub mod shell;

pub use barrage_core as core;
pub use platform::Platform;
pub use shell::Shell;

#[cfg(test)]
pub(crate) mod testing;
