//! Simulation engine for barrage.
//!
//! Owns the flat entity collections, processes player commands, runs all
//! systems at a fixed step rate, and produces `FrameSnapshot`s for the
//! render pass. Completely headless, enabling deterministic testing.

pub mod engine;
pub mod scheduler;
pub mod systems;
pub mod world;

pub use barrage_core as core;
pub use engine::SimulationEngine;
