//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the world, processes player commands at step
//! boundaries, runs all systems once per fixed step, and builds
//! `FrameSnapshot`s on demand. Stepping and snapshotting are separate so a
//! rendered frame can drain zero, one, or many steps and still read state
//! exactly once.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use barrage_core::commands::PlayerCommand;
use barrage_core::constants::{SURFACE_HEIGHT, SURFACE_WIDTH};
use barrage_core::events::AudioEvent;
use barrage_core::state::FrameSnapshot;
use barrage_core::types::{SimTime, Vec2};

use crate::systems;
use crate::world::World;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Render surface width in pixels; missiles launch from its center.
    pub surface_width: u32,
    /// Render surface height in pixels.
    pub surface_height: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            surface_width: SURFACE_WIDTH,
            surface_height: SURFACE_HEIGHT,
        }
    }
}

/// The simulation engine. Owns the world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    audio_events: Vec<AudioEvent>,
    surface_center: Vec2,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        debug_assert!(
            config.surface_width > 0 && config.surface_height > 0,
            "launch heading draws require a non-empty surface"
        );
        Self {
            world: World::default(),
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            audio_events: Vec::new(),
            surface_center: Vec2::new(
                (config.surface_width / 2) as f32,
                (config.surface_height / 2) as f32,
            ),
        }
    }

    /// Queue a player command for processing at the next step boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one fixed step.
    pub fn step(&mut self) {
        self.process_commands();
        self.run_systems();
        self.time.advance();
        trace!(
            tick = self.time.tick,
            missiles = self.world.missiles.len(),
            "step complete"
        );
    }

    /// Build the drawable state for the current frame, draining pending
    /// audio events. Called once per rendered frame.
    pub fn snapshot(&mut self) -> FrameSnapshot {
        let audio_events = std::mem::take(&mut self.audio_events);
        systems::snapshot::build_snapshot(&self.world, &self.time, audio_events)
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the simulation world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get the missile launch point.
    pub fn surface_center(&self) -> Vec2 {
        self.surface_center
    }

    /// Mutable world access for tests that need to stage entities directly.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::SetTarget { x, y } => {
                self.world.target = Vec2::new(x, y);
            }
            PlayerCommand::FireMissile => {
                systems::spawn::fire_missile(&mut self.world, &mut self.rng, self.surface_center);
            }
            PlayerCommand::FireSalvo { count } => {
                for _ in 0..count {
                    systems::spawn::fire_missile(
                        &mut self.world,
                        &mut self.rng,
                        self.surface_center,
                    );
                }
            }
        }
    }

    /// Run all systems in order. Shake first, so a detonation this step
    /// starts offsetting the blit on the following step.
    fn run_systems(&mut self) {
        systems::shake::run(&mut self.world);
        systems::steering::run(&mut self.world, &mut self.rng, &mut self.audio_events);
        systems::particles::update_smoke(&mut self.world);
        systems::particles::update_sparks(&mut self.world);
    }
}
