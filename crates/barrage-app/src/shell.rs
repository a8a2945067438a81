//! The application shell: run loop, input sampling, frame stats.
//!
//! One rendered frame = poll events, sample input into commands, drain all
//! due fixed steps, then draw exactly once. Input always lands in the queue
//! before the steps that consume it, and the draw pass only ever reads a
//! snapshot.

use thiserror::Error;
use tracing::info;

use barrage_core::commands::PlayerCommand;
use barrage_core::constants::{DT, SALVO_SIZE};
use barrage_core::events::AudioEvent;
use barrage_sim::engine::{SimConfig, SimulationEngine};
use barrage_sim::scheduler::FixedTimestep;

use crate::platform::Platform;
use crate::render;

/// Fatal startup failures. Anything here ends the process with a non-zero
/// exit status; there is no recoverable-error class at runtime.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("render surface has no area ({width}x{height})")]
    EmptySurface { width: i32, height: i32 },
}

/// Frame statistics derived from the most recent rendered-frame delta,
/// recomputed once per rendered frame (never per simulation step).
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameStats {
    pub frame_time_ms: i32,
    pub fps: i32,
}

impl FrameStats {
    fn update(&mut self, frame_secs: f32) {
        if frame_secs > 0.0 {
            self.frame_time_ms = (frame_secs * 1000.0) as i32;
            self.fps = (1.0 / frame_secs) as i32;
        }
    }
}

/// The application shell. Owns the engine and the scheduler; borrows the
/// platform per call so hosts keep ownership of their own event loop.
pub struct Shell {
    engine: SimulationEngine,
    timestep: FixedTimestep,
    stats: FrameStats,
    debug: bool,
    debug_key_was_down: bool,
}

impl Shell {
    /// Initialize against the host surface. Fails fatally on a zero-area
    /// surface, since the launch point is its center.
    pub fn new(seed: u64, platform: &impl Platform) -> Result<Self, ShellError> {
        let (width, height) = platform.surface_size();
        if width <= 0 || height <= 0 {
            return Err(ShellError::EmptySurface { width, height });
        }

        info!(width, height, seed, "initializing shell");

        Ok(Self {
            engine: SimulationEngine::new(SimConfig {
                seed,
                surface_width: width as u32,
                surface_height: height as u32,
            }),
            timestep: FixedTimestep::new(DT as f64),
            stats: FrameStats::default(),
            debug: false,
            debug_key_was_down: false,
        })
    }

    /// Drive the shell until the host asks to close.
    pub fn run(&mut self, platform: &mut impl Platform) {
        while self.process_events(platform) {
            self.frame(platform);
        }
        info!("shutting down");
    }

    /// Poll for exit and the debug-overlay toggle. Returns false to end
    /// the run loop.
    pub fn process_events(&mut self, platform: &impl Platform) -> bool {
        let down = platform.debug_key_down();
        if down && !self.debug_key_was_down {
            self.debug = !self.debug;
        }
        self.debug_key_was_down = down;

        !platform.should_close()
    }

    /// One rendered frame: update with the host's frame delta, then draw.
    pub fn frame(&mut self, platform: &mut impl Platform) {
        let delta = platform.frame_delta();
        self.update(platform, delta);
        self.render(platform);
    }

    /// Advance the simulation by one frame's worth of time: refresh stats,
    /// sample input into commands, then drain all due fixed steps.
    pub fn update(&mut self, platform: &impl Platform, frame_secs: f32) {
        self.stats.update(frame_secs);
        self.sample_input(platform);

        for _ in 0..self.timestep.advance(frame_secs as f64) {
            self.engine.step();
        }
    }

    /// Draw the current state exactly once, dispatching any pending
    /// detonation sounds along the way.
    pub fn render(&mut self, platform: &mut impl Platform) {
        let snapshot = self.engine.snapshot();
        for event in &snapshot.audio_events {
            match event {
                AudioEvent::Detonation { .. } => platform.play_trigger_sound(),
            }
        }
        render::draw_frame(platform, &snapshot, &self.stats, self.debug);
    }

    /// Sample cursor and buttons into the command queue. Runs once per
    /// rendered frame, ahead of the steps that will consume the commands.
    fn sample_input(&mut self, platform: &impl Platform) {
        let (x, y) = platform.cursor_position();
        self.engine.queue_command(PlayerCommand::SetTarget {
            x: x as f32,
            y: y as f32,
        });

        if platform.primary_pressed() {
            self.engine.queue_command(PlayerCommand::FireMissile);
        }
        if platform.secondary_held() {
            self.engine.queue_command(PlayerCommand::FireSalvo { count: SALVO_SIZE });
        }
    }

    /// Milliseconds spent on the most recent rendered frame.
    pub fn last_frame_time_ms(&self) -> i32 {
        self.stats.frame_time_ms
    }

    /// Frames per second derived from the most recent frame delta.
    pub fn fps(&self) -> i32 {
        self.stats.fps
    }

    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug
    }
}
