//! Headless driver: exercises the full shell against a scripted platform.
//!
//! Fires a few missiles and one salvo at a pinned cursor over a fixed
//! number of 60 fps frames, then reports what happened. Handy for profiling
//! and for checking the loop end-to-end without a window.

use anyhow::Result;
use tracing::info;

use barrage_app::platform::{Color, Platform};
use barrage_app::shell::Shell;

/// Scripted stand-in for a real windowing host: fixed frame deltas, a
/// pinned cursor, clicks on a schedule, counted draw calls.
struct HeadlessPlatform {
    frames_total: u32,
    frame: u32,
    cursor: (i32, i32),
    draw_calls: u64,
    sounds_played: u32,
}

impl HeadlessPlatform {
    fn new(frames_total: u32) -> Self {
        Self {
            frames_total,
            frame: 0,
            cursor: (600, 450),
            draw_calls: 0,
            sounds_played: 0,
        }
    }
}

impl Platform for HeadlessPlatform {
    fn surface_size(&self) -> (i32, i32) {
        (800, 600)
    }

    // Polled once per rendered frame, so it doubles as the frame counter.
    fn frame_delta(&mut self) -> f32 {
        self.frame += 1;
        1.0 / 60.0
    }

    fn cursor_position(&self) -> (i32, i32) {
        self.cursor
    }

    fn primary_pressed(&self) -> bool {
        matches!(self.frame, 30 | 90 | 150)
    }

    fn secondary_held(&self) -> bool {
        self.frame == 300
    }

    fn debug_key_down(&self) -> bool {
        false
    }

    fn should_close(&self) -> bool {
        self.frame >= self.frames_total
    }

    fn play_trigger_sound(&mut self) {
        self.sounds_played += 1;
    }

    fn draw_rect(&mut self, _x: i32, _y: i32, _w: i32, _h: i32, _color: Color) {
        self.draw_calls += 1;
    }

    fn draw_line(&mut self, _x1: i32, _y1: i32, _x2: i32, _y2: i32, _color: Color) {
        self.draw_calls += 1;
    }

    fn draw_text(&mut self, _text: &str, _x: i32, _y: i32, _size: i32, _color: Color) {
        self.draw_calls += 1;
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .init();

    // 900 frames at 60 fps: 15 simulated seconds, enough for the salvo
    // fired at the 5-second mark to resolve.
    let mut platform = HeadlessPlatform::new(900);
    let mut shell = Shell::new(42, &platform)?;
    shell.run(&mut platform);

    let world = shell.engine().world();
    info!(
        frames = platform.frame,
        detonations = platform.sounds_played,
        draw_calls = platform.draw_calls,
        missiles_left = world.missiles.len(),
        sparks_left = world.sparks.len(),
        fps = shell.fps(),
        "headless run complete"
    );

    Ok(())
}
