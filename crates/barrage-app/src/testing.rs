//! Test double for the host platform: scripted inputs, recorded outputs.

use crate::platform::{Color, Platform};

/// A `Platform` whose inputs are plain fields and whose outputs are
/// recorded for assertions.
#[derive(Debug)]
pub struct RecordingPlatform {
    pub width: i32,
    pub height: i32,
    pub delta: f32,
    pub cursor: (i32, i32),
    pub primary: bool,
    pub secondary: bool,
    pub debug_key: bool,
    pub close: bool,
    pub sounds_played: u32,
    pub rects: Vec<(i32, i32, i32, i32, Color)>,
    pub lines: Vec<(i32, i32, i32, i32, Color)>,
    pub texts: Vec<String>,
}

impl Default for RecordingPlatform {
    fn default() -> Self {
        Self::with_size(800, 600)
    }
}

impl RecordingPlatform {
    pub fn with_size(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            delta: 1.0 / 60.0,
            cursor: (0, 0),
            primary: false,
            secondary: false,
            debug_key: false,
            close: false,
            sounds_played: 0,
            rects: Vec::new(),
            lines: Vec::new(),
            texts: Vec::new(),
        }
    }
}

impl Platform for RecordingPlatform {
    fn surface_size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    fn frame_delta(&mut self) -> f32 {
        self.delta
    }

    fn cursor_position(&self) -> (i32, i32) {
        self.cursor
    }

    fn primary_pressed(&self) -> bool {
        self.primary
    }

    fn secondary_held(&self) -> bool {
        self.secondary
    }

    fn debug_key_down(&self) -> bool {
        self.debug_key
    }

    fn should_close(&self) -> bool {
        self.close
    }

    fn play_trigger_sound(&mut self) {
        self.sounds_played += 1;
    }

    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        self.rects.push((x, y, w, h, color));
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        self.lines.push((x1, y1, x2, y2, color));
    }

    fn draw_text(&mut self, text: &str, _x: i32, _y: i32, _size: i32, _color: Color) {
        self.texts.push(text.to_string());
    }
}
