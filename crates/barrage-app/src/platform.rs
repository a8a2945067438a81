//! The host collaborator boundary.
//!
//! Everything the shell needs from a windowing/input/audio layer, expressed
//! as one trait: frame timing, cursor and button state, a trigger sound,
//! and the three draw primitives. The simulation never calls any of this;
//! only the shell and render pass do.

/// RGBA color for draw primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Host windowing/input/audio services consumed by the shell.
///
/// Random numbers are deliberately absent: the simulation draws from its
/// own seeded generator so runs stay reproducible.
pub trait Platform {
    /// Render surface size in pixels.
    fn surface_size(&self) -> (i32, i32);

    /// Seconds since the last rendered frame. Polled exactly once per frame.
    fn frame_delta(&mut self) -> f32;

    /// Cursor position in surface coordinates.
    fn cursor_position(&self) -> (i32, i32);

    /// True on the frame the primary button went down.
    fn primary_pressed(&self) -> bool;

    /// True while the secondary button is held.
    fn secondary_held(&self) -> bool;

    /// True while the debug-overlay key is held.
    fn debug_key_down(&self) -> bool;

    /// True once the host wants the run loop to end.
    fn should_close(&self) -> bool;

    /// Fire-and-forget detonation sound.
    fn play_trigger_sound(&mut self);

    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color);
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color);
    fn draw_text(&mut self, text: &str, x: i32, y: i32, size: i32, color: Color);
}
