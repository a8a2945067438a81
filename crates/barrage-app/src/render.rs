//! The draw pass: renders one `FrameSnapshot` through the platform's
//! primitives.
//!
//! World-space draws (backdrop, grid, particles, missiles) are shifted by
//! the shake offset; the overlay (crosshair, arrow, HUD text) never is.

use barrage_core::math::{angle_of, with_length};
use barrage_core::state::{FrameSnapshot, MissileView};
use barrage_core::types::Vec2;

use crate::platform::{Color, Platform};
use crate::shell::FrameStats;

const FONT_SIZE: i32 = 10;
const MARGIN: i32 = 8;
const GRID_SIZE: i32 = 60;

const SMOKE_MIN_SIZE: i32 = 2;
const SMOKE_MAX_SIZE: i32 = 8;
const SPARK_STREAK_LENGTH: f32 = 12.0;
const MISSILE_SIZE: i32 = 4;
const MISSILE_TAIL_LENGTH: f32 = 16.0;
const ARROW_LENGTH: f32 = 24.0;

const BACKDROP_COLOR: Color = Color::rgb(64, 64, 64);
const WORLD_COLOR: Color = Color::rgb(127, 127, 127);
const GRID_COLOR: Color = Color::rgb(148, 148, 148);
const SMOKE_COLOR: Color = Color::rgb(178, 178, 178);
const SPARK_COLOR: Color = Color::rgb(255, 255, 255);
const EMBER_COLOR: Color = Color::rgb(190, 120, 0);
const MISSILE_LIVE_COLOR: Color = Color::rgb(255, 255, 0);
const MISSILE_DEAD_COLOR: Color = Color::rgb(37, 221, 245);
const MISSILE_TAIL_COLOR: Color = Color::rgb(192, 192, 192);
const CROSSHAIR_COLOR: Color = Color::rgb(123, 175, 201);
const ARROW_COLOR: Color = Color::rgb(213, 246, 221);
const TEXT_COLOR: Color = Color::rgb(255, 255, 255);

/// Draw one complete frame.
pub fn draw_frame(
    platform: &mut impl Platform,
    snapshot: &FrameSnapshot,
    stats: &FrameStats,
    debug: bool,
) {
    let (width, height) = platform.surface_size();
    let ox = snapshot.shake_offset.x as i32;
    let oy = snapshot.shake_offset.y as i32;

    platform.draw_rect(0, 0, width, height, BACKDROP_COLOR);
    platform.draw_rect(ox, oy, width, height, WORLD_COLOR);

    draw_grid(platform, width, height, ox, oy);
    draw_smoke(platform, snapshot, ox, oy);
    draw_sparks(platform, snapshot, ox, oy);
    draw_missiles(platform, snapshot, ox, oy, debug);

    draw_crosshair(platform, snapshot, width, height);
    draw_arrow(platform, snapshot, width, height);
    draw_frame_stats(platform, stats, width, height);
    draw_entity_counts(platform, snapshot, height);
    draw_cursor_info(platform, snapshot, width, height);
}

/// Checkerboard backdrop centered on the surface.
fn draw_grid(platform: &mut impl Platform, width: i32, height: i32, ox: i32, oy: i32) {
    let half_width = width / 2;
    let half_height = height / 2;

    let x_count = 2 * ((half_width / GRID_SIZE) + 1);
    let y_count = 2 * ((half_height / GRID_SIZE) + 1);

    let start_x = half_width - (x_count / 2) * GRID_SIZE;
    let start_y = half_height - (y_count / 2) * GRID_SIZE;

    for j in 0..y_count {
        let y = start_y + j * GRID_SIZE;
        for i in 0..x_count {
            if (i + j) % 2 == 0 {
                let x = start_x + i * GRID_SIZE;
                platform.draw_rect(x + ox, y + oy, GRID_SIZE, GRID_SIZE, GRID_COLOR);
            }
        }
    }
}

/// Smoke quads grow from 2 to 8 px across their lifetime.
fn draw_smoke(platform: &mut impl Platform, snapshot: &FrameSnapshot, ox: i32, oy: i32) {
    for s in &snapshot.smoke {
        let w = SMOKE_MIN_SIZE
            + (s.age_fraction * (SMOKE_MAX_SIZE - SMOKE_MIN_SIZE) as f32) as i32;
        let x = s.position.x as i32;
        let y = s.position.y as i32;
        platform.draw_rect(x - w / 2 + ox, y - w / 2 + oy, w, w, SMOKE_COLOR);
    }
}

/// Sparks render as a trailing streak scaled by speed, plus an ember dot.
fn draw_sparks(platform: &mut impl Platform, snapshot: &FrameSnapshot, ox: i32, oy: i32) {
    for p in &snapshot.sparks {
        let x = p.position.x as i32;
        let y = p.position.y as i32;

        let speed = p.velocity.length();
        if speed > f32::EPSILON {
            let length = (speed / 200.0).clamp(0.0, 1.0);
            let d = with_length(-p.velocity, length * SPARK_STREAK_LENGTH);
            platform.draw_line(
                x + ox,
                y + oy,
                x + d.x as i32 + ox,
                y + d.y as i32 + oy,
                SPARK_COLOR,
            );
        }

        platform.draw_rect(x - 1 + ox, y - 1 + oy, 2, 2, EMBER_COLOR);
    }
}

fn draw_missiles(
    platform: &mut impl Platform,
    snapshot: &FrameSnapshot,
    ox: i32,
    oy: i32,
    debug: bool,
) {
    for m in &snapshot.missiles {
        draw_missile(platform, m, ox, oy, debug);
    }
}

fn draw_missile(platform: &mut impl Platform, m: &MissileView, ox: i32, oy: i32, debug: bool) {
    let x = m.position.x as i32;
    let y = m.position.y as i32;

    let color = if m.ballistic {
        MISSILE_DEAD_COLOR
    } else {
        MISSILE_LIVE_COLOR
    };

    platform.draw_rect(
        x - MISSILE_SIZE / 2 + ox,
        y - MISSILE_SIZE / 2 + oy,
        MISSILE_SIZE,
        MISSILE_SIZE,
        color,
    );

    if m.velocity != Vec2::ZERO {
        let tail = with_length(-m.velocity, MISSILE_TAIL_LENGTH);
        platform.draw_line(
            x + ox,
            y + oy,
            x + tail.x as i32 + ox,
            y + tail.y as i32 + oy,
            MISSILE_TAIL_COLOR,
        );
    }

    if debug {
        let t = m.target - m.position - m.velocity;
        let text = format!(
            "p:({:>4}, {:>4})\nv:({:>4}, {:>4})\na:{:>7.2}\nta:{:>7.2}",
            x,
            y,
            m.velocity.x as i32,
            m.velocity.y as i32,
            angle_of(m.velocity).to_degrees(),
            angle_of(t).to_degrees(),
        );
        platform.draw_text(&text, x + 2, y + 2, FONT_SIZE, TEXT_COLOR);
    }
}

/// Full-surface crosshair through the target point.
fn draw_crosshair(platform: &mut impl Platform, snapshot: &FrameSnapshot, width: i32, height: i32) {
    let x = snapshot.target.x as i32;
    let y = snapshot.target.y as i32;

    platform.draw_line(x, 0, x, height, CROSSHAIR_COLOR);
    platform.draw_line(0, y, width, y, CROSSHAIR_COLOR);
}

/// Short pointer from the launch point toward the target.
fn draw_arrow(platform: &mut impl Platform, snapshot: &FrameSnapshot, width: i32, height: i32) {
    let center_x = width / 2;
    let center_y = height / 2;

    let v = snapshot.target - Vec2::new(center_x as f32, center_y as f32);
    if v == Vec2::ZERO {
        return;
    }

    let a = with_length(v, ARROW_LENGTH);
    platform.draw_line(
        center_x,
        center_y,
        center_x + a.x as i32,
        center_y + a.y as i32,
        ARROW_COLOR,
    );
}

fn draw_frame_stats(platform: &mut impl Platform, stats: &FrameStats, width: i32, height: i32) {
    let text = format!(
        "{:>4} ms/frame\n{:>4} frames/sec",
        stats.frame_time_ms, stats.fps
    );
    platform.draw_text(&text, width - 100 - MARGIN, height - 24 - MARGIN, FONT_SIZE, TEXT_COLOR);
}

fn draw_entity_counts(platform: &mut impl Platform, snapshot: &FrameSnapshot, height: i32) {
    let text = format!(
        "{:>4} missiles\n{:>4} smoke\n{:>4} sparks",
        snapshot.missiles.len(),
        snapshot.smoke.len(),
        snapshot.sparks.len(),
    );
    platform.draw_text(&text, MARGIN, height - 40 - MARGIN, FONT_SIZE, TEXT_COLOR);
}

fn draw_cursor_info(platform: &mut impl Platform, snapshot: &FrameSnapshot, width: i32, height: i32) {
    let center = Vec2::new((width / 2) as f32, (height / 2) as f32);
    let v = snapshot.target - center;
    let angle = angle_of(v).to_degrees() as i32;

    let text = format!(
        "cursor: ({:>4}, {:>4})\nangle: {:>4} deg",
        snapshot.target.x as i32,
        snapshot.target.y as i32,
        angle,
    );
    platform.draw_text(&text, width - 140 - MARGIN, MARGIN, FONT_SIZE, TEXT_COLOR);
}
