//! Scene tessellation
//!
//! Turns a `GameState` into a flat triangle list in game units, back to
//! front: sky, skyline, pipes, bird, dimming, buttons, ground.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors, rgb};
use crate::consts::*;
use crate::sim::{Bird, GamePhase, GameState, PipePair};
use crate::ui::{self, ButtonAction, palette};

/// Height of the lip at the open end of each pipe
const PIPE_LIP_HEIGHT: f32 = 24.0;
/// Lip overhang on each side of the pipe body
const PIPE_LIP_OVERHANG: f32 = 4.0;
/// Ground stripe spacing within one tile
const STRIPE_SPACING: i32 = 20;
const GRASS_HEIGHT: f32 = 12.0;

/// Build the full frame. `hovered` highlights the button under the pointer.
pub fn build_scene(state: &GameState, hovered: Option<ButtonAction>) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(1024);

    vertices.extend(shapes::gradient_rect(
        0.0,
        0.0,
        WIDTH as f32,
        GROUND_Y as f32,
        colors::SKY_TOP,
        colors::SKY_BOTTOM,
    ));
    skyline(&mut vertices);

    if matches!(state.phase, GamePhase::Playing | GamePhase::GameOver) {
        for pair in state.pipes.pairs() {
            pipe_pair(&mut vertices, pair);
        }
        bird(&mut vertices, &state.bird);
    }

    if state.phase != GamePhase::Playing {
        vertices.extend(shapes::rect(0.0, 0.0, WIDTH as f32, HEIGHT as f32, colors::DIM));
    }

    for button in ui::buttons(state.phase) {
        let color = if hovered == Some(button.action) {
            palette::RED_HOVER
        } else {
            palette::RED
        };
        let r = button.rect;
        vertices.extend(shapes::rect(
            r.x as f32,
            r.y as f32,
            r.w as f32,
            r.h as f32,
            rgb(color),
        ));
    }

    // Two tiles side by side for seamless scrolling
    ground_tile(&mut vertices, state.ground_offset);
    ground_tile(&mut vertices, state.ground_offset + WIDTH);

    vertices
}

/// Static silhouette behind the pipes
fn skyline(out: &mut Vec<Vertex>) {
    const BUILDINGS: [(f32, f32, f32); 8] = [
        (0.0, 45.0, 90.0),
        (45.0, 35.0, 140.0),
        (80.0, 60.0, 70.0),
        (140.0, 40.0, 120.0),
        (180.0, 55.0, 95.0),
        (235.0, 45.0, 160.0),
        (280.0, 60.0, 80.0),
        (340.0, 60.0, 130.0),
    ];
    let base = GROUND_Y as f32;
    for (x, w, h) in BUILDINGS {
        out.extend(shapes::rect(x, base - h, w, h, colors::SKYLINE));
        let mut wy = base - h + 10.0;
        while wy < base - 15.0 {
            out.extend(shapes::rect(x + 8.0, wy, 6.0, 6.0, colors::SKYLINE_WINDOW));
            wy += 22.0;
        }
    }
}

fn pipe_pair(out: &mut Vec<Vertex>, pair: &PipePair) {
    let bottom = pair.bottom();
    let top = pair.top();
    let (x, w) = (bottom.x as f32, bottom.w as f32);

    // Bottom pipe: lip at its top edge
    out.extend(shapes::rect(x, bottom.y as f32, w, bottom.h as f32, colors::PIPE));
    out.extend(shapes::rect(x + w * 0.7, bottom.y as f32, w * 0.3, bottom.h as f32, colors::PIPE_SHADE));
    out.extend(shapes::rect(
        x - PIPE_LIP_OVERHANG,
        bottom.y as f32,
        w + PIPE_LIP_OVERHANG * 2.0,
        PIPE_LIP_HEIGHT,
        colors::PIPE_LIP,
    ));

    // Top pipe is the same sprite flipped: lip at its bottom edge
    out.extend(shapes::rect(x, top.y as f32, w, top.h as f32, colors::PIPE));
    out.extend(shapes::rect(x + w * 0.7, top.y as f32, w * 0.3, top.h as f32, colors::PIPE_SHADE));
    out.extend(shapes::rect(
        x - PIPE_LIP_OVERHANG,
        top.bottom() as f32 - PIPE_LIP_HEIGHT,
        w + PIPE_LIP_OVERHANG * 2.0,
        PIPE_LIP_HEIGHT,
        colors::PIPE_LIP,
    ));
}

/// Wing offset for each animation frame: down, mid, up
const WING_OFFSETS: [f32; 3] = [5.0, 0.0, -5.0];

fn bird(out: &mut Vec<Vertex>, bird: &Bird) {
    let c = bird.center();
    let center = Vec2::new(c.x as f32, c.y as f32);
    let angle = bird.rotation_degrees().to_radians();
    let half = Vec2::new(BIRD_WIDTH as f32, BIRD_HEIGHT as f32) / 2.0;

    out.extend(shapes::ellipse(center, half, angle, colors::BIRD_BODY, 20));

    let wing_y = WING_OFFSETS[(bird.frame % BIRD_FRAMES) as usize];
    out.extend(shapes::ellipse(
        center + shapes::rotate(Vec2::new(-7.0, wing_y), angle),
        Vec2::new(9.0, 5.0),
        angle,
        colors::BIRD_WING,
        12,
    ));

    out.extend(shapes::rotated_rect(
        center,
        Vec2::new(half.x, 3.0),
        Vec2::new(12.0, 7.0),
        angle,
        colors::BIRD_BEAK,
    ));

    let eye = center + shapes::rotate(Vec2::new(9.0, -6.0), angle);
    out.extend(shapes::circle(eye, 5.0, colors::EYE_WHITE, 10));
    out.extend(shapes::circle(eye + shapes::rotate(Vec2::new(2.0, 0.0), angle), 2.0, colors::EYE_PUPIL, 8));
}

fn ground_tile(out: &mut Vec<Vertex>, x: i32) {
    let (x, y) = (x as f32, GROUND_Y as f32);
    let w = WIDTH as f32;
    out.extend(shapes::rect(x, y, w, GROUND_HEIGHT as f32, colors::GROUND));
    for i in 0..WIDTH / STRIPE_SPACING {
        let sx = x + (i * STRIPE_SPACING) as f32;
        out.extend(shapes::rect(sx, y + GRASS_HEIGHT, STRIPE_SPACING as f32 / 2.0, 8.0, colors::GROUND_STRIPE));
    }
    out.extend(shapes::rect(x, y, w, GRASS_HEIGHT, colors::GRASS));
}
