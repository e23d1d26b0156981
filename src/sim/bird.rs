//! Bird kinematics
//!
//! The bird only moves vertically. Velocity is integrated per tick and the
//! position moves by the truncated velocity, so a slow fall stalls for a few
//! ticks before the first unit of movement.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// The player-controlled bird
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    /// Vertical centre (x is fixed at `BIRD_X`)
    pub center_y: i32,
    /// Vertical velocity, units/tick (positive = falling). Accumulated in
    /// f64: single precision drifts across whole numbers before truncation.
    pub velocity: f64,
    /// Wing animation frame (0..BIRD_FRAMES)
    pub frame: u8,
    /// Ticks since the last frame change
    anim_ticks: u32,
}

impl Default for Bird {
    fn default() -> Self {
        Self {
            center_y: BIRD_SPAWN_Y,
            velocity: 0.0,
            frame: 0,
            anim_ticks: 0,
        }
    }
}

impl Bird {
    /// Put the bird back at the spawn point with no velocity.
    ///
    /// The wing frame keeps cycling across runs.
    pub fn respawn(&mut self) {
        self.center_y = BIRD_SPAWN_Y;
        self.velocity = 0.0;
    }

    /// Apply one tick of gravity and move by the truncated velocity
    pub fn advance(&mut self) {
        self.velocity += GRAVITY;
        // `as` truncates toward zero
        self.center_y += self.velocity as i32;
    }

    /// Hop: velocity is replaced, never accumulated
    pub fn flap(&mut self) {
        self.velocity = FLAP_VELOCITY;
    }

    /// Visual tilt in degrees, counter-clockwise positive (nose up while rising)
    pub fn rotation_degrees(&self) -> f32 {
        -(self.velocity as f32) * ROTATION_PER_VELOCITY
    }

    /// Step the wing animation timer
    pub fn animate(&mut self) {
        self.anim_ticks += 1;
        if self.anim_ticks >= ANIM_INTERVAL_TICKS {
            self.anim_ticks = 0;
            self.frame = (self.frame + 1) % BIRD_FRAMES;
        }
    }

    pub fn center(&self) -> IVec2 {
        IVec2::new(BIRD_X, self.center_y)
    }

    /// Unrotated collision box
    pub fn rect(&self) -> Rect {
        Rect::from_center(self.center(), BIRD_WIDTH, BIRD_HEIGHT)
    }
}
