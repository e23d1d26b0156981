//! Pipe obstacles
//!
//! A pair is one spawn event: a bottom pipe whose top edge sits at the gap
//! height, and a top pipe whose bottom edge sits `PIPE_GAP` above it. Both
//! share one horizontal centre and one scored flag.

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// One top/bottom obstacle pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipePair {
    pub id: u32,
    /// Shared horizontal centre
    pub center_x: i32,
    /// Top edge of the bottom pipe
    pub gap_y: i32,
    /// Already counted toward the score
    pub scored: bool,
}

impl PipePair {
    pub fn new(id: u32, center_x: i32, gap_y: i32) -> Self {
        Self {
            id,
            center_x,
            gap_y,
            scored: false,
        }
    }

    /// Lower pipe, growing down from the gap
    pub fn bottom(&self) -> Rect {
        Rect::from_mid_top(IVec2::new(self.center_x, self.gap_y), PIPE_WIDTH, PIPE_HEIGHT)
    }

    /// Upper pipe, hanging above the gap (drawn flipped)
    pub fn top(&self) -> Rect {
        Rect::from_mid_bottom(
            IVec2::new(self.center_x, self.gap_y - PIPE_GAP),
            PIPE_WIDTH,
            PIPE_HEIGHT,
        )
    }

    /// Both rectangles, bottom first
    pub fn rects(&self) -> [Rect; 2] {
        [self.bottom(), self.top()]
    }

    /// Vertical centre of the opening
    pub fn gap_center_y(&self) -> i32 {
        self.gap_y - PIPE_GAP / 2
    }

    pub fn right(&self) -> i32 {
        self.bottom().right()
    }

    /// Fully past the left edge of the playfield
    pub fn is_offscreen(&self) -> bool {
        self.right() <= 0
    }
}

/// Active pipe pairs plus the spawn timer, kept in spawn order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pipes {
    pairs: Vec<PipePair>,
    /// Ticks since the last spawn
    spawn_ticks: u32,
    next_id: u32,
}

impl Pipes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pairs oldest (leftmost) first
    pub fn pairs(&self) -> &[PipePair] {
        &self.pairs
    }

    pub fn pairs_mut(&mut self) -> &mut [PipePair] {
        &mut self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Drop every pair and restart the spawn timer
    pub fn clear(&mut self) {
        self.pairs.clear();
        self.spawn_ticks = 0;
    }

    /// Append a new pair at the spawn offset with a random gap height
    pub fn spawn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &PipePair {
        let gap_y = PIPE_HEIGHTS[rng.random_range(0..PIPE_HEIGHTS.len())];
        self.spawn_at(PIPE_SPAWN_X, gap_y)
    }

    /// Append a pair at an explicit position
    pub fn spawn_at(&mut self, center_x: i32, gap_y: i32) -> &PipePair {
        let id = self.next_id;
        self.next_id += 1;
        self.pairs.push(PipePair::new(id, center_x, gap_y));
        &self.pairs[self.pairs.len() - 1]
    }

    /// Step the spawn timer, spawning when the interval elapses.
    /// Returns true if a pair was added this tick.
    pub fn update_spawn_timer<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        self.spawn_ticks += 1;
        if self.spawn_ticks >= SPAWN_INTERVAL_TICKS {
            self.spawn_ticks = 0;
            self.spawn(rng);
            true
        } else {
            false
        }
    }

    /// Scroll every pair left and prune the ones that left the screen
    pub fn advance_all(&mut self) {
        for pair in &mut self.pairs {
            pair.center_x -= PIPE_SPEED;
        }
        // retain keeps relative order
        self.pairs.retain(|p| !p.is_offscreen());
    }

    /// All pipe rectangles, pair by pair
    pub fn rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.pairs.iter().flat_map(|p| p.rects())
    }
}
