//! Axis-aligned rectangle geometry for the bird, pipes and buttons
//!
//! Integer coordinates, origin top-left, y down:
//! - `x`, `y`: top-left corner
//! - `w`, `h`: extent (right = x + w, bottom = y + h)

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

/// An axis-aligned box in game units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Box of the given size centred on `center`
    ///
    /// Odd sizes put the extra unit on the right/bottom side.
    pub fn from_center(center: IVec2, w: i32, h: i32) -> Self {
        Self::new(center.x - w / 2, center.y - h / 2, w, h)
    }

    /// Box whose top edge midpoint sits at `mid_top`
    pub fn from_mid_top(mid_top: IVec2, w: i32, h: i32) -> Self {
        Self::new(mid_top.x - w / 2, mid_top.y, w, h)
    }

    /// Box whose bottom edge midpoint sits at `mid_bottom`
    pub fn from_mid_bottom(mid_bottom: IVec2, w: i32, h: i32) -> Self {
        Self::new(mid_bottom.x - w / 2, mid_bottom.y - h, w, h)
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    #[inline]
    pub fn center_x(&self) -> i32 {
        self.x + self.w / 2
    }

    #[inline]
    pub fn center_y(&self) -> i32 {
        self.y + self.h / 2
    }

    pub fn center(&self) -> IVec2 {
        IVec2::new(self.center_x(), self.center_y())
    }

    /// Overlap test with non-zero area; boxes that only share an edge do not
    /// intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.w > 0
            && self.h > 0
            && other.w > 0
            && other.h > 0
            && self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Strict interior test for a pointer position
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x > self.left() as f32
            && point.x < self.right() as f32
            && point.y > self.top() as f32
            && point.y < self.bottom() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_constructors() {
        let r = Rect::from_center(IVec2::new(100, 300), 40, 30);
        assert_eq!((r.left(), r.top(), r.right(), r.bottom()), (80, 285, 120, 315));
        assert_eq!(r.center(), IVec2::new(100, 300));

        let r = Rect::from_mid_top(IVec2::new(500, 250), 70, 600);
        assert_eq!((r.left(), r.top(), r.right(), r.bottom()), (465, 250, 535, 850));

        let r = Rect::from_mid_bottom(IVec2::new(500, 80), 70, 600);
        assert_eq!((r.top(), r.bottom()), (-520, 80));
        assert_eq!(r.center_x(), 500);
    }

    #[test]
    fn test_intersects_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let right = Rect::new(10, 0, 10, 10);
        let below = Rect::new(0, 10, 10, 10);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_empty_rect_never_intersects() {
        let a = Rect::new(0, 0, 10, 10);
        let empty = Rect::new(5, 5, 0, 10);
        assert!(!a.intersects(&empty));
    }

    #[test]
    fn test_contains_point() {
        let r = Rect::new(120, 250, 160, 60);
        assert!(r.contains_point(Vec2::new(200.0, 280.0)));
        assert!(!r.contains_point(Vec2::new(120.0, 280.0)));
        assert!(!r.contains_point(Vec2::new(200.0, 320.0)));
    }
}
