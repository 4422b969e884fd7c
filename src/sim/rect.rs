//! Axis-aligned rectangle geometry for cars and buttons
//!
//! Integer pixel units with the y axis pointing down the screen. Overlap is
//! strict: rectangles that only share an edge don't collide, and empty
//! rectangles never collide with anything.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
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

    /// Build from a real-valued top-left corner, truncating toward zero
    pub fn from_pos_size(pos: Vec2, size: IVec2) -> Self {
        Self::new(pos.x as i32, pos.y as i32, size.x, size.y)
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
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.x as f32 + self.w as f32 / 2.0,
            self.y as f32 + self.h as f32 / 2.0,
        )
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Strict interior overlap test
    pub fn overlaps(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Grow by `dx`/`dy` in total, keeping the center fixed
    ///
    /// Odd amounts put the extra pixel on the right/bottom edge.
    pub fn inflate(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(self.x - dx / 2, self.y - dy / 2, self.w + dx, self.h + dy)
    }

    /// Point containment, half-open on the right/bottom edges
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.left() && x < self.right() && y >= self.top() && y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_interior() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(!a.overlaps(&Rect::new(10, 0, 10, 10)));
        assert!(!a.overlaps(&Rect::new(0, 10, 10, 10)));
        assert!(!a.overlaps(&Rect::new(0, -10, 10, 10)));
    }

    #[test]
    fn test_empty_never_overlaps() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(!a.overlaps(&Rect::new(2, 2, 0, 5)));
        assert!(!Rect::new(2, 2, 5, 0).overlaps(&a));
    }

    #[test]
    fn test_inflate_vertical_keeps_center() {
        let r = Rect::new(10, 100, 52, 80);
        let grown = r.inflate(0, 8);
        assert_eq!(grown, Rect::new(10, 96, 52, 88));
        assert_eq!(grown.center(), r.center());
    }

    #[test]
    fn test_inflate_reaches_near_miss() {
        // 3px gap below an obstacle: exact rects miss, inflated rect catches it
        let obstacle = Rect::new(0, 0, 50, 80);
        let player = Rect::new(0, 83, 50, 90);
        assert!(!player.overlaps(&obstacle));
        assert!(player.overlaps(&obstacle.inflate(0, 8)));
    }

    #[test]
    fn test_from_pos_size_truncates_toward_zero() {
        let r = Rect::from_pos_size(Vec2::new(12.0, -7.9), IVec2::new(40, 60));
        assert_eq!(r, Rect::new(12, -7, 40, 60));
        let r = Rect::from_pos_size(Vec2::new(12.0, 7.9), IVec2::new(40, 60));
        assert_eq!(r.top(), 7);
    }

    #[test]
    fn test_contains_point() {
        let r = Rect::new(10, 10, 20, 20);
        assert!(r.contains_point(10, 10));
        assert!(r.contains_point(29, 29));
        assert!(!r.contains_point(30, 15));
    }
}
