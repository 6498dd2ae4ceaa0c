//! Collision detection for axis-aligned tile geometry
//!
//! Everything in the maze is an axis-aligned box in integer pixel space, so
//! collision reduces to interval overlap on both axes.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in pixel space (top-left origin, y grows down)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub pos: IVec2,
    pub size: IVec2,
}

impl Rect {
    pub const fn new(pos: IVec2, size: IVec2) -> Self {
        Self { pos, size }
    }

    /// Square rectangle, used for tiles and tile-sized entities
    pub const fn square(pos: IVec2, edge: i32) -> Self {
        Self {
            pos,
            size: IVec2::new(edge, edge),
        }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    /// Strict overlap: boxes that merely share an edge do not collide
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Half-open containment: the right and bottom edges belong to the neighbour
    #[inline]
    pub fn contains_point(&self, point: IVec2) -> bool {
        point.x >= self.left() && point.x < self.right() && point.y >= self.top() && point.y < self.bottom()
    }
}
