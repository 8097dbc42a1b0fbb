//! Axis-aligned bounding boxes and the overlap test
//!
//! Every entity pair (dot vs obstacle, dot vs each power-up) goes through
//! `overlaps`; there is no broad phase since the entity count is fixed.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, origin at top-left
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

    /// Rectangle at `pos` with the given size
    pub fn at(pos: IVec2, size: IVec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
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

    pub fn overlaps(&self, other: &Rect) -> bool {
        overlaps(self, other)
    }
}

/// Strict overlap test: rectangles sharing only an edge do not overlap
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    if a.bottom() <= b.top() {
        return false;
    }
    if a.top() >= b.bottom() {
        return false;
    }
    if a.right() <= b.left() {
        return false;
    }
    if a.left() >= b.right() {
        return false;
    }
    true
}
