//! Axis-aligned collision geometry
//!
//! Everything in the playfield is a rectangle: the bird's bounding box and the
//! two solid segments of each pipe. Overlap tests use strict inequalities, so
//! rectangles that merely share an edge do not collide.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, top-left anchored, y grows downward
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Strict overlap test; edge contact is not an intersection
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}
