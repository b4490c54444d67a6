//! Entities and bounding boxes.

use serde::Serialize;

use crate::types::ObstacleKind;

/// Axis-aligned bounding box in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Aabb {
    /// Box centered at `(cx, cy)` with the given half-extents.
    pub fn centered(cx: f64, cy: f64, half_w: f64, half_h: f64) -> Self {
        Self {
            left: cx - half_w,
            right: cx + half_w,
            top: cy - half_h,
            bottom: cy + half_h,
        }
    }

    /// Strict overlap test: boxes that only touch along an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.top < other.bottom
            && self.bottom > other.top
    }
}

/// A descending obstacle. `(x, y)` is its center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Obstacle {
    pub x: i32,
    pub y: f64,
    pub width: i32,
    pub height: i32,
    #[serde(rename = "type")]
    pub kind: ObstacleKind,
}

impl Obstacle {
    pub fn new(x: i32, y: f64, width: i32, height: i32, kind: ObstacleKind) -> Self {
        Self {
            x,
            y,
            width,
            height,
            kind,
        }
    }

    /// Hitbox; half-extents are the integer halves of width and height.
    pub fn bounds(&self) -> Aabb {
        Aabb::centered(
            self.x as f64,
            self.y,
            (self.width / 2) as f64,
            (self.height / 2) as f64,
        )
    }
}

/// A collectible coin. `(x, y)` is its center and `size` its radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coin {
    pub x: i32,
    pub y: f64,
    pub size: i32,
}

impl Coin {
    pub fn new(x: i32, y: f64, size: i32) -> Self {
        Self { x, y, size }
    }

    /// Square hitbox with half-extent `size`, although coins are drawn round.
    pub fn bounds(&self) -> Aabb {
        let half = self.size as f64;
        Aabb::centered(self.x as f64, self.y, half, half)
    }
}
