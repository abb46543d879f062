//! Axis-aligned bounding boxes
//!
//! A box is stored as its `min` and `max` corners in world space. Overlap uses
//! open intervals: boxes that only share an edge do not overlap.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Top-left corner (smallest x and y)
    pub min: Vec2,
    /// Bottom-right corner (largest x and y)
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box starting at `origin` and spanning `extent`
    #[inline]
    pub fn from_origin_extent(origin: Vec2, extent: Vec2) -> Self {
        Self {
            min: origin,
            max: origin + extent,
        }
    }

    /// Bounding box of a circle
    #[inline]
    pub fn around_circle(center: Vec2, radius: f32) -> Self {
        let r = Vec2::splat(radius);
        Self {
            min: center - r,
            max: center + r,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Strict overlap test: touching edges are not an overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        !(self.max.x <= other.min.x
            || other.max.x <= self.min.x
            || self.max.y <= other.min.y
            || other.max.y <= self.min.y)
    }

    /// Closest point inside the box to `point` (clamped per axis)
    #[inline]
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        point.max(self.min).min(self.max)
    }

    /// Check if a point is inside the box (edges included)
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Overlap depth along each axis (non-positive components mean no overlap)
    pub fn overlap_depth(&self, other: &Aabb) -> Vec2 {
        self.max.min(other.max) - self.min.max(other.min)
    }

    /// The four corners, clockwise from `min`
    pub fn corners(&self) -> [Vec2; 4] {
        [
            self.min,
            Vec2::new(self.max.x, self.min.y),
            self.max,
            Vec2::new(self.min.x, self.max.y),
        ]
    }
}
