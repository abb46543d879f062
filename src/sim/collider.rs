//! Collider shapes attached to entities
//!
//! A collider stores its geometry relative to the owning entity: `offset` is
//! added to the entity position, `extent` is the raw width/height. Shapes keep
//! the extent even for circles, the mixed box/circle test needs it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;

/// Solid colliders block, intangible ones only report. The engine carries the
/// classification but never interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColliderType {
    #[default]
    Solid,
    Intangible,
}

/// Shape tag without geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Square,
    Rectangle,
    Circle,
}

impl ShapeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Square => "square",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
        }
    }

    /// Parse a shape tag. Unknown tags are logged and rejected.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "square" => Some(ShapeKind::Square),
            "rectangle" | "rect" => Some(ShapeKind::Rectangle),
            "circle" => Some(ShapeKind::Circle),
            other => {
                log::warn!("Unrecognized collider shape '{}'", other);
                None
            }
        }
    }

    /// Squares and rectangles share the box test
    #[inline]
    pub fn is_box(&self) -> bool {
        matches!(self, ShapeKind::Square | ShapeKind::Rectangle)
    }
}

/// Collider geometry, derived from a shape tag and the current extent
///
/// Boxes keep both half extents: a square mask given a non-square extent is
/// still tested over its full width and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ColliderShape {
    Square { half_extents: Vec2 },
    Rectangle { half_extents: Vec2 },
    Circle { radius: f32 },
}

impl ColliderShape {
    /// Build the shape for `kind` from a raw width/height
    pub fn from_extent(kind: ShapeKind, extent: Vec2) -> Self {
        match kind {
            ShapeKind::Square => ColliderShape::Square {
                half_extents: extent * 0.5,
            },
            ShapeKind::Rectangle => ColliderShape::Rectangle {
                half_extents: extent * 0.5,
            },
            ShapeKind::Circle => ColliderShape::Circle {
                radius: extent.x.min(extent.y) / 2.0,
            },
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            ColliderShape::Square { .. } => ShapeKind::Square,
            ColliderShape::Rectangle { .. } => ShapeKind::Rectangle,
            ColliderShape::Circle { .. } => ShapeKind::Circle,
        }
    }
}

/// A collider owned by exactly one entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collider {
    kind: ShapeKind,
    pub collider_type: ColliderType,
    /// Offset from the entity position
    pub offset: Vec2,
    /// Raw width/height
    pub extent: Vec2,
}

impl Collider {
    /// Collider of any shape from raw width/height
    pub fn new(kind: ShapeKind, collider_type: ColliderType, offset: Vec2, extent: Vec2) -> Self {
        Self {
            kind,
            collider_type,
            offset,
            extent,
        }
    }

    pub fn square(collider_type: ColliderType, offset: Vec2, size: f32) -> Self {
        Self::new(ShapeKind::Square, collider_type, offset, Vec2::splat(size))
    }

    pub fn rectangle(collider_type: ColliderType, offset: Vec2, size: Vec2) -> Self {
        Self::new(ShapeKind::Rectangle, collider_type, offset, size)
    }

    pub fn circle(collider_type: ColliderType, offset: Vec2, size: f32) -> Self {
        Self::new(ShapeKind::Circle, collider_type, offset, Vec2::splat(size))
    }

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Geometry for the current extent
    pub fn shape(&self) -> ColliderShape {
        ColliderShape::from_extent(self.kind, self.extent)
    }

    #[inline]
    pub fn is_solid(&self) -> bool {
        self.collider_type == ColliderType::Solid
    }

    /// Circle radius derived from the current extent
    #[inline]
    pub fn radius(&self) -> f32 {
        self.extent.x.min(self.extent.y) / 2.0
    }

    /// Collider origin in world space (box corner, or circle centre)
    #[inline]
    pub fn world_origin(&self, entity_pos: Vec2) -> Vec2 {
        entity_pos + self.offset
    }

    /// World-space box spanned by offset and extent
    pub fn world_bounds(&self, entity_pos: Vec2) -> Aabb {
        Aabb::from_origin_extent(self.world_origin(entity_pos), self.extent)
    }
}
