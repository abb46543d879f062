//! Debug overlay: collider bounds, sprite borders and centre axes
//!
//! Produces plain geometry for the host to draw on top of the frame. Every
//! collider is drawn as the box spanned by its offset and extent, circles
//! included, so the overlay shows exactly what the extent covers.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::consts::OVERLAY_STROKE_PX;
use crate::settings::EngineSettings;
use crate::sim::{Aabb, Entity, Scene};

/// Colors used by the overlay
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayColors {
    pub collider: [f32; 4],
    pub border: [f32; 4],
    pub axis: [f32; 4],
}

impl Default for OverlayColors {
    fn default() -> Self {
        Self {
            collider: colors::COLLIDER,
            border: colors::BORDER,
            axis: colors::COLLIDER,
        }
    }
}

/// One stroked rectangle in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugRect {
    pub bounds: Aabb,
    pub color: [f32; 4],
    pub stroke: f32,
}

impl DebugRect {
    pub fn vertices(&self) -> Vec<Vertex> {
        shapes::rect_outline(&self.bounds, self.stroke, self.color)
    }
}

/// Overlay builder configured from [`EngineSettings`]
#[derive(Debug, Clone)]
pub struct CollisionOverlay {
    colors: OverlayColors,
    /// World-space stroke width
    stroke: f32,
    canvas: Vec2,

    /// Outline every collider
    pub show_collisions: bool,

    /// Outline every sprite (position/size)
    pub show_borders: bool,

    /// Draw the canvas centre lines
    pub show_axis: bool,
}

impl CollisionOverlay {
    pub fn new(scale: f32, canvas: Vec2) -> Self {
        Self {
            colors: OverlayColors::default(),
            stroke: OVERLAY_STROKE_PX / scale.max(f32::EPSILON),
            canvas,
            show_collisions: true,
            show_borders: false,
            show_axis: false,
        }
    }

    pub fn from_settings(settings: &EngineSettings) -> Self {
        let mut overlay = Self::new(
            settings.scale,
            Vec2::new(settings.width as f32, settings.height as f32),
        );
        overlay.show_collisions = settings.show_collisions;
        overlay.show_borders = settings.show_borders;
        overlay
    }

    pub fn with_colors(mut self, colors: OverlayColors) -> Self {
        self.colors = colors;
        self
    }

    pub fn stroke(&self) -> f32 {
        self.stroke
    }

    /// Collider bounds of one entity, if it has a collider
    pub fn collider_rect(&self, entity: &Entity) -> Option<DebugRect> {
        let collider = entity.collider()?;
        Some(DebugRect {
            bounds: collider.world_bounds(entity.position),
            color: self.colors.collider,
            stroke: self.stroke,
        })
    }

    /// Sprite border of one entity
    pub fn border_rect(&self, entity: &Entity) -> DebugRect {
        DebugRect {
            bounds: Aabb::from_origin_extent(entity.position, entity.size),
            color: self.colors.border,
            stroke: self.stroke,
        }
    }

    /// All enabled rectangles for the scene: colliders first, then borders
    pub fn rects(&self, scene: &Scene) -> Vec<DebugRect> {
        let mut rects = Vec::new();
        if self.show_collisions {
            rects.extend(scene.iter().filter_map(|e| self.collider_rect(e)));
        }
        if self.show_borders {
            rects.extend(scene.iter().map(|e| self.border_rect(e)));
        }
        rects
    }

    /// Horizontal and vertical lines through the canvas centre, 1px wide
    pub fn axis_vertices(&self) -> Vec<Vertex> {
        let mid = self.canvas * 0.5;
        let horizontal = Aabb::new(
            Vec2::new(0.0, mid.y - 0.5),
            Vec2::new(self.canvas.x, mid.y + 0.5),
        );
        let vertical = Aabb::new(
            Vec2::new(mid.x - 0.5, 0.0),
            Vec2::new(mid.x + 0.5, self.canvas.y),
        );

        let mut vertices = shapes::rect(&horizontal, self.colors.axis);
        vertices.extend(shapes::rect(&vertical, self.colors.axis));
        vertices
    }

    /// Vertex buffer layout matching [`CollisionOverlay::vertex_bytes`]
    pub fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
        Vertex::desc()
    }

    /// Overlay triangles as raw bytes, ready for a vertex buffer upload
    pub fn vertex_bytes(&self, scene: &Scene) -> Vec<u8> {
        bytemuck::cast_slice(&self.vertices(scene)).to_vec()
    }

    /// Triangle list for everything enabled
    pub fn vertices(&self, scene: &Scene) -> Vec<Vertex> {
        let mut vertices: Vec<Vertex> = self
            .rects(scene)
            .iter()
            .flat_map(DebugRect::vertices)
            .collect();
        if self.show_axis {
            vertices.extend(self.axis_vertices());
        }
        vertices
    }
}
