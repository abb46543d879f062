//! Brio Engine - collision and instancing core for small 2D canvas games
//!
//! Core modules:
//! - `sim`: Entities, colliders, overlap tests and the name-keyed scene registry
//! - `renderer`: Debug overlay geometry (collider bounds, sprite borders)
//! - `settings`: Canvas/render/debug configuration
//! - `logging`: Log backend setup (console on web, env_logger on native)
//! - `error`: Configuration errors surfaced to the host

pub mod error;
pub mod logging;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{EngineError, Result};
pub use settings::{EngineSettings, RenderingType, SmoothingQuality};

use glam::Vec2;

/// Engine configuration constants
pub mod consts {
    /// Separator between an entity's base name and its clone number (`bot-3`)
    pub const CLONE_SEPARATOR: char = '-';

    /// Default canvas dimensions
    pub const DEFAULT_WIDTH: u32 = 600;
    pub const DEFAULT_HEIGHT: u32 = 400;

    /// Default world scale applied by the renderer
    pub const DEFAULT_SCALE: f32 = 1.0;

    /// Overlay stroke width in screen pixels (divided by scale in world space)
    pub const OVERLAY_STROKE_PX: f32 = 2.0;
}

/// Unit vector in the direction of `v`, or zero for a zero-length vector
#[inline]
pub fn normalized(v: Vec2) -> Vec2 {
    let magnitude = v.length();
    if magnitude == 0.0 {
        return Vec2::ZERO;
    }
    v / magnitude
}

/// Normalize a layer value: layers are whole, non-negative numbers
#[inline]
pub fn normalize_layer(layer: f32) -> u32 {
    layer.abs().round() as u32
}
