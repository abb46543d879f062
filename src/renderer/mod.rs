//! Debug overlay geometry
//!
//! Builds triangle lists (with a wgpu vertex layout) that a host pipeline can
//! draw over the game frame.

pub mod overlay;
pub mod shapes;
pub mod vertex;

pub use overlay::{CollisionOverlay, DebugRect, OverlayColors};
pub use vertex::{Vertex, colors};
