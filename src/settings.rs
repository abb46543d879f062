//! Engine settings
//!
//! Canvas, rendering and debug preferences. The host builds them in code or
//! deserializes them from its own config.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_HEIGHT, DEFAULT_SCALE, DEFAULT_WIDTH};
use crate::error::{EngineError, Result};
use crate::logging::LogSettings;

/// How sprites are sampled when scaled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RenderingType {
    /// Nearest-neighbour sampling (crisp pixel art)
    Pixelated,
    /// Filtered sampling
    #[default]
    Smooth,
}

impl RenderingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderingType::Pixelated => "pixelated",
            RenderingType::Smooth => "smooth",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pixelated" | "pixel" => Some(RenderingType::Pixelated),
            "smooth" => Some(RenderingType::Smooth),
            _ => None,
        }
    }
}

/// Filter quality used by smooth rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SmoothingQuality {
    #[default]
    Low,
    Medium,
    High,
}

impl SmoothingQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            SmoothingQuality::Low => "low",
            SmoothingQuality::Medium => "medium",
            SmoothingQuality::High => "high",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(SmoothingQuality::Low),
            "medium" | "med" => Some(SmoothingQuality::Medium),
            "high" => Some(SmoothingQuality::High),
            _ => None,
        }
    }
}

/// Engine settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineSettings {
    // === Canvas ===
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// World-to-screen scale applied to every draw
    pub scale: f32,

    // === Rendering ===
    rendering_type: RenderingType,
    smoothing_quality: SmoothingQuality,

    // === Debug ===
    /// Outline collider bounds every frame
    pub show_collisions: bool,
    /// Outline sprite borders every frame
    pub show_borders: bool,

    /// Log backend preferences
    #[serde(default)]
    pub logs: LogSettings,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            scale: DEFAULT_SCALE,

            rendering_type: RenderingType::Smooth,
            smoothing_quality: SmoothingQuality::Low,

            show_collisions: false,
            show_borders: false,

            logs: LogSettings::default(),
        }
    }
}

impl EngineSettings {
    /// Settings for a canvas of the given size
    pub fn with_canvas(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn rendering_type(&self) -> RenderingType {
        self.rendering_type
    }

    /// Switch rendering type. The smoothing quality is kept for when smooth
    /// rendering comes back.
    pub fn set_rendering_type(&mut self, rendering_type: RenderingType) {
        self.rendering_type = rendering_type;
    }

    pub fn smoothing_quality(&self) -> SmoothingQuality {
        self.smoothing_quality
    }

    /// Change smoothing quality; only valid while rendering is smooth
    pub fn set_smoothing_quality(&mut self, quality: SmoothingQuality) -> Result<()> {
        if self.rendering_type != RenderingType::Smooth {
            return Err(EngineError::SmoothingUnavailable(self.rendering_type));
        }
        self.smoothing_quality = quality;
        Ok(())
    }

    /// Parse settings from a JSON document; missing `logs` falls back to defaults
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| EngineError::InvalidSettings(e.to_string()))
    }

    /// Stroke width for debug outlines, in world units
    pub fn overlay_stroke(&self) -> f32 {
        crate::consts::OVERLAY_STROKE_PX / self.scale.max(f32::EPSILON)
    }
}
