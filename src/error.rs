//! Configuration errors
//!
//! Only setup-time mistakes are errors. Collision queries never fail: missing
//! data resolves to "not colliding" so the frame keeps running.

use thiserror::Error;

use crate::settings::RenderingType;

/// Errors surfaced to the host application
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A directly created entity used the `-<digits>` suffix reserved for clones
    #[error("entity name '{name}' ends with '-<number>', which is reserved for instances (try '{suggestion}')")]
    ReservedName { name: String, suggestion: String },

    /// No entity with this name is registered
    #[error("no entity named '{0}' is loaded")]
    UnknownEntity(String),

    /// An entity with this name is already registered
    #[error("an entity named '{0}' is already loaded")]
    DuplicateEntity(String),

    /// Smoothing quality only applies to smooth rendering
    #[error("the current rendering type is '{}', set it to 'smooth' to change the smoothing quality", .0.as_str())]
    SmoothingUnavailable(RenderingType),

    /// Settings could not be parsed or serialized
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, EngineError>;
