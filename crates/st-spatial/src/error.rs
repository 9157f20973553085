//! Spatial-subsystem error type.

use thiserror::Error;

/// Errors produced while assembling a [`ColliderScene`][crate::ColliderScene].
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("invalid collider shape: {0}")]
    InvalidShape(String),

    #[error("layer {0} is out of range (0..32)")]
    InvalidLayer(u8),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
