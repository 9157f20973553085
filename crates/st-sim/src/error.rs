use st_core::CoreError;
use st_spatial::SpatialError;
use st_voice::VoiceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    #[error("scene error: {0}")]
    Spatial(#[from] SpatialError),

    #[error("voice error: {0}")]
    Voice(#[from] VoiceError),
}

pub type SimResult<T> = Result<T, SimError>;
