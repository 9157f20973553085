use thiserror::Error;

#[derive(Debug, Error)]
pub enum VoiceError {
    #[error("voice catalog parse error: {0}")]
    Parse(String),

    #[error("unknown voice line category {0:?}")]
    UnknownCategory(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type VoiceResult<T> = Result<T, VoiceError>;
