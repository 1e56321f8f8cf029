use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("expected a preset name but got: {name:?}")]
    UnknownPreset { name: String },
    #[error("expected a preset tag in range [0, 2] but got: {tag}")]
    UnknownPresetTag { tag: i32 },
    #[cfg(feature = "serde")]
    #[error("failed to access camera file: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "serde")]
    #[error("malformed camera record: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
