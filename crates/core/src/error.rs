use hangar_api::ApiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HangarError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),
    #[error(transparent)]
    Api(#[from] ApiError),
}

pub type Result<T> = std::result::Result<T, HangarError>;
