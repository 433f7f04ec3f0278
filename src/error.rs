use crate::wall::PostId;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Post {0} not found")]
    NotFound(PostId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
