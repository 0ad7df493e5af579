use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GhStarsError {
    #[error("Environment variable GITHUB_TOKEN is not set.")]
    MissingToken,

    #[error("GitHub rejected the token (401 Unauthorized)")]
    Unauthorized,

    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("GitHub API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("{} not found, run `ghstars update` first", .0.display())]
    CacheNotFound(PathBuf),
}

pub type Result<T> = std::result::Result<T, GhStarsError>;
