use crate::error::{GhStarsError, Result};
use crate::search::SearchQuery;
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_CACHE_FILE: &str = "stars.json";

/// Everything `update` needs, resolved up front by the CLI layer.
#[derive(Debug, Clone)]
pub struct UpdateConfig {
    pub token: String,
    pub api_url: String,
    pub cache_path: PathBuf,
}

impl UpdateConfig {
    /// Fails with `MissingToken` when the token is absent or empty.
    /// A present token is passed through untouched.
    pub fn new(token: Option<String>, api_url: String, cache_path: PathBuf) -> Result<Self> {
        let token = token
            .filter(|t| !t.is_empty())
            .ok_or(GhStarsError::MissingToken)?;

        Ok(UpdateConfig {
            token,
            api_url,
            cache_path,
        })
    }
}

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub cache_path: PathBuf,
    pub query: SearchQuery,
}

/// The resolved form of one CLI invocation.
#[derive(Debug, Clone)]
pub enum RunConfig {
    Update(UpdateConfig),
    Search(SearchConfig),
}
