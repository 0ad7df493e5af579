use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One item of `GET /user/starred` under the `star+json` media type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarredEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starred_at: Option<DateTime<Utc>>,
    pub repo: Repository,
}

/// Repository record as returned by the GitHub API.
///
/// Only the fields the search needs are typed; everything else the API sends
/// is carried through `extra` so the cache keeps the full record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub pushed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub html_url: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Repository {
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    pub fn language(&self) -> &str {
        self.language.as_deref().unwrap_or("")
    }
}

/// One page of starred repositories plus the cursor to the next one.
#[derive(Debug, Clone, Default)]
pub struct StarPage {
    pub entries: Vec<StarredEntry>,
    /// `None` once the server reports no further pages.
    pub next_page: Option<u32>,
}
