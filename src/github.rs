use crate::error::{GhStarsError, Result};
use crate::models::{StarPage, StarredEntry};
use crate::pager::StarSource;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, LINK, USER_AGENT};
use reqwest::{Client, Response, StatusCode};
use tracing::debug;
use url::Url;

pub const PER_PAGE: u32 = 100;

const GITHUB_API_VERSION: &str = "2022-11-28";
// Includes `starred_at` alongside each repository.
const STAR_MEDIA_TYPE: &str = "application/vnd.github.star+json";

pub struct GitHubClient {
    client: Client,
    api_url: String,
}

impl GitHubClient {
    pub fn new(token: &str, api_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| GhStarsError::ApiError(format!("Invalid token: {}", e)))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static(STAR_MEDIA_TYPE));
        headers.insert("X-GitHub-Api-Version", HeaderValue::from_static(GITHUB_API_VERSION));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("ghstars/", env!("CARGO_PKG_VERSION"))),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(GitHubClient {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch one page of the authenticated user's starred repositories.
    pub async fn fetch_starred_page(&self, page: u32) -> Result<StarPage> {
        let url = format!("{}/user/starred", self.api_url);
        debug!(page, "requesting starred page");

        let response = self
            .client
            .get(&url)
            .query(&[("per_page", PER_PAGE), ("page", page)])
            .send()
            .await?;
        let response = check_response(response).await?;

        let next_page = response
            .headers()
            .get(LINK)
            .and_then(|h| h.to_str().ok())
            .and_then(next_page_from_link);

        let entries: Vec<StarredEntry> = response.json().await?;
        debug!(page, count = entries.len(), ?next_page, "received starred page");

        Ok(StarPage { entries, next_page })
    }
}

impl StarSource for GitHubClient {
    async fn fetch_page(&self, page: u32) -> Result<StarPage> {
        self.fetch_starred_page(page).await
    }
}

async fn check_response(response: Response) -> Result<Response> {
    match response.status() {
        StatusCode::OK => Ok(response),
        StatusCode::UNAUTHORIZED => Err(GhStarsError::Unauthorized),
        StatusCode::NOT_FOUND => Err(GhStarsError::NotFound(response.url().to_string())),
        StatusCode::FORBIDDEN => {
            let remaining = response
                .headers()
                .get("x-ratelimit-remaining")
                .and_then(|h| h.to_str().ok())
                .and_then(|s| s.parse::<u32>().ok());
            if remaining == Some(0) {
                let reset_at = response
                    .headers()
                    .get("x-ratelimit-reset")
                    .and_then(|h| h.to_str().ok())
                    .and_then(|s| s.parse::<i64>().ok())
                    .and_then(|ts| chrono::DateTime::from_timestamp(ts, 0))
                    .map(|dt| dt.format("%H:%M:%S UTC").to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                Err(GhStarsError::RateLimitExceeded(format!("resets at {}", reset_at)))
            } else {
                let error_text = response.text().await.unwrap_or_default();
                Err(GhStarsError::ApiError(format!("Forbidden: {}", error_text)))
            }
        }
        status => {
            let error_text = response.text().await.unwrap_or_default();
            Err(GhStarsError::ApiError(format!(
                "API request failed with status {}: {}",
                status, error_text
            )))
        }
    }
}

/// Extract the `page` number of the `rel="next"` link from a `Link` header.
pub fn next_page_from_link(header: &str) -> Option<u32> {
    header.split(',').find_map(|link| {
        let mut parts = link.split(';');
        let target = parts.next()?.trim();
        let is_next = parts.any(|param| {
            let param = param.trim();
            param == "rel=\"next\"" || param == "rel=next"
        });
        if !is_next {
            return None;
        }

        let target = target.strip_prefix('<')?.strip_suffix('>')?;
        let url = Url::parse(target).ok()?;
        url.query_pairs()
            .find(|(key, _)| key == "page")
            .and_then(|(_, value)| value.parse().ok())
    })
}
