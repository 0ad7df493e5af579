use crate::config::{RunConfig, SearchConfig, UpdateConfig, DEFAULT_API_URL, DEFAULT_CACHE_FILE};
use crate::error::Result;
use crate::search::SearchQuery;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ghstars")]
#[command(about = "Mirror your GitHub stars into a local file and search them")]
#[command(version)]
pub struct Cli {
    /// Local cache of starred repositories
    #[arg(long, global = true, env = "GHSTARS_FILE", default_value = DEFAULT_CACHE_FILE)]
    pub file: PathBuf,

    /// GitHub API base URL
    #[arg(long, global = true, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Download all starred repositories and overwrite the cache file
    Update {
        /// GitHub token used as a bearer credential
        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: Option<String>,
    },
    /// Search the cache by name or description, most-starred first
    Search {
        /// Case-insensitive substring of the full name or description
        term: String,

        /// Show only repos written in this language
        #[arg(short, long)]
        lang: Option<String>,
    },
}

impl Cli {
    /// Resolve the chosen subcommand into the config its operation runs with.
    pub fn config(&self) -> Result<RunConfig> {
        match &self.command {
            Command::Update { token } => Ok(RunConfig::Update(UpdateConfig::new(
                token.clone(),
                self.api_url.clone(),
                self.file.clone(),
            )?)),
            Command::Search { term, lang } => Ok(RunConfig::Search(SearchConfig {
                cache_path: self.file.clone(),
                query: SearchQuery::new(term, lang.as_deref()),
            })),
        }
    }
}
