use anyhow::Context;
use clap::Parser;
use colored::*;
use ghstars::cache;
use ghstars::cli::Cli;
use ghstars::config::{RunConfig, SearchConfig, UpdateConfig};
use ghstars::display;
use ghstars::github::GitHubClient;
use ghstars::pager;
use ghstars::search;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ghstars=info")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli).await {
        eprintln!("{} {:#}", "ghstars:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    match cli.config()? {
        RunConfig::Update(config) => run_update(config).await,
        RunConfig::Search(config) => run_search(config),
    }
}

async fn run_update(config: UpdateConfig) -> anyhow::Result<()> {
    let client = GitHubClient::new(&config.token, &config.api_url)?;

    let mut stdout = io::stdout();
    print!("Fetching:");
    stdout.flush()?;
    let fetched = pager::fetch_all(&client, |count| {
        print!(" {}", count);
        let _ = io::stdout().flush();
    })
    .await;
    println!();
    let entries = fetched.context("failed to fetch starred repositories")?;

    cache::save(&config.cache_path, &entries)
        .with_context(|| format!("failed to save {}", config.cache_path.display()))?;
    Ok(())
}

fn run_search(config: SearchConfig) -> anyhow::Result<()> {
    let entries = cache::load(&config.cache_path)
        .with_context(|| format!("failed to read {}", config.cache_path.display()))?;
    let hits = search::search(&entries, &config.query);

    display::write_results(&mut io::stdout().lock(), &hits)?;
    Ok(())
}
