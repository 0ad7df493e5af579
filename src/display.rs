use crate::models::Repository;
use colored::*;
use std::io::{self, Write};

pub const DATE_FORMAT: &str = "%-d-%b-%Y";

/// Render one search hit as a blank separator line plus three text lines.
pub fn format_repository(repo: &Repository) -> String {
    let pushed = repo
        .pushed_at
        .map(|dt| dt.format(DATE_FORMAT).to_string())
        .unwrap_or_default();

    format!(
        "\n{}\n   {}\n   {}{} {}{} {}{}\n",
        format!(" {} ", repo.full_name).as_str().black().on_yellow(),
        repo.description().bold().white(),
        "lang=".dimmed(),
        repo.language().bold().blue(),
        "stars=".dimmed(),
        repo.stargazers_count.to_string().as_str().bold().blue(),
        "updated=".dimmed(),
        pushed.as_str().bold().blue(),
    )
}

/// Write every hit, then a closing blank line if there was at least one.
pub fn write_results<W: Write>(out: &mut W, repos: &[&Repository]) -> io::Result<()> {
    for repo in repos {
        out.write_all(format_repository(repo).as_bytes())?;
    }
    if !repos.is_empty() {
        writeln!(out)?;
    }
    out.flush()
}
