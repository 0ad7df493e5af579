use crate::models::{Repository, StarredEntry};

/// Case-insensitive filter over the cached stars.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    term: String,
    language: Option<String>,
}

impl SearchQuery {
    pub fn new(term: &str, language: Option<&str>) -> Self {
        SearchQuery {
            term: term.to_lowercase(),
            language: language
                .map(str::to_lowercase)
                .filter(|lang| !lang.is_empty()),
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// The term must occur in the full name or description; an empty term
    /// matches every record. A language filter must match exactly.
    pub fn matches(&self, repo: &Repository) -> bool {
        let term_hit = repo.full_name.to_lowercase().contains(&self.term)
            || repo.description().to_lowercase().contains(&self.term);
        if !term_hit {
            return false;
        }

        match &self.language {
            Some(lang) => repo.language().to_lowercase() == *lang,
            None => true,
        }
    }
}

/// Matching repositories, most-starred first. Ties keep cache order.
pub fn search<'a>(entries: &'a [StarredEntry], query: &SearchQuery) -> Vec<&'a Repository> {
    let mut hits: Vec<&Repository> = entries
        .iter()
        .map(|entry| &entry.repo)
        .filter(|repo| query.matches(repo))
        .collect();

    // `sort_by` is stable.
    hits.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
    hits
}
