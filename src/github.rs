//! GitHub repository grid.
//!
//! One fetch at startup: list the user's public repos, keep the few
//! with the most stars. No token, no pagination; the accounts this
//! deck is pointed at stay well under one page.

use serde::Deserialize;

use crate::api::ApiError;

pub const API_BASE: &str = "https://api.github.com";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Repo {
    pub name: String,
    pub html_url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: i64,
    #[serde(default)]
    pub forks_count: i64,
}

impl Repo {
    /// Grid copy for repos without a description
    pub fn description_or_default(&self) -> &str {
        self.description
            .as_deref()
            .unwrap_or("No description provided")
    }
}

/// Fetch the user's repos, sorted by stars descending, capped at
/// `limit`. The sort is stable, so equal-star repos keep the API's
/// ordering.
///
/// `base` is [`API_BASE`] outside of tests.
pub async fn fetch_top_repos(
    client: &reqwest::Client,
    base: &str,
    user: &str,
    limit: usize,
) -> Result<Vec<Repo>, ApiError> {
    let url = format!("{}/users/{}/repos", base, user);
    let response = client.get(&url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Api(format!("HTTP {}", status)));
    }

    let body = response.text().await?;
    let mut repos: Vec<Repo> = serde_json::from_str(&body)?;

    repos.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
    repos.truncate(limit);
    Ok(repos)
}
