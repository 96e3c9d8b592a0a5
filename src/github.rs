//! Contributor data source backed by the GitHub REST API.
//!
//! Fetches the commit history of one content file and turns it into the
//! contributor records the resolver expects: newest first, one record per
//! attributed commit. Ordering is established here so the resolver never
//! has to sort.

use crate::contributors::ContributorRecord;
use crate::retry::{with_retry_if, RetryConfig};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use regex::Regex;
use reqwest::StatusCode;
use serde::Deserialize;
use std::sync::OnceLock;
use tracing::{debug, info};

const USER_AGENT: &str = concat!("locale-site/", env!("CARGO_PKG_VERSION"));
const PER_PAGE: &str = "100";

#[derive(Debug, Deserialize)]
struct CommitResponse {
    commit: CommitDetails,
    /// Null when the commit email is not linked to a GitHub account
    author: Option<GitHubUser>,
}

#[derive(Debug, Deserialize)]
struct CommitDetails {
    author: CommitSignature,
}

#[derive(Debug, Deserialize)]
struct CommitSignature {
    date: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct GitHubUser {
    login: String,
    avatar_url: String,
    html_url: String,
}

/// Contributor history for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHistory {
    /// Attributed commits, newest first
    pub contributors: Vec<ContributorRecord>,
    /// Date of the newest commit, attributed or not
    pub last_edited_at: Option<DateTime<Utc>>,
}

#[derive(Debug, thiserror::Error)]
enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("GitHub API error ({status}): {body}")]
    Status { status: StatusCode, body: String },
}

impl FetchError {
    fn is_retryable(&self) -> bool {
        match self {
            FetchError::Transport(e) => !e.is_decode(),
            FetchError::Status { status, .. } => {
                status.is_server_error() || *status == StatusCode::TOO_MANY_REQUESTS
            }
        }
    }
}

static REPO_REGEX: OnceLock<Regex> = OnceLock::new();

/// Whether `repo` looks like `owner/name`.
pub fn is_valid_repo(repo: &str) -> bool {
    let regex =
        REPO_REGEX.get_or_init(|| Regex::new(r"^[A-Za-z0-9_.-]+/[A-Za-z0-9_.-]+$").unwrap());
    regex.is_match(repo)
}

/// Client for one repository's commit history.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    api_url: String,
    repo: String,
    token: Option<String>,
    retry: RetryConfig,
}

impl GitHubClient {
    pub fn new(api_url: &str, repo: &str, token: Option<String>) -> Result<Self> {
        if !is_valid_repo(repo) {
            anyhow::bail!("Invalid GitHub repository '{}'. Expected owner/name", repo);
        }

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
            repo: repo.to_string(),
            token,
            retry: RetryConfig::contributor_history(),
        })
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Fetch the contributor history of a file in the repository.
    pub async fn fetch_file_history(&self, path: &str) -> Result<FileHistory> {
        let operation = format!("GitHub history {}", path);
        let commits = with_retry_if(
            &self.retry,
            &operation,
            || self.fetch_commits(path),
            FetchError::is_retryable,
        )
        .await
        .with_context(|| format!("Failed to fetch contributors for {}", path))?;

        let history = history_from_commits(commits);
        info!(
            "Fetched {} contributor records for {} in {}",
            history.contributors.len(),
            path,
            self.repo
        );
        Ok(history)
    }

    async fn fetch_commits(&self, path: &str) -> Result<Vec<CommitResponse>, FetchError> {
        let url = format!("{}/repos/{}/commits", self.api_url, self.repo);
        debug!("Requesting {} for path {}", url, path);

        let mut request = self
            .http
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .query(&[("path", path), ("per_page", PER_PAGE)]);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status { status, body });
        }

        Ok(response.json().await?)
    }
}

fn history_from_commits(commits: Vec<CommitResponse>) -> FileHistory {
    let last_edited_at = commits.iter().map(|c| c.commit.author.date).max();

    let mut contributors: Vec<ContributorRecord> = commits
        .into_iter()
        .filter_map(|commit| {
            let user = commit.author?;
            Some(ContributorRecord {
                handle: user.login,
                avatar_ref: user.avatar_url,
                profile_ref: user.html_url,
                edited_at: commit.commit.author.date,
            })
        })
        .collect();
    // Stable, so equal timestamps keep the API's order
    contributors.sort_by(|a, b| b.edited_at.cmp(&a.edited_at));

    FileHistory {
        contributors,
        last_edited_at,
    }
}
