use crate::catalog::LinkCatalog;
use crate::github::is_valid_repo;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::info;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,

    // Footer
    pub catalog_file: Option<String>,
    pub site_build_time: DateTime<Utc>,

    // GitHub contributor history
    pub github_api_url: String,
    pub github_repo: Option<String>,
    pub github_token: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let github_repo = non_empty_var("GITHUB_REPO");
        if let Some(repo) = &github_repo {
            if !is_valid_repo(repo) {
                anyhow::bail!("GITHUB_REPO must be owner/name, got '{}'", repo);
            }
        }

        let site_build_time = match non_empty_var("SITE_BUILD_TIME") {
            Some(value) => DateTime::parse_from_rfc3339(&value)
                .with_context(|| format!("SITE_BUILD_TIME is not RFC 3339: '{}'", value))?
                .with_timezone(&Utc),
            None => Utc::now(),
        };

        Ok(Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            catalog_file: non_empty_var("CATALOG_FILE"),
            site_build_time,

            github_api_url: std::env::var("GITHUB_API_URL")
                .unwrap_or_else(|_| "https://api.github.com".to_string()),
            github_repo,
            github_token: non_empty_var("GITHUB_TOKEN"),
        })
    }

    /// Load the footer catalog: the configured file if any, else the built-in one.
    pub fn load_catalog(&self) -> Result<LinkCatalog> {
        match &self.catalog_file {
            Some(path) => {
                let catalog = LinkCatalog::from_json_file(path)
                    .with_context(|| format!("Failed to load CATALOG_FILE {}", path))?;
                info!("Loaded {} footer links from {}", catalog.entry_count(), path);
                Ok(catalog)
            }
            None => Ok(LinkCatalog::builtin().clone()),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
