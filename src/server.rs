//! HTTP API exposing the resolved footer and contributor attribution.
//!
//! ## Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/locales` - Enabled locales and their content versions
//! - `GET /api/footer?locale=xx` - Footer links gated for the locale, with labels
//! - `POST /api/attribution` - Attribution view for a supplied contributor list
//! - `GET /api/contributors?path=...&locale=xx` - Attribution view from GitHub history
//! - `POST /api/events/roster-opened` - Record that the contributor list was opened

use crate::catalog::{LinkCatalog, SocialLink};
use crate::config::Config;
use crate::contributors::{AttributionView, ContributorRecord};
use crate::gate;
use crate::github::GitHubClient;
use crate::i18n::{format_build_date, Locale, LocaleRegistry, MessageLookup};
use crate::telemetry::{EventSink, LogEventSink, TrackedEvent};
use crate::version::ContentVersion;
use anyhow::{Context, Result};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

// ==================== State ====================

/// Shared server state. Everything in it is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<LinkCatalog>,
    pub github: Option<Arc<GitHubClient>>,
    pub events: Arc<dyn EventSink>,
    pub site_build_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(catalog: LinkCatalog, site_build_time: DateTime<Utc>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            github: None,
            events: Arc::new(LogEventSink),
            site_build_time,
        }
    }

    pub fn with_github(mut self, client: GitHubClient) -> Self {
        self.github = Some(Arc::new(client));
        self
    }

    pub fn with_event_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.events = sink;
        self
    }
}

// ==================== Request / Response Types ====================

#[derive(Debug, Deserialize)]
pub struct LocaleQuery {
    pub locale: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ContributorsQuery {
    pub path: String,
    pub locale: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributionRequest {
    pub locale: Option<String>,
    pub last_edited_at: DateTime<Utc>,
    #[serde(default)]
    pub contributors: Vec<ContributorRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleSummary {
    pub code: String,
    pub name: String,
    pub native_name: String,
    pub content_version: ContentVersion,
    pub is_default: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterLink {
    pub target: String,
    pub label_key: String,
    pub label: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterSection {
    pub title_key: String,
    pub title: String,
    pub links: Vec<FooterLink>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterResponse {
    /// Locale the labels were rendered in (after fallback)
    pub locale: String,
    /// Version the links were gated at, for the locale as requested
    pub content_version: ContentVersion,
    pub last_updated_label: String,
    pub last_updated: String,
    pub sections: Vec<FooterSection>,
    pub social_links: Vec<SocialLink>,
}

impl FooterResponse {
    /// Gate the catalog for `requested_locale` and attach localized text.
    pub fn build(requested_locale: &str, catalog: &LinkCatalog, build_time: DateTime<Utc>) -> Self {
        let registry = LocaleRegistry::get();
        let locale = Locale::resolve(requested_locale).code();

        let sections = gate::resolve(requested_locale, catalog, registry)
            .into_iter()
            .map(|section| FooterSection {
                title_key: section.title_key.to_string(),
                title: registry.message(section.title_key, locale).into_owned(),
                links: section
                    .links
                    .into_iter()
                    .map(|entry| FooterLink {
                        target: entry.target.clone(),
                        label_key: entry.label_key.clone(),
                        label: registry.message(&entry.label_key, locale).into_owned(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            locale: locale.to_string(),
            content_version: registry.content_version(requested_locale),
            last_updated_label: registry.message("website-last-updated", locale).into_owned(),
            last_updated: format_build_date(locale, build_time),
            sections,
            social_links: catalog.social_links.clone(),
        }
    }
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

/// Extractor rejections keep their status but answer with an `ErrorResponse`.
fn rejected_json(rejection: JsonRejection) -> ApiError {
    api_error(rejection.status(), rejection.body_text())
}

fn rejected_query(rejection: QueryRejection) -> ApiError {
    api_error(rejection.status(), rejection.body_text())
}

fn requested_locale(locale: Option<String>) -> String {
    locale.unwrap_or_else(|| Locale::default_locale().code().to_string())
}

// ==================== Handlers ====================

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

pub async fn locales_handler() -> Json<Vec<LocaleSummary>> {
    let locales = LocaleRegistry::get()
        .list_enabled()
        .into_iter()
        .map(|config| LocaleSummary {
            code: config.code.to_string(),
            name: config.name.to_string(),
            native_name: config.native_name.to_string(),
            content_version: config.content_version,
            is_default: config.is_default,
        })
        .collect();
    Json(locales)
}

pub async fn footer_handler(
    State(state): State<AppState>,
    query: Result<Query<LocaleQuery>, QueryRejection>,
) -> Result<Json<FooterResponse>, ApiError> {
    let Query(query) = query.map_err(rejected_query)?;
    let locale = requested_locale(query.locale);
    Ok(Json(FooterResponse::build(
        &locale,
        &state.catalog,
        state.site_build_time,
    )))
}

pub async fn attribution_handler(
    request: Result<Json<AttributionRequest>, JsonRejection>,
) -> Result<Json<AttributionView>, ApiError> {
    let Json(request) = request.map_err(rejected_json)?;
    let locale = requested_locale(request.locale);
    Ok(Json(AttributionView::build(
        &locale,
        &request.contributors,
        request.last_edited_at,
        Utc::now(),
        LocaleRegistry::get(),
    )))
}

pub async fn contributors_handler(
    State(state): State<AppState>,
    query: Result<Query<ContributorsQuery>, QueryRejection>,
) -> Result<Json<AttributionView>, ApiError> {
    let Query(query) = query.map_err(rejected_query)?;
    let Some(github) = &state.github else {
        return Err(api_error(
            StatusCode::SERVICE_UNAVAILABLE,
            "Contributor history is not configured",
        ));
    };

    let history = github.fetch_file_history(&query.path).await.map_err(|e| {
        warn!("Contributor lookup failed for {}: {:#}", query.path, e);
        api_error(StatusCode::BAD_GATEWAY, format!("{:#}", e))
    })?;

    let now = Utc::now();
    let locale = requested_locale(query.locale);
    Ok(Json(AttributionView::build(
        &locale,
        &history.contributors,
        history.last_edited_at.unwrap_or(now),
        now,
        LocaleRegistry::get(),
    )))
}

pub async fn roster_opened_handler(State(state): State<AppState>) -> StatusCode {
    state.events.track(&TrackedEvent::roster_opened());
    StatusCode::NO_CONTENT
}

// ==================== Router ====================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/locales", get(locales_handler))
        .route("/api/footer", get(footer_handler))
        .route("/api/attribution", post(attribution_handler))
        .route("/api/contributors", get(contributors_handler))
        .route("/api/events/roster-opened", post(roster_opened_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build state from configuration and serve until the process exits.
pub async fn serve(config: Config) -> Result<()> {
    let catalog = config.load_catalog()?;

    let report = catalog.check_integrity();
    for issue in &report.issues {
        warn!("Footer catalog: {}", issue);
    }
    info!(
        "Footer catalog ready: {} sections, {} links",
        catalog.sections.len(),
        catalog.entry_count()
    );

    let mut state = AppState::new(catalog, config.site_build_time);
    match &config.github_repo {
        Some(repo) => {
            let client =
                GitHubClient::new(&config.github_api_url, repo, config.github_token.clone())?;
            info!("Contributor history enabled for {}", client.repo());
            state = state.with_github(client);
        }
        None => info!("GITHUB_REPO not set, /api/contributors is disabled"),
    }

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("✓ Listening on {}", addr);

    axum::serve(listener, create_router(state))
        .await
        .context("Server error")?;
    Ok(())
}
