//! Locale-aware footer link gating and per-file contributor attribution.
//!
//! - [`gate`] picks the footer links valid for a locale's content version
//! - [`contributors`] derives the last-edit summary and the full roster
//! - [`i18n`] holds the locale registry, message tables and date rendering
//! - [`github`] and [`server`] connect the core to its data source and to HTTP

pub mod catalog;
pub mod config;
pub mod contributors;
pub mod gate;
pub mod github;
pub mod i18n;
pub mod retry;
pub mod server;
pub mod telemetry;
pub mod version;

pub use catalog::{LinkCatalog, LinkEntry, LinkSection};
pub use contributors::{full_roster, last_contributor, AttributionView, ContributorRecord};
pub use gate::{resolve, resolve_for_version, ResolvedSection, VersionLookup};
pub use version::{ContentVersion, VersionRange};
