//! Content-version gate: selects the footer links valid for a locale.
//!
//! An entry is shown iff the locale's content version lies in the entry's
//! `[min_version, max_version)` range. The gate is a single data-driven
//! comparison per entry. It never chooses between variants, never drops a
//! section, and never reorders anything.

use crate::catalog::{LinkCatalog, LinkEntry};
use crate::i18n::LocaleRegistry;
use crate::version::ContentVersion;
use serde::Serialize;
use tracing::debug;

/// Source of the content version for a locale.
///
/// Implementations must answer for every input: an unrecognized locale gets
/// a defined baseline, never an error.
pub trait VersionLookup {
    fn content_version(&self, locale: &str) -> ContentVersion;
}

impl VersionLookup for LocaleRegistry {
    fn content_version(&self, locale: &str) -> ContentVersion {
        LocaleRegistry::content_version(self, locale)
    }
}

impl<F> VersionLookup for F
where
    F: Fn(&str) -> ContentVersion,
{
    fn content_version(&self, locale: &str) -> ContentVersion {
        self(locale)
    }
}

/// A catalog section after gating. Entries borrow from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSection<'a> {
    pub title_key: &'a str,
    pub links: Vec<&'a LinkEntry>,
}

impl ResolvedSection<'_> {
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

/// Resolve the catalog for a locale.
pub fn resolve<'a>(
    locale: &str,
    catalog: &'a LinkCatalog,
    versions: &impl VersionLookup,
) -> Vec<ResolvedSection<'a>> {
    let version = versions.content_version(locale);
    debug!("Resolving footer for locale '{}' at content version {}", locale, version);
    resolve_for_version(version, catalog)
}

/// Resolve the catalog for a known content version.
pub fn resolve_for_version(
    version: ContentVersion,
    catalog: &LinkCatalog,
) -> Vec<ResolvedSection<'_>> {
    catalog
        .sections
        .iter()
        .map(|section| ResolvedSection {
            title_key: &section.title_key,
            links: section
                .links
                .iter()
                .filter(|entry| entry.is_active(version))
                .collect(),
        })
        .collect()
}
