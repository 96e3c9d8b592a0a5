//! The footer link catalog.
//!
//! A catalog is an ordered list of sections, each an ordered list of link
//! entries. Every entry declares the `[min_version, max_version)` range in
//! which it is shown. Entries in one section that share a slot are label
//! variants of the same conceptual link; their ranges must not overlap, and
//! when a slot has more than one variant they must cover the whole version
//! axis. [`LinkCatalog::check_integrity`] walks the catalog and reports every
//! violation. Resolution never consults it: authoring mistakes surface in
//! tests and startup logs instead of being papered over at render time.

use crate::version::{ContentVersion, VersionRange};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Errors produced when loading a catalog from disk.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read link catalog {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse link catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One candidate navigation/footer link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkEntry {
    /// URL or internal path
    pub target: String,

    /// Message key for the link label
    pub label_key: String,

    /// Conceptual link this entry is a variant of; defaults to `target`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot: Option<String>,

    /// Inclusive lower bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_version: Option<ContentVersion>,

    /// Exclusive upper bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_version: Option<ContentVersion>,
}

impl LinkEntry {
    /// An entry shown for every content version.
    pub fn new(target: impl Into<String>, label_key: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            label_key: label_key.into(),
            slot: None,
            min_version: None,
            max_version: None,
        }
    }

    /// Show this entry from `version` onwards.
    pub fn since(mut self, version: ContentVersion) -> Self {
        self.min_version = Some(version);
        self
    }

    /// Show this entry only below `version`.
    pub fn until(mut self, version: ContentVersion) -> Self {
        self.max_version = Some(version);
        self
    }

    pub fn in_slot(mut self, slot: impl Into<String>) -> Self {
        self.slot = Some(slot.into());
        self
    }

    pub fn slot(&self) -> &str {
        self.slot.as_deref().unwrap_or(&self.target)
    }

    pub fn range(&self) -> VersionRange {
        VersionRange {
            min: self.min_version,
            max: self.max_version,
        }
    }

    pub fn is_active(&self, version: ContentVersion) -> bool {
        self.range().contains(version)
    }
}

/// A titled group of links, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkSection {
    pub title_key: String,
    pub links: Vec<LinkEntry>,
}

impl LinkSection {
    pub fn new(title_key: impl Into<String>, links: Vec<LinkEntry>) -> Self {
        Self {
            title_key: title_key.into(),
            links,
        }
    }
}

/// An icon link rendered next to the footer date; never version-gated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub icon: String,
    pub target: String,
}

/// The complete, immutable footer catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkCatalog {
    pub sections: Vec<LinkSection>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}

static BUILTIN: OnceLock<LinkCatalog> = OnceLock::new();

impl LinkCatalog {
    /// The site's own footer catalog, built once per process.
    pub fn builtin() -> &'static LinkCatalog {
        BUILTIN.get_or_init(default_catalog)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Total number of entries across all sections.
    pub fn entry_count(&self) -> usize {
        self.sections.iter().map(|s| s.links.len()).sum()
    }

    /// Check every slot for overlapping, empty, or gapped version ranges.
    pub fn check_integrity(&self) -> IntegrityReport {
        let mut report = IntegrityReport::default();

        for section in &self.sections {
            let mut slots: Vec<&str> = Vec::new();
            for entry in &section.links {
                if !slots.contains(&entry.slot()) {
                    slots.push(entry.slot());
                }
            }

            for slot in slots {
                let variants: Vec<&LinkEntry> = section
                    .links
                    .iter()
                    .filter(|entry| entry.slot() == slot)
                    .collect();
                check_slot(&section.title_key, slot, &variants, &mut report);
            }
        }

        report
    }
}

fn check_slot(section: &str, slot: &str, variants: &[&LinkEntry], report: &mut IntegrityReport) {
    for entry in variants {
        if entry.range().is_empty() {
            report.issues.push(IntegrityIssue::EmptyRange {
                section: section.to_string(),
                slot: slot.to_string(),
                label_key: entry.label_key.clone(),
            });
        }
    }

    for (i, first) in variants.iter().enumerate() {
        for second in &variants[i + 1..] {
            if first.range().overlaps(&second.range()) {
                report.issues.push(IntegrityIssue::Overlap {
                    section: section.to_string(),
                    slot: slot.to_string(),
                    first: first.label_key.clone(),
                    second: second.label_key.clone(),
                });
            }
        }
    }

    // A single entry may legitimately appear for only part of the axis; a
    // relabeled slot must always show exactly one of its labels.
    let ranges: Vec<VersionRange> = variants
        .iter()
        .map(|entry| entry.range())
        .filter(|range| !range.is_empty())
        .collect();
    if ranges.len() < 2 {
        return;
    }
    for (from, to) in uncovered(ranges) {
        report.issues.push(IntegrityIssue::Gap {
            section: section.to_string(),
            slot: slot.to_string(),
            uncovered: VersionRange { min: from, max: to },
        });
    }
}

/// Regions of the version axis covered by none of `ranges`.
fn uncovered(
    mut ranges: Vec<VersionRange>,
) -> Vec<(Option<ContentVersion>, Option<ContentVersion>)> {
    const NEG_INF: i64 = -1;
    const POS_INF: i64 = i64::MAX;

    // Versions are non-negative, so a lower bound of 0.0 is unbounded
    let lower = |r: &VersionRange| match r.min {
        Some(v) if v.thousandths() > 0 => i64::from(v.thousandths()),
        _ => NEG_INF,
    };
    let upper = |r: &VersionRange| r.max.map_or(POS_INF, |v| i64::from(v.thousandths()));
    let bound = |b: i64| match b {
        NEG_INF | POS_INF => None,
        t => u32::try_from(t).ok().map(ContentVersion::from_thousandths),
    };

    ranges.sort_by_key(|r| lower(r));

    let mut gaps = Vec::new();
    let mut covered_to = NEG_INF;
    for range in &ranges {
        if lower(range) > covered_to {
            gaps.push((bound(covered_to), bound(lower(range))));
        }
        covered_to = covered_to.max(upper(range));
    }
    if covered_to != POS_INF {
        gaps.push((bound(covered_to), None));
    }
    gaps
}

/// One authoring defect found by [`LinkCatalog::check_integrity`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityIssue {
    /// Two variants of one slot are active for a common version.
    Overlap {
        section: String,
        slot: String,
        first: String,
        second: String,
    },
    /// An entry whose range admits no version at all.
    EmptyRange {
        section: String,
        slot: String,
        label_key: String,
    },
    /// Versions for which a relabeled slot shows no label.
    Gap {
        section: String,
        slot: String,
        uncovered: VersionRange,
    },
}

impl fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityIssue::Overlap {
                section,
                slot,
                first,
                second,
            } => write!(
                f,
                "{} / {}: '{}' and '{}' are active for the same versions",
                section, slot, first, second
            ),
            IntegrityIssue::EmptyRange {
                section,
                slot,
                label_key,
            } => write!(
                f,
                "{} / {}: '{}' is never active",
                section, slot, label_key
            ),
            IntegrityIssue::Gap {
                section,
                slot,
                uncovered,
            } => write!(f, "{} / {}: no label for versions {}", section, slot, uncovered),
        }
    }
}

/// Result of a catalog integrity check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrityReport {
    pub issues: Vec<IntegrityIssue>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

const V1_1: ContentVersion = ContentVersion::from_thousandths(1_100);
/// Smallest version strictly newer than 1.1
const AFTER_V1_1: ContentVersion = ContentVersion::from_thousandths(1_101);

/// The footer as authored for the site. Content-version conditions are
/// expressed as half-open ranges: the "newer than 1.0" relabels start at 1.1
/// and "newer than 1.1" starts at 1.101, the next representable version.
fn default_catalog() -> LinkCatalog {
    LinkCatalog {
        sections: vec![
            LinkSection::new(
                "page-individuals",
                vec![
                    LinkEntry::new("/what-is-ethereum/", "page-home-section-beginners-item-two")
                        .until(V1_1),
                    LinkEntry::new("/what-is-ethereum/", "page-home-section-individuals-item-one")
                        .since(V1_1),
                    LinkEntry::new("/use/", "page-use").until(V1_1),
                    LinkEntry::new("/eth/", "page-home-section-individuals-item-four").since(V1_1),
                    LinkEntry::new("/dapps/", "page-home-section-individuals-item-two").since(V1_1),
                    LinkEntry::new("/wallets/", "page-home-section-individuals-item-five")
                        .since(V1_1),
                    LinkEntry::new("/learn/", "page-learn").until(V1_1),
                    LinkEntry::new("/learn/", "page-home-section-individuals-item-three")
                        .since(V1_1),
                    LinkEntry::new("/community/", "page-community").since(AFTER_V1_1),
                ],
            ),
            LinkSection::new(
                "page-developers",
                vec![
                    LinkEntry::new("/build/", "get-started").since(V1_1),
                    LinkEntry::new("https://studio.ethereum.org/", "ethereum-studio"),
                    LinkEntry::new("/developers/", "page-developers").until(V1_1),
                    LinkEntry::new("/developers/", "developer-resources").since(V1_1),
                    LinkEntry::new("/whitepaper/", "footer-ethereum-whitepaper")
                        .since(AFTER_V1_1),
                ],
            ),
            LinkSection::new(
                "footer-ecosystem",
                vec![
                    LinkEntry::new("/foundation/", "ethereum-foundation").since(AFTER_V1_1),
                    LinkEntry::new("https://blog.ethereum.org/", "footer-blog"),
                    LinkEntry::new("https://esp.ethereum.foundation", "footer-esp"),
                    LinkEntry::new("/eips/", "footer-eips").since(AFTER_V1_1),
                    LinkEntry::new("/assets/", "ethereum-brand-assets"),
                    LinkEntry::new("https://devcon.org/", "devcon"),
                ],
            ),
            LinkSection::new(
                "footer-about",
                vec![
                    LinkEntry::new("/en/about/", "footer-about-us"),
                    LinkEntry::new("/en/languages/", "language-support"),
                    LinkEntry::new("/en/privacy-policy/", "privacy-policy"),
                    LinkEntry::new("/en/terms-of-use/", "terms-of-use"),
                    LinkEntry::new("/en/cookie-policy/", "cookie-policy"),
                    LinkEntry::new("mailto:press@ethereum.org", "contact"),
                ],
            ),
        ],
        social_links: vec![
            SocialLink {
                icon: "github".to_string(),
                target: "https://github.com/ethereum".to_string(),
            },
            SocialLink {
                icon: "twitter".to_string(),
                target: "https://twitter.com/ethereum".to_string(),
            },
            SocialLink {
                icon: "youtube".to_string(),
                target: "https://youtube.com/channel/UCNOfzGXD_C9YMYmnefmPH0g".to_string(),
            },
        ],
    }
}
