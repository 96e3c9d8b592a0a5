//! Contributor resolution for per-file attribution.
//!
//! The data layer hands over a file's contributor records already ordered by
//! recency (newest first). The compact view shows the first record and the
//! expanded view shows the full list; both read the same slice so the two
//! views cannot drift apart. Nothing here sorts, deduplicates, or fetches.

use crate::i18n::{format_attribution_date, Locale, MessageLookup};
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const PROFILE_BASE_URL: &str = "https://github.com/";

/// One attributed edit event for a content file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributorRecord {
    pub handle: String,
    pub avatar_ref: String,
    pub profile_ref: String,
    pub edited_at: DateTime<Utc>,
}

impl ContributorRecord {
    /// Placeholder shown as the last contributor of a file with no history:
    /// empty identity fields, stamped with `now`.
    pub fn placeholder(now: DateTime<Utc>) -> Self {
        Self {
            handle: String::new(),
            avatar_ref: String::new(),
            profile_ref: String::new(),
            edited_at: now,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.handle.is_empty()
    }
}

/// The most recent contributor, if the file has any.
pub fn last_contributor(contributors: &[ContributorRecord]) -> Option<&ContributorRecord> {
    contributors.first()
}

/// Every contributor record in the order supplied, duplicates included.
pub fn full_roster(contributors: &[ContributorRecord]) -> &[ContributorRecord] {
    contributors
}

static HANDLE_REGEX: OnceLock<Regex> = OnceLock::new();

/// Profile link for a contributor handle.
///
/// Returns `None` for an empty or malformed handle so callers render an
/// inert link rather than pointing at an arbitrary URL.
pub fn profile_url(handle: &str) -> Option<String> {
    let regex = HANDLE_REGEX.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9-]{0,37}[A-Za-z0-9])?(?:\[bot\])?$").unwrap()
    });

    if regex.is_match(handle) {
        Some(format!("{}{}", PROFILE_BASE_URL, handle))
    } else {
        None
    }
}

/// One line of the expanded contributor list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub handle: String,
    pub avatar_ref: String,
    /// Empty when the handle cannot form a profile link
    pub profile_href: String,
}

impl From<&ContributorRecord> for RosterEntry {
    fn from(record: &ContributorRecord) -> Self {
        Self {
            handle: record.handle.clone(),
            avatar_ref: record.avatar_ref.clone(),
            profile_href: profile_url(&record.handle).unwrap_or_default(),
        }
    }
}

/// Everything the attribution block needs to render in either state.
///
/// Whether the roster is currently expanded is UI state and lives with the
/// caller; this view carries data for both states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributionView {
    /// Locale the text was rendered in (after fallback)
    pub locale: String,
    pub last_edit_label: String,
    pub last_contributor: RosterEntry,
    pub last_edited_at: DateTime<Utc>,
    /// `last_edited_at` rendered for the locale
    pub last_edited: String,
    pub see_contributors_label: String,
    pub roster_title: String,
    pub roster_thanks: String,
    pub roster: Vec<RosterEntry>,
}

impl AttributionView {
    /// Build the view for a file.
    ///
    /// `last_edited_at` is the file's own modification time, which can be
    /// newer than any listed record. `now` stamps the placeholder used when
    /// the file has no contributors.
    pub fn build(
        locale: &str,
        contributors: &[ContributorRecord],
        last_edited_at: DateTime<Utc>,
        now: DateTime<Utc>,
        messages: &impl MessageLookup,
    ) -> Self {
        let locale = Locale::resolve(locale);
        let code = locale.code();

        let placeholder;
        let last = match last_contributor(contributors) {
            Some(record) => record,
            None => {
                placeholder = ContributorRecord::placeholder(now);
                &placeholder
            }
        };

        Self {
            locale: code.to_string(),
            last_edit_label: messages.message("last-edit", code).into_owned(),
            last_contributor: RosterEntry::from(last),
            last_edited_at,
            last_edited: format_attribution_date(code, last_edited_at),
            see_contributors_label: messages.message("see-contributors", code).into_owned(),
            roster_title: messages.message("contributors", code).into_owned(),
            roster_thanks: messages.message("contributors-thanks", code).into_owned(),
            roster: full_roster(contributors).iter().map(RosterEntry::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocaleRegistry;
    use chrono::TimeZone;

    fn record(handle: &str, day: u32) -> ContributorRecord {
        ContributorRecord {
            handle: handle.to_string(),
            avatar_ref: format!("https://avatars.githubusercontent.com/{}", handle),
            profile_ref: format!("https://github.com/{}", handle),
            edited_at: Utc.with_ymd_and_hms(2026, 3, day, 12, 0, 0).unwrap(),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 9, 0, 0).unwrap()
    }

    // ==================== last_contributor Tests ====================

    #[test]
    fn test_last_contributor_is_first_record() {
        let contributors = vec![record("alice", 2), record("bob", 1)];
        assert_eq!(last_contributor(&contributors), Some(&contributors[0]));
    }

    #[test]
    fn test_last_contributor_does_not_sort() {
        // Caller order wins even when it disagrees with the timestamps
        let contributors = vec![record("bob", 1), record("alice", 2)];
        assert_eq!(last_contributor(&contributors).unwrap().handle, "bob");
    }

    #[test]
    fn test_last_contributor_empty() {
        assert_eq!(last_contributor(&[]), None);
    }

    #[test]
    fn test_placeholder() {
        let placeholder = ContributorRecord::placeholder(now());
        assert!(placeholder.is_placeholder());
        assert_eq!(placeholder.handle, "");
        assert_eq!(placeholder.avatar_ref, "");
        assert_eq!(placeholder.profile_ref, "");
        assert_eq!(placeholder.edited_at, now());
    }

    // ==================== full_roster Tests ====================

    #[test]
    fn test_full_roster_keeps_order_and_duplicates() {
        let contributors = vec![record("alice", 3), record("bob", 2), record("alice", 1)];
        let roster = full_roster(&contributors);
        assert_eq!(roster.len(), 3);
        assert_eq!(roster, contributors.as_slice());
    }

    // ==================== profile_url Tests ====================

    #[test]
    fn test_profile_url_valid_handles() {
        assert_eq!(
            profile_url("alice").as_deref(),
            Some("https://github.com/alice")
        );
        assert!(profile_url("a-b-c").is_some());
        assert!(profile_url("x").is_some());
        assert!(profile_url("dependabot[bot]").is_some());
    }

    #[test]
    fn test_profile_url_rejects_empty_and_malformed() {
        assert_eq!(profile_url(""), None);
        assert_eq!(profile_url("-alice"), None);
        assert_eq!(profile_url("alice-"), None);
        assert_eq!(profile_url("alice/../../evil"), None);
        assert_eq!(profile_url("has space"), None);
        assert_eq!(profile_url(&"a".repeat(40)), None);
    }

    // ==================== AttributionView Tests ====================

    #[test]
    fn test_view_with_contributors() {
        let contributors = vec![record("alice", 2), record("bob", 1)];
        let last_edit = Utc.with_ymd_and_hms(2026, 3, 4, 8, 0, 0).unwrap();
        let view = AttributionView::build(
            "en",
            &contributors,
            last_edit,
            now(),
            LocaleRegistry::get(),
        );

        assert_eq!(view.locale, "en");
        assert_eq!(view.last_edit_label, "Last edit");
        assert_eq!(view.last_contributor.handle, "alice");
        assert_eq!(view.last_contributor.profile_href, "https://github.com/alice");
        assert_eq!(view.last_edited, "March 4, 2026");
        assert_eq!(view.last_edited_at, last_edit);
        let handles: Vec<_> = view.roster.iter().map(|r| r.handle.as_str()).collect();
        assert_eq!(handles, vec!["alice", "bob"]);
    }

    #[test]
    fn test_view_without_contributors_uses_placeholder() {
        let last_edit = Utc.with_ymd_and_hms(2026, 3, 4, 8, 0, 0).unwrap();
        let view = AttributionView::build("es", &[], last_edit, now(), LocaleRegistry::get());

        assert_eq!(view.last_contributor.handle, "");
        assert_eq!(view.last_contributor.profile_href, "");
        assert_eq!(view.last_contributor.avatar_ref, "");
        assert!(view.roster.is_empty());
        assert_eq!(view.last_edited, "4 de marzo de 2026");
        assert_eq!(view.last_edit_label, "Última edición");
    }

    #[test]
    fn test_view_summary_and_roster_agree() {
        let contributors = vec![record("carol", 5), record("alice", 4), record("carol", 3)];
        let view = AttributionView::build("de", &contributors, now(), now(), LocaleRegistry::get());

        assert_eq!(view.roster.len(), 3);
        assert_eq!(view.roster[0], view.last_contributor);
        assert_eq!(view.roster[2].handle, "carol");
    }

    #[test]
    fn test_view_unknown_locale_falls_back() {
        let view = AttributionView::build("fr", &[], now(), now(), LocaleRegistry::get());
        assert_eq!(view.locale, "en");
        assert_eq!(view.roster_title, "Contributors");
    }

    #[test]
    fn test_view_partial_translation_falls_back_per_key() {
        let view = AttributionView::build("th", &[], now(), now(), LocaleRegistry::get());
        assert_eq!(view.roster_title, "ผู้มีส่วนร่วม");
        assert_eq!(view.see_contributors_label, "See contributors");
    }

    #[test]
    fn test_view_serializes_camel_case() {
        let view = AttributionView::build(
            "en",
            &[record("alice", 1)],
            now(),
            now(),
            LocaleRegistry::get(),
        );
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["lastContributor"]["handle"], "alice");
        assert_eq!(json["lastEditLabel"], "Last edit");
        assert!(json["roster"].is_array());
    }

    #[test]
    fn test_record_deserializes_from_camel_case() {
        let json = r#"{
            "handle": "alice",
            "avatarRef": "https://avatars.githubusercontent.com/u/1",
            "profileRef": "https://github.com/alice",
            "editedAt": "2026-03-02T12:00:00Z"
        }"#;
        let parsed: ContributorRecord = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.handle, "alice");
        assert_eq!(parsed.edited_at, Utc.with_ymd_and_hms(2026, 3, 2, 12, 0, 0).unwrap());
    }
}
