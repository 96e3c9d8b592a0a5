//! Property and scenario tests for version gating and contributor resolution.

use chrono::{DateTime, TimeZone, Utc};
use locale_site::i18n::LocaleRegistry;
use locale_site::{
    full_roster, last_contributor, resolve, resolve_for_version, AttributionView, ContentVersion,
    ContributorRecord, LinkCatalog, LinkEntry, LinkSection, VersionRange,
};
use proptest::prelude::*;
use std::collections::HashMap;

fn version(thousandths: u32) -> ContentVersion {
    ContentVersion::from_thousandths(thousandths)
}

fn record(handle: &str, minutes: i64) -> ContributorRecord {
    ContributorRecord {
        handle: handle.to_string(),
        avatar_ref: format!("https://avatars.githubusercontent.com/{}", handle),
        profile_ref: format!("https://github.com/{}", handle),
        edited_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
            + chrono::Duration::minutes(minutes),
    }
}

fn at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, day, 12, 0, 0).unwrap()
}

// ==================== Gate Properties ====================

proptest! {
    #[test]
    fn entry_is_shown_iff_version_in_range(
        v in 0u32..5000,
        min in proptest::option::of(0u32..5000),
        max in proptest::option::of(0u32..5000),
    ) {
        let mut entry = LinkEntry::new("/learn/", "page-learn");
        if let Some(min) = min {
            entry = entry.since(version(min));
        }
        if let Some(max) = max {
            entry = entry.until(version(max));
        }
        let catalog = LinkCatalog {
            sections: vec![LinkSection::new("page-individuals", vec![entry])],
            social_links: vec![],
        };

        let shown = !resolve_for_version(version(v), &catalog)[0].links.is_empty();
        let expected = min.map_or(true, |m| v >= m) && max.map_or(true, |m| v < m);
        prop_assert_eq!(shown, expected);
        let range = VersionRange {
            min: min.map(version),
            max: max.map(version),
        };
        prop_assert_eq!(shown, range.contains(version(v)));
    }

    #[test]
    fn builtin_catalog_shows_one_variant_per_slot(v in 0u32..5000) {
        let catalog = LinkCatalog::builtin();
        for section in resolve_for_version(version(v), catalog) {
            let mut slots: HashMap<&str, usize> = HashMap::new();
            for entry in &section.links {
                *slots.entry(entry.slot()).or_default() += 1;
            }
            for (slot, count) in slots {
                prop_assert_eq!(
                    count,
                    1,
                    "slot {} in {} at {}",
                    slot,
                    section.title_key,
                    version(v)
                );
            }
        }
    }

    #[test]
    fn resolution_keeps_section_shape_and_order(v in 0u32..5000) {
        let catalog = LinkCatalog::builtin();
        let resolved = resolve_for_version(version(v), catalog);

        prop_assert_eq!(resolved.len(), catalog.sections.len());
        for (section, original) in resolved.iter().zip(&catalog.sections) {
            prop_assert_eq!(section.title_key, original.title_key.as_str());
            // Survivors appear in catalog order
            let positions: Vec<usize> = section
                .links
                .iter()
                .map(|l| original.links.iter().position(|o| std::ptr::eq(o, *l)).unwrap())
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn full_roster_is_the_input_unchanged(
        handles in proptest::collection::vec("[a-z]{1,8}", 0..20),
    ) {
        let records: Vec<_> = handles
            .iter()
            .enumerate()
            .map(|(i, h)| record(h, -(i as i64)))
            .collect();

        let roster = full_roster(&records);
        prop_assert_eq!(roster, records.as_slice());
        prop_assert_eq!(last_contributor(&records), records.first());
    }
}

// ==================== Scenarios ====================

#[test]
fn relabel_follows_locale_content_version() {
    let catalog = LinkCatalog {
        sections: vec![LinkSection::new(
            "page-individuals",
            vec![
                LinkEntry::new("/learn/", "page-learn").until(version(1100)),
                LinkEntry::new("/learn/", "page-home-section-individuals-item-three")
                    .since(version(1100)),
            ],
        )],
        social_links: vec![],
    };
    let versions = |locale: &str| match locale {
        "es" => version(1100),
        "ja" => version(1000),
        _ => ContentVersion::BASELINE,
    };

    let labels = |locale: &str| -> Vec<String> {
        resolve(locale, &catalog, &versions)[0]
            .links
            .iter()
            .map(|l| l.label_key.clone())
            .collect()
    };

    assert_eq!(labels("es"), vec!["page-home-section-individuals-item-three"]);
    assert_eq!(labels("ja"), vec!["page-learn"]);
    assert_eq!(labels("xx"), vec!["page-learn"]);
}

#[test]
fn attribution_for_edited_file() {
    let contributors = vec![record("alice", 300), record("bob", 200), record("alice", 100)];
    let view = AttributionView::build("en", &contributors, at(4), at(18), LocaleRegistry::get());

    assert_eq!(view.last_contributor.handle, "alice");
    assert_eq!(view.last_contributor.profile_href, "https://github.com/alice");
    assert_eq!(view.last_edited, "March 4, 2026");
    // Repeat contributors are listed as often as they appear
    let handles: Vec<_> = view.roster.iter().map(|r| r.handle.as_str()).collect();
    assert_eq!(handles, vec!["alice", "bob", "alice"]);
}

#[test]
fn attribution_for_file_without_contributors() {
    let view = AttributionView::build("th", &[], at(4), at(18), LocaleRegistry::get());

    assert_eq!(view.locale, "th");
    assert_eq!(view.last_contributor.handle, "");
    assert_eq!(view.last_contributor.avatar_ref, "");
    assert_eq!(view.last_contributor.profile_href, "");
    assert!(view.roster.is_empty());
    assert_eq!(view.last_edited, "4 มีนาคม 2569");
}
