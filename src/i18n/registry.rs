//! Locale registry: Single source of truth for all supported site locales.
//!
//! Every locale carries the metadata the core needs to render it: how far its
//! translated content has progressed (its content version), the calendar and
//! month names used for dates, and its table of localized messages. The
//! registry is a `OnceLock` singleton, initialised once and immutable
//! thereafter, so concurrent renders read it without locking.

use crate::i18n::messages;
use crate::version::ContentVersion;
use serde::Serialize;
use std::sync::OnceLock;

/// Calendar system used when displaying a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Calendar {
    Gregorian,
    /// Thai solar calendar: Gregorian months, Buddhist Era years (CE + 543).
    ThaiBuddhist,
}

impl Calendar {
    /// Convert a proleptic Gregorian year into this calendar's year number.
    pub fn display_year(self, gregorian_year: i32) -> i32 {
        match self {
            Calendar::Gregorian => gregorian_year,
            Calendar::ThaiBuddhist => gregorian_year + 543,
        }
    }
}

/// Configuration for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// Locale code as used in site URLs (e.g., "en", "es")
    pub code: &'static str,

    /// English name of the locale (e.g., "English", "Spanish")
    pub name: &'static str,

    /// Native name of the locale (e.g., "English", "Español")
    pub native_name: &'static str,

    /// Whether this is the default locale (exactly one should be true)
    pub is_default: bool,

    /// Whether this locale is served
    pub enabled: bool,

    /// How far this locale's translated content has progressed
    pub content_version: ContentVersion,

    pub calendar: Calendar,

    /// Full month names, January first
    pub months: [&'static str; 12],

    /// Abbreviated month names, January first
    pub months_short: [&'static str; 12],

    /// Pattern for attribution dates.
    /// Placeholders: {day}, {day2}, {month}, {month_short}, {month_num}, {year}
    pub long_date: &'static str,

    /// Pattern for the compact "website last updated" date.
    /// Placeholders: same as `long_date`
    pub short_date: &'static str,

    /// Localized messages keyed by message id
    pub messages: &'static [(&'static str, &'static str)],
}

impl LocaleConfig {
    /// Look up a message in this locale's own table (no fallback).
    pub fn message(&self, key: &str) -> Option<&'static str> {
        self.messages
            .iter()
            .find(|(id, _)| *id == key)
            .map(|(_, text)| *text)
    }
}

/// Global locale registry singleton.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Get a locale configuration by its exact code, enabled or not.
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// Find an enabled locale for a requested code.
    ///
    /// Matching ignores case and treats `_` like `-`. When the full tag is not
    /// registered the primary subtag is tried, so `es-MX` finds `es`.
    pub fn find(&self, requested: &str) -> Option<&LocaleConfig> {
        let normalized = requested.trim().to_ascii_lowercase().replace('_', "-");
        if normalized.is_empty() {
            return None;
        }

        let enabled = |code: &str| {
            self.locales
                .iter()
                .find(|locale| locale.enabled && locale.code.eq_ignore_ascii_case(code))
        };

        enabled(&normalized).or_else(|| {
            normalized
                .split_once('-')
                .and_then(|(primary, _)| enabled(primary))
        })
    }

    /// Find an enabled locale, falling back to the default locale.
    pub fn resolve(&self, requested: &str) -> &LocaleConfig {
        self.find(requested)
            .unwrap_or_else(|| self.default_locale())
    }

    /// Content version for a requested locale.
    ///
    /// Unknown and disabled locales sit at [`ContentVersion::BASELINE`]; this
    /// never falls back to the default locale's version.
    pub fn content_version(&self, requested: &str) -> ContentVersion {
        self.find(requested)
            .map(|locale| locale.content_version)
            .unwrap_or(ContentVersion::BASELINE)
    }

    /// Get all enabled locales, in registry order.
    pub fn list_enabled(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().filter(|locale| locale.enabled).collect()
    }

    /// Get all locales (including disabled ones).
    pub fn list_all(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().collect()
    }

    /// Get the default locale configuration.
    ///
    /// # Panics
    /// Panics if the registry does not define exactly one default locale
    /// (this indicates a configuration error).
    pub fn default_locale(&self) -> &LocaleConfig {
        let defaults: Vec<_> = self
            .locales
            .iter()
            .filter(|locale| locale.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default locale found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default locales found in registry"),
        }
    }
}

/// Default locale configurations.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_default: true,
            enabled: true,
            content_version: ContentVersion::from_thousandths(1_200),
            calendar: Calendar::Gregorian,
            months: [
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ],
            months_short: [
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov",
                "Dec",
            ],
            long_date: "{month} {day}, {year}",
            short_date: "{month_short} {day2}, {year}",
            messages: messages::ENGLISH,
        },
        LocaleConfig {
            code: "es",
            name: "Spanish",
            native_name: "Español",
            is_default: false,
            enabled: true,
            content_version: ContentVersion::from_thousandths(1_100),
            calendar: Calendar::Gregorian,
            months: [
                "enero",
                "febrero",
                "marzo",
                "abril",
                "mayo",
                "junio",
                "julio",
                "agosto",
                "septiembre",
                "octubre",
                "noviembre",
                "diciembre",
            ],
            months_short: [
                "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov",
                "dic",
            ],
            long_date: "{day} de {month} de {year}",
            short_date: "{day2} {month_short} {year}",
            messages: messages::SPANISH,
        },
        LocaleConfig {
            code: "de",
            name: "German",
            native_name: "Deutsch",
            is_default: false,
            enabled: true,
            content_version: ContentVersion::from_thousandths(1_100),
            calendar: Calendar::Gregorian,
            months: [
                "Januar",
                "Februar",
                "März",
                "April",
                "Mai",
                "Juni",
                "Juli",
                "August",
                "September",
                "Oktober",
                "November",
                "Dezember",
            ],
            months_short: [
                "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.",
                "Nov.", "Dez.",
            ],
            long_date: "{day}. {month} {year}",
            short_date: "{day2}. {month_short} {year}",
            messages: messages::GERMAN,
        },
        LocaleConfig {
            code: "ja",
            name: "Japanese",
            native_name: "日本語",
            is_default: false,
            enabled: true,
            content_version: ContentVersion::BASELINE,
            calendar: Calendar::Gregorian,
            months: [
                "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月",
                "12月",
            ],
            months_short: [
                "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月",
                "12月",
            ],
            long_date: "{year}年{month_num}月{day}日",
            short_date: "{year}年{month_num}月{day}日",
            messages: messages::JAPANESE,
        },
        LocaleConfig {
            code: "th",
            name: "Thai",
            native_name: "ไทย",
            is_default: false,
            enabled: true,
            content_version: ContentVersion::BASELINE,
            calendar: Calendar::ThaiBuddhist,
            months: [
                "มกราคม",
                "กุมภาพันธ์",
                "มีนาคม",
                "เมษายน",
                "พฤษภาคม",
                "มิถุนายน",
                "กรกฎาคม",
                "สิงหาคม",
                "กันยายน",
                "ตุลาคม",
                "พฤศจิกายน",
                "ธันวาคม",
            ],
            months_short: [
                "ม.ค.", "ก.พ.", "มี.ค.", "เม.ย.", "พ.ค.", "มิ.ย.", "ก.ค.", "ส.ค.", "ก.ย.", "ต.ค.",
                "พ.ย.", "ธ.ค.",
            ],
            long_date: "{day} {month} {year}",
            short_date: "{day2} {month_short} {year}",
            messages: messages::THAI,
        },
    ]
}
