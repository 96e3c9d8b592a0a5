//! Locale-aware date rendering for attribution and "last updated" lines.
//!
//! Dates are rendered from the locale's own month names, field order and
//! calendar. Rendering always happens in UTC so the same `(locale, timestamp)`
//! pair produces the same text on every host.

use crate::i18n::{LocaleConfig, LocaleRegistry};
use chrono::{DateTime, Datelike, Utc};

/// Render a timestamp for "last edit" attribution (full month name).
pub fn format_attribution_date(locale: &str, timestamp: DateTime<Utc>) -> String {
    let config = LocaleRegistry::get().resolve(locale);
    render(config, config.long_date, timestamp)
}

/// Render a timestamp in the compact footer style (abbreviated month,
/// two-digit day).
pub fn format_build_date(locale: &str, timestamp: DateTime<Utc>) -> String {
    let config = LocaleRegistry::get().resolve(locale);
    render(config, config.short_date, timestamp)
}

fn render(config: &LocaleConfig, pattern: &str, timestamp: DateTime<Utc>) -> String {
    let month_index = timestamp.month0() as usize;
    let year = config.calendar.display_year(timestamp.year());

    pattern
        .replace("{month_short}", config.months_short[month_index])
        .replace("{month_num}", &timestamp.month().to_string())
        .replace("{month}", config.months[month_index])
        .replace("{day2}", &format!("{:02}", timestamp.day()))
        .replace("{day}", &timestamp.day().to_string())
        .replace("{year}", &year.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 8, 14, 30, 0).unwrap()
    }

    // ==================== Attribution Date Tests ====================

    #[test]
    fn test_attribution_date_per_locale() {
        let ts = timestamp();
        assert_eq!(format_attribution_date("en", ts), "October 8, 2026");
        assert_eq!(format_attribution_date("es", ts), "8 de octubre de 2026");
        assert_eq!(format_attribution_date("de", ts), "8. Oktober 2026");
        assert_eq!(format_attribution_date("ja", ts), "2026年10月8日");
    }

    #[test]
    fn test_attribution_date_thai_uses_buddhist_era() {
        assert_eq!(format_attribution_date("th", timestamp()), "8 ตุลาคม 2569");
    }

    #[test]
    fn test_attribution_date_unknown_locale_uses_default() {
        assert_eq!(format_attribution_date("fr", timestamp()), "October 8, 2026");
    }

    #[test]
    fn test_attribution_date_is_deterministic() {
        let ts = timestamp();
        for code in ["en", "es", "de", "ja", "th", "xx"] {
            assert_eq!(format_attribution_date(code, ts), format_attribution_date(code, ts));
        }
    }

    #[test]
    fn test_attribution_date_differs_across_locales() {
        let ts = timestamp();
        assert_ne!(format_attribution_date("en", ts), format_attribution_date("es", ts));
        assert_ne!(format_attribution_date("de", ts), format_attribution_date("ja", ts));
    }

    #[test]
    fn test_attribution_date_uses_utc_day() {
        // 23:30 at UTC-5 is already the next day in UTC
        let ts = DateTime::parse_from_rfc3339("2026-01-31T23:30:00-05:00")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_attribution_date("en", ts), "February 1, 2026");
    }

    // ==================== Build Date Tests ====================

    #[test]
    fn test_build_date_per_locale() {
        let ts = timestamp();
        assert_eq!(format_build_date("en", ts), "Oct 08, 2026");
        assert_eq!(format_build_date("es", ts), "08 oct 2026");
        assert_eq!(format_build_date("de", ts), "08. Okt. 2026");
        assert_eq!(format_build_date("th", ts), "08 ต.ค. 2569");
    }

    #[test]
    fn test_build_date_every_month_renders() {
        for month in 1..=12 {
            let ts = Utc.with_ymd_and_hms(2024, month, 15, 0, 0, 0).unwrap();
            for locale in LocaleRegistry::get().list_all() {
                let text = format_build_date(locale.code, ts);
                assert!(!text.contains('{'), "unfilled placeholder in {}", text);
            }
        }
    }
}
