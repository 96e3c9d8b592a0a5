//! Locale type: a validated reference into the locale registry.

use crate::i18n::{LocaleConfig, LocaleRegistry};
use crate::version::ContentVersion;
use anyhow::{bail, Result};
use std::fmt;

/// A locale that has been validated against the registry.
#[derive(Clone, Copy)]
pub struct Locale {
    config: &'static LocaleConfig,
}

impl Locale {
    /// Create a Locale from a locale code, rejecting unknown or disabled codes.
    ///
    /// Matching follows [`LocaleRegistry::find`], so `es-MX` yields `es`.
    pub fn from_code(code: &str) -> Result<Locale> {
        let registry = LocaleRegistry::get();

        if let Some(config) = registry.find(code) {
            return Ok(Locale { config });
        }
        match registry.get_by_code(code) {
            Some(_) => bail!("Locale '{}' is not enabled", code),
            None => bail!("Unknown locale code: '{}'", code),
        }
    }

    /// Create a Locale from a requested code, falling back to the default.
    ///
    /// Page requests use this: an unsupported locale still renders.
    pub fn resolve(code: &str) -> Locale {
        Locale {
            config: LocaleRegistry::get().resolve(code),
        }
    }

    pub fn default_locale() -> Locale {
        Locale {
            config: LocaleRegistry::get().default_locale(),
        }
    }

    pub fn code(&self) -> &'static str {
        self.config.code
    }

    pub fn config(&self) -> &'static LocaleConfig {
        self.config
    }

    pub fn name(&self) -> &'static str {
        self.config.name
    }

    pub fn native_name(&self) -> &'static str {
        self.config.native_name
    }

    pub fn content_version(&self) -> ContentVersion {
        self.config.content_version
    }

    pub fn is_default(&self) -> bool {
        self.config.is_default
    }
}

impl PartialEq for Locale {
    fn eq(&self, other: &Self) -> bool {
        self.code() == other.code()
    }
}

impl Eq for Locale {}

impl fmt::Debug for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Locale").field("code", &self.code()).finish()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_spanish() {
        let locale = Locale::from_code("es").expect("Should succeed");
        assert_eq!(locale.code(), "es");
        assert_eq!(locale.name(), "Spanish");
        assert_eq!(locale.native_name(), "Español");
    }

    #[test]
    fn test_from_code_region_tag() {
        let locale = Locale::from_code("de-AT").expect("Should succeed");
        assert_eq!(locale.code(), "de");
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Locale::from_code("fr");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Locale::from_code("").is_err());
    }

    // ==================== resolve Tests ====================

    #[test]
    fn test_resolve_unknown_is_default() {
        let locale = Locale::resolve("fr");
        assert_eq!(locale, Locale::default_locale());
        assert!(locale.is_default());
    }

    #[test]
    fn test_resolve_known() {
        assert_eq!(Locale::resolve("th").code(), "th");
        assert_eq!(Locale::resolve("th").content_version(), ContentVersion::BASELINE);
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_locale_equality() {
        assert_eq!(Locale::resolve("es"), Locale::from_code("ES").unwrap());
        assert_ne!(Locale::resolve("es"), Locale::resolve("de"));
    }

    #[test]
    fn test_locale_debug_and_display() {
        let locale = Locale::resolve("ja");
        assert!(format!("{:?}", locale).contains("ja"));
        assert_eq!(locale.to_string(), "ja");
    }
}
