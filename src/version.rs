//! Content versions and the half-open ranges that gate links on them.
//!
//! A content version records how far a locale's translated pages have
//! migrated through the site's structural revisions. Values compare as exact
//! decimals: they are stored as thousandths so `1.1` and `1.10` are the same
//! version and no comparison ever goes through floating point.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Errors produced when parsing a content version from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionParseError {
    #[error("content version is empty")]
    Empty,

    #[error("content version '{0}' is not a non-negative decimal number")]
    Invalid(String),

    #[error("content version '{0}' has more than three fractional digits")]
    TooPrecise(String),

    #[error("content version '{0}' is out of range")]
    Overflow(String),
}

/// A totally ordered content maturity marker (e.g. `1.0`, `1.1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContentVersion {
    thousandths: u32,
}

impl ContentVersion {
    /// The lowest version; every locale without a recorded value sits here.
    pub const BASELINE: ContentVersion = ContentVersion::from_thousandths(1_000);

    /// Build a version from its value in thousandths (`1_100` is `1.1`).
    pub const fn from_thousandths(thousandths: u32) -> Self {
        Self { thousandths }
    }

    /// The version's value in thousandths.
    pub const fn thousandths(self) -> u32 {
        self.thousandths
    }
}

impl Default for ContentVersion {
    fn default() -> Self {
        Self::BASELINE
    }
}

impl FromStr for ContentVersion {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(VersionParseError::Empty);
        }

        let (whole, fraction) = match s.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (s, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if whole.is_empty() || !all_digits(whole) || !all_digits(fraction) {
            return Err(VersionParseError::Invalid(s.to_string()));
        }
        if s.ends_with('.') {
            return Err(VersionParseError::Invalid(s.to_string()));
        }
        if fraction.len() > 3 {
            return Err(VersionParseError::TooPrecise(s.to_string()));
        }

        let whole: u32 = whole
            .parse()
            .map_err(|_| VersionParseError::Overflow(s.to_string()))?;
        // Right-pad so "1" in "1.1" means one hundred thousandths
        let fraction: u32 = if fraction.is_empty() {
            0
        } else {
            format!("{:0<3}", fraction)
                .parse()
                .map_err(|_| VersionParseError::Invalid(s.to_string()))?
        };

        whole
            .checked_mul(1_000)
            .and_then(|w| w.checked_add(fraction))
            .map(ContentVersion::from_thousandths)
            .ok_or_else(|| VersionParseError::Overflow(s.to_string()))
    }
}

impl fmt::Display for ContentVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.thousandths / 1_000;
        let fraction = self.thousandths % 1_000;
        if fraction == 0 {
            return write!(f, "{}.0", whole);
        }
        let digits = format!("{:03}", fraction);
        write!(f, "{}.{}", whole, digits.trim_end_matches('0'))
    }
}

impl Serialize for ContentVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct ContentVersionVisitor;

impl Visitor<'_> for ContentVersionVisitor {
    type Value = ContentVersion;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative decimal content version such as \"1.1\" or 1.1")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        v.checked_mul(1_000)
            .and_then(|t| u32::try_from(t).ok())
            .map(ContentVersion::from_thousandths)
            .ok_or_else(|| E::custom(format!("content version {} is out of range", v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        let v = u64::try_from(v)
            .map_err(|_| E::custom(format!("content version {} is negative", v)))?;
        self.visit_u64(v)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        // Shortest round-trip text: `1.1` reads as "1.1", `1.0004` as "1.0004"
        self.visit_str(&v.to_string())
    }
}

impl<'de> Deserialize<'de> for ContentVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ContentVersionVisitor)
    }
}

/// A half-open `[min, max)` range of content versions.
///
/// An absent bound is unbounded on that side. The upper bound is exclusive so
/// that one label variant can end exactly where the next one begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VersionRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<ContentVersion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<ContentVersion>,
}

impl VersionRange {
    /// Valid for every version.
    pub const fn unbounded() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    /// Valid from `min` onwards.
    pub const fn starting_at(min: ContentVersion) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Valid for every version strictly below `max`.
    pub const fn before(max: ContentVersion) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    pub const fn between(min: ContentVersion, max: ContentVersion) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn contains(&self, version: ContentVersion) -> bool {
        self.min.map_or(true, |min| min <= version) && self.max.map_or(true, |max| version < max)
    }

    /// True when no version can satisfy the range.
    pub fn is_empty(&self) -> bool {
        matches!((self.min, self.max), (Some(min), Some(max)) if min >= max)
    }

    /// True when at least one version lies in both ranges.
    pub fn overlaps(&self, other: &VersionRange) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        // `None` sorts below `Some`, which is exactly "unbounded below"
        let lower = self.min.max(other.min);
        let upper = match (self.max, other.max) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(a), None) | (None, Some(a)) => Some(a),
            (None, None) => None,
        };

        match (lower, upper) {
            (Some(lower), Some(upper)) => lower < upper,
            _ => true,
        }
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.min {
            Some(min) => write!(f, "[{}, ", min)?,
            None => f.write_str("(-inf, ")?,
        }
        match self.max {
            Some(max) => write!(f, "{})", max),
            None => f.write_str("+inf)"),
        }
    }
}
