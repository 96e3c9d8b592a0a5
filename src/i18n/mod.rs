//! Internationalization (i18n) module for multi-locale rendering.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for supported locales, their content
//!   versions, calendars and month names
//! - `locale`: Type-safe `Locale` validated against the registry
//! - `messages`: Static message tables and the key → string lookup
//! - `dates`: Locale-aware date rendering
//!
//! # Example
//!
//! ```rust,ignore
//! use locale_site::i18n::{format_attribution_date, Locale, LocaleRegistry, MessageLookup};
//!
//! let spanish = Locale::from_code("es")?;
//! let label = LocaleRegistry::get().message("last-edit", spanish.code());
//! let when = format_attribution_date(spanish.code(), chrono::Utc::now());
//! ```

mod dates;
mod locale;
mod messages;
mod registry;

pub use dates::{format_attribution_date, format_build_date};
pub use locale::Locale;
pub use messages::MessageLookup;
pub use registry::{Calendar, LocaleConfig, LocaleRegistry};
