//! Preview binary - prints the footer a locale would see, without a server
//!
//! Usage:
//!   cargo run --bin preview                          # Default locale
//!   cargo run --bin preview -- --locale es           # Spanish footer
//!   cargo run --bin preview -- --locale es --version 1.2
//!                                                    # Spanish text, links gated at 1.2
//!   cargo run --bin preview -- --check               # Catalog integrity report only
//!
//! Optional environment variables:
//! - CATALOG_FILE (defaults to the built-in catalog)
//! - SITE_BUILD_TIME (defaults to now)

use anyhow::{bail, Context, Result};
use locale_site::config::Config;
use locale_site::i18n::{format_build_date, Locale, LocaleRegistry, MessageLookup};
use locale_site::{resolve, resolve_for_version, ContentVersion};
use tracing::info;

struct PreviewArgs {
    locale: Option<String>,
    version: Option<ContentVersion>,
    check: bool,
}

impl PreviewArgs {
    fn parse(args: impl Iterator<Item = String>) -> Result<Self> {
        let mut parsed = PreviewArgs {
            locale: None,
            version: None,
            check: false,
        };

        let mut args = args;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--locale" => {
                    parsed.locale = Some(args.next().context("--locale needs a value")?);
                }
                "--version" => {
                    let value = args.next().context("--version needs a value")?;
                    parsed.version = Some(
                        value
                            .parse()
                            .with_context(|| format!("Invalid --version '{}'", value))?,
                    );
                }
                "--check" => parsed.check = true,
                other => bail!("Unknown argument: {}", other),
            }
        }

        Ok(parsed)
    }
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("preview=info".parse()?),
        )
        .init();

    let args = PreviewArgs::parse(std::env::args().skip(1))?;
    let config = Config::from_env()?;
    let catalog = config.load_catalog()?;

    let report = catalog.check_integrity();
    if args.check {
        for issue in &report.issues {
            println!("✗ {}", issue);
        }
        if !report.is_clean() {
            bail!("Catalog has {} integrity issue(s)", report.issues.len());
        }
        println!("✓ Catalog is clean ({} links)", catalog.entry_count());
        return Ok(());
    }

    let registry = LocaleRegistry::get();
    let requested = args
        .locale
        .unwrap_or_else(|| Locale::default_locale().code().to_string());
    let locale = Locale::resolve(&requested);

    let (version, sections) = match args.version {
        Some(version) => (version, resolve_for_version(version, &catalog)),
        None => (
            registry.content_version(&requested),
            resolve(&requested, &catalog, registry),
        ),
    };
    info!(
        "Previewing footer for '{}' (text: {}, content version {})",
        requested, locale, version
    );

    println!("\n{}", "=".repeat(60));
    println!(
        "{}: {}",
        registry.message("website-last-updated", locale.code()),
        format_build_date(locale.code(), config.site_build_time)
    );
    println!("{}", "=".repeat(60));

    for section in sections {
        println!("\n## {}", registry.message(section.title_key, locale.code()));
        if section.is_empty() {
            println!("   (no links at this version)");
        }
        for entry in section.links {
            println!(
                "   - {}  →  {}",
                registry.message(&entry.label_key, locale.code()),
                entry.target
            );
        }
    }

    for issue in &report.issues {
        println!("\n⚠ {}", issue);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<PreviewArgs> {
        PreviewArgs::parse(args.iter().map(|a| a.to_string()))
    }

    #[test]
    fn test_parse_defaults() {
        let args = parse(&[]).unwrap();
        assert!(args.locale.is_none());
        assert!(args.version.is_none());
        assert!(!args.check);
    }

    #[test]
    fn test_parse_all_flags() {
        let args = parse(&["--locale", "es", "--version", "1.2", "--check"]).unwrap();
        assert_eq!(args.locale.as_deref(), Some("es"));
        assert_eq!(args.version, Some("1.2".parse().unwrap()));
        assert!(args.check);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse(&["--locale"]).is_err());
        assert!(parse(&["--version", "abc"]).is_err());
        assert!(parse(&["--verbose"]).is_err());
    }
}
