//! Localized message tables and the key → string lookup.
//!
//! The gate and the resolver only ever emit message keys; turning a key into
//! display text happens here. A key missing from a locale's table falls back
//! to the default locale's text, and a key missing everywhere renders as the
//! key itself so a page never shows an empty label.

use crate::i18n::LocaleRegistry;
use std::borrow::Cow;

/// Resolves a message key to display text for a locale.
pub trait MessageLookup {
    fn message<'a>(&'a self, key: &'a str, locale: &str) -> Cow<'a, str>;
}

impl MessageLookup for LocaleRegistry {
    fn message<'a>(&'a self, key: &'a str, locale: &str) -> Cow<'a, str> {
        if let Some(text) = self.find(locale).and_then(|config| config.message(key)) {
            return Cow::Borrowed(text);
        }
        match self.default_locale().message(key) {
            Some(text) => Cow::Borrowed(text),
            None => {
                tracing::debug!("No message for key '{}' in any locale", key);
                Cow::Borrowed(key)
            }
        }
    }
}

// ==================== English Messages ====================

/// English messages (default locale, complete)
pub const ENGLISH: &[(&str, &str)] = &[
    // Footer sections
    ("page-individuals", "Individuals"),
    ("page-developers", "Developers"),
    ("footer-ecosystem", "Ecosystem"),
    ("footer-about", "About ethereum.org"),
    // Individuals
    ("page-home-section-beginners-item-two", "Intro to Ethereum"),
    ("page-home-section-individuals-item-one", "What is Ethereum?"),
    ("page-use", "Use Ethereum"),
    ("page-home-section-individuals-item-four", "What is ether (ETH)?"),
    ("page-home-section-individuals-item-two", "Decentralized applications (dapps)"),
    ("page-home-section-individuals-item-five", "Ethereum wallets"),
    ("page-learn", "Learn"),
    ("page-home-section-individuals-item-three", "Learning hub"),
    ("page-community", "Community hub"),
    // Developers
    ("get-started", "Get started"),
    ("ethereum-studio", "Ethereum Studio"),
    ("developer-resources", "Developer resources"),
    ("footer-ethereum-whitepaper", "Ethereum whitepaper"),
    // Ecosystem
    ("ethereum-foundation", "Ethereum Foundation"),
    ("footer-blog", "Ethereum Foundation Blog"),
    ("footer-esp", "Ecosystem Support Program"),
    ("footer-eips", "Ethereum Improvement Proposals"),
    ("ethereum-brand-assets", "Ethereum brand assets"),
    ("devcon", "Devcon"),
    // About
    ("footer-about-us", "About us"),
    ("language-support", "Language support"),
    ("privacy-policy", "Privacy policy"),
    ("terms-of-use", "Terms of use"),
    ("cookie-policy", "Cookie policy"),
    ("contact", "Contact"),
    // Attribution
    ("website-last-updated", "Website last updated"),
    ("last-edit", "Last edit"),
    ("contributors", "Contributors"),
    (
        "contributors-thanks",
        "Everyone who has contributed to this page – thank you!",
    ),
    ("see-contributors", "See contributors"),
];

// ==================== Spanish Messages ====================

pub const SPANISH: &[(&str, &str)] = &[
    ("page-individuals", "Particulares"),
    ("page-developers", "Desarrolladores"),
    ("footer-ecosystem", "Ecosistema"),
    ("footer-about", "Acerca de ethereum.org"),
    ("page-home-section-beginners-item-two", "Introducción a Ethereum"),
    ("page-home-section-individuals-item-one", "¿Qué es Ethereum?"),
    ("page-use", "Usar Ethereum"),
    ("page-home-section-individuals-item-four", "¿Qué es el ether (ETH)?"),
    (
        "page-home-section-individuals-item-two",
        "Aplicaciones descentralizadas (dapps)",
    ),
    ("page-home-section-individuals-item-five", "Carteras de Ethereum"),
    ("page-learn", "Aprender"),
    ("page-home-section-individuals-item-three", "Centro de aprendizaje"),
    ("page-community", "Centro comunitario"),
    ("get-started", "Empezar"),
    ("developer-resources", "Recursos para desarrolladores"),
    ("footer-ethereum-whitepaper", "Documento técnico de Ethereum"),
    ("ethereum-foundation", "Fundación Ethereum"),
    ("footer-blog", "Blog de la Fundación Ethereum"),
    ("footer-esp", "Programa de apoyo al ecosistema"),
    ("footer-eips", "Propuestas de mejora de Ethereum"),
    ("ethereum-brand-assets", "Recursos de marca de Ethereum"),
    ("footer-about-us", "Sobre nosotros"),
    ("language-support", "Idiomas disponibles"),
    ("privacy-policy", "Política de privacidad"),
    ("terms-of-use", "Términos de uso"),
    ("cookie-policy", "Política de cookies"),
    ("contact", "Contacto"),
    ("website-last-updated", "Última actualización del sitio web"),
    ("last-edit", "Última edición"),
    ("contributors", "Colaboradores"),
    (
        "contributors-thanks",
        "A todos los que han contribuido a esta página, ¡gracias!",
    ),
    ("see-contributors", "Ver colaboradores"),
];

// ==================== German Messages ====================

pub const GERMAN: &[(&str, &str)] = &[
    ("page-individuals", "Einzelpersonen"),
    ("page-developers", "Entwickler"),
    ("footer-ecosystem", "Ökosystem"),
    ("footer-about", "Über ethereum.org"),
    ("page-home-section-individuals-item-one", "Was ist Ethereum?"),
    ("page-learn", "Lernen"),
    ("page-home-section-individuals-item-three", "Lernportal"),
    ("get-started", "Erste Schritte"),
    ("developer-resources", "Ressourcen für Entwickler"),
    ("footer-about-us", "Über uns"),
    ("privacy-policy", "Datenschutzerklärung"),
    ("terms-of-use", "Nutzungsbedingungen"),
    ("contact", "Kontakt"),
    ("website-last-updated", "Website zuletzt aktualisiert"),
    ("last-edit", "Letzte Bearbeitung"),
    ("contributors", "Mitwirkende"),
    ("see-contributors", "Mitwirkende anzeigen"),
];

// ==================== Japanese Messages ====================

pub const JAPANESE: &[(&str, &str)] = &[
    ("page-individuals", "個人向け"),
    ("page-developers", "開発者"),
    ("page-learn", "学ぶ"),
    ("page-use", "イーサリアムを使う"),
    ("contact", "お問い合わせ"),
    ("website-last-updated", "ウェブサイトの最終更新日"),
    ("last-edit", "最終編集"),
    ("contributors", "貢献者"),
    ("see-contributors", "貢献者を見る"),
];

// ==================== Thai Messages ====================

pub const THAI: &[(&str, &str)] = &[
    ("page-individuals", "บุคคลทั่วไป"),
    ("page-developers", "นักพัฒนา"),
    ("page-learn", "เรียนรู้"),
    ("website-last-updated", "อัปเดตเว็บไซต์ล่าสุด"),
    ("last-edit", "แก้ไขล่าสุด"),
    ("contributors", "ผู้มีส่วนร่วม"),
];
