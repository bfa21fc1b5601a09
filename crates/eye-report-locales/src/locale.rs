//! Supported report locales.
//!
//! The set of locales is closed: every locale listed here ships a built-in
//! bundle, and bundle coverage is checked against the vocabulary in tests.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bundle::BundleError;

/// A report locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Uzbek, Latin script (canonical)
    Uz,
    /// Russian
    Ru,
    /// English
    En,
}

/// Metadata for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    pub locale: Locale,
    /// ISO 639-1 code
    pub code: &'static str,
    /// English name of the language
    pub name: &'static str,
    /// Name of the language in the language itself
    pub native_name: &'static str,
    /// Whether vocabulary canonical values are written in this locale
    pub is_canonical: bool,
}

const LOCALES: &[LocaleConfig] = &[
    LocaleConfig {
        locale: Locale::Uz,
        code: "uz",
        name: "Uzbek",
        native_name: "O'zbekcha",
        is_canonical: true,
    },
    LocaleConfig {
        locale: Locale::Ru,
        code: "ru",
        name: "Russian",
        native_name: "Русский",
        is_canonical: false,
    },
    LocaleConfig {
        locale: Locale::En,
        code: "en",
        name: "English",
        native_name: "English",
        is_canonical: false,
    },
];

impl Locale {
    /// All supported locales, in presentation order.
    pub const ALL: [Locale; 3] = [Locale::Uz, Locale::Ru, Locale::En];

    /// The locale canonical vocabulary values are written in.
    pub fn canonical() -> Locale {
        Locale::Uz
    }

    /// ISO 639-1 code (e.g. "uz", "ru").
    pub fn code(self) -> &'static str {
        self.config().code
    }

    /// Full metadata for this locale.
    pub fn config(self) -> &'static LocaleConfig {
        match self {
            Locale::Uz => &LOCALES[0],
            Locale::Ru => &LOCALES[1],
            Locale::En => &LOCALES[2],
        }
    }

    pub fn name(self) -> &'static str {
        self.config().name
    }

    pub fn native_name(self) -> &'static str {
        self.config().native_name
    }

    pub fn is_canonical(self) -> bool {
        self.config().is_canonical
    }

    /// Parse a locale tag, case-insensitive and tolerant of region suffixes
    /// ("ru-RU", "uz_Latn").
    pub fn parse(value: &str) -> Option<Locale> {
        let normalized = value.trim().to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        LOCALES
            .iter()
            .find(|config| config.code == lang)
            .map(|config| config.locale)
    }

    /// Parse a locale tag, failing with `UnknownLocale`.
    pub fn from_code(code: &str) -> Result<Locale, BundleError> {
        Self::parse(code).ok_or_else(|| BundleError::UnknownLocale(code.to_string()))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = BundleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_canonical_locale() {
        let canonical: Vec<_> = Locale::ALL
            .iter()
            .filter(|locale| locale.is_canonical())
            .collect();
        assert_eq!(canonical, vec![&Locale::canonical()]);
    }

    #[test]
    fn test_config_matches_variant() {
        for locale in Locale::ALL {
            assert_eq!(locale.config().locale, locale);
        }
    }

    #[test]
    fn test_parse_codes() {
        assert_eq!(Locale::parse("uz"), Some(Locale::Uz));
        assert_eq!(Locale::parse("RU"), Some(Locale::Ru));
        assert_eq!(Locale::parse(" en "), Some(Locale::En));
    }

    #[test]
    fn test_parse_region_tags() {
        assert_eq!(Locale::parse("ru-RU"), Some(Locale::Ru));
        assert_eq!(Locale::parse("uz_Latn"), Some(Locale::Uz));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(Locale::parse("fr"), None);
        assert_eq!(Locale::parse(""), None);

        let err = Locale::from_code("de").unwrap_err();
        assert!(err.to_string().contains("de"));
    }

    #[test]
    fn test_display_and_from_str() {
        assert_eq!(Locale::Ru.to_string(), "ru");
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
    }

    #[test]
    fn test_serde_uses_codes() {
        assert_eq!(serde_json::to_string(&Locale::Uz).unwrap(), "\"uz\"");
        let parsed: Locale = serde_json::from_str("\"ru\"").unwrap();
        assert_eq!(parsed, Locale::Ru);
    }

    #[test]
    fn test_native_names() {
        assert_eq!(Locale::Uz.native_name(), "O'zbekcha");
        assert_eq!(Locale::Ru.native_name(), "Русский");
        assert_eq!(Locale::En.name(), "English");
    }
}
