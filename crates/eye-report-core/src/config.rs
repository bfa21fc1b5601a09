//! Runtime configuration.
//!
//! Resolved once at startup and passed into sessions, so nothing reads the
//! process environment while a report is being edited.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use eye_report_locales::{BundleResult, Locale, LocaleBundle};

use crate::projector::{LocalizedVocabulary, MissingTranslationPolicy, Projector};
use crate::vocabulary::Vocabulary;

pub const LOCALE_VAR: &str = "EYE_REPORT_LOCALE";
pub const STRICT_TRANSLATIONS_VAR: &str = "EYE_REPORT_STRICT_TRANSLATIONS";
pub const BUNDLE_DIR_VAR: &str = "EYE_REPORT_BUNDLE_DIR";

/// Core configuration resolved at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct CoreConfig {
    default_locale: Locale,
    missing_translation: MissingTranslationPolicy,
    bundle_dir: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            default_locale: Locale::canonical(),
            missing_translation: MissingTranslationPolicy::default(),
            bundle_dir: None,
        }
    }
}

impl CoreConfig {
    pub fn new(
        default_locale: Locale,
        missing_translation: MissingTranslationPolicy,
        bundle_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            default_locale,
            missing_translation,
            bundle_dir,
        }
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its
    /// value. Unset and blank variables take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let default_locale = match var(LOCALE_VAR) {
            Some(code) => Locale::from_code(code.trim())
                .with_context(|| format!("{LOCALE_VAR} has unsupported value '{code}'"))?,
            None => Locale::canonical(),
        };

        let missing_translation = match var(STRICT_TRANSLATIONS_VAR) {
            Some(flag) => parse_strict_flag(&flag)
                .with_context(|| format!("{STRICT_TRANSLATIONS_VAR} is not a boolean"))?,
            None => MissingTranslationPolicy::default(),
        };

        let bundle_dir = match var(BUNDLE_DIR_VAR) {
            Some(dir) => {
                let dir = PathBuf::from(dir.trim());
                if !dir.is_dir() {
                    bail!("{BUNDLE_DIR_VAR} is not a directory: {}", dir.display());
                }
                Some(dir)
            }
            None => None,
        };

        Ok(Self {
            default_locale,
            missing_translation,
            bundle_dir,
        })
    }

    pub fn default_locale(&self) -> Locale {
        self.default_locale
    }

    pub fn missing_translation(&self) -> MissingTranslationPolicy {
        self.missing_translation
    }

    pub fn bundle_dir(&self) -> Option<&Path> {
        self.bundle_dir.as_deref()
    }

    /// The built-in bundle for `locale`, merged with any override file.
    pub fn bundle(&self, locale: Locale) -> BundleResult<LocaleBundle> {
        LocaleBundle::with_overrides(locale, self.bundle_dir())
    }

    /// A projector over the built-in vocabulary using the configured policy.
    pub fn projector(&self) -> Projector<'static> {
        Projector::new(Vocabulary::get(), self.missing_translation)
    }

    /// Project the full vocabulary into `locale`.
    pub fn localized(&self, locale: Locale) -> Result<LocalizedVocabulary> {
        let bundle = self
            .bundle(locale)
            .with_context(|| format!("failed to load {locale} bundle"))?;
        let localized = self
            .projector()
            .project_all(locale, &bundle)
            .with_context(|| format!("failed to project vocabulary into {locale}"))?;
        Ok(localized)
    }
}

fn parse_strict_flag(value: &str) -> Result<MissingTranslationPolicy> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(MissingTranslationPolicy::Strict),
        "0" | "false" | "no" | "off" => Ok(MissingTranslationPolicy::FallbackToCanonical),
        other => bail!("expected true/false, got '{other}'"),
    }
}
