//! Localization projector: resolves vocabulary entries through a locale's
//! translation source.
//!
//! Pipeline: Vocabulary → Translate(category, key) → LocalizedCategory
//!
//! The projector is a pure function of `(vocabulary, translate)`. It never
//! mutates the registry and performs no I/O beyond the supplied callback.

mod coverage;
mod localized;

pub use coverage::*;
pub use localized::*;

use std::collections::HashSet;

use eye_report_locales::{Locale, LocaleBundle};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::vocabulary::{Category, Vocabulary, VocabularyError};

/// Projection errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectionError {
    #[error(transparent)]
    Vocabulary(#[from] VocabularyError),

    #[error("Missing {locale} translation for {category}.{key}")]
    MissingTranslation {
        locale: Locale,
        category: Category,
        key: String,
    },

    #[error("{locale} label '{label}' is used by more than one {category} option")]
    DuplicateLabel {
        locale: Locale,
        category: Category,
        label: String,
    },
}

pub type ProjectionResult<T> = Result<T, ProjectionError>;

/// What to do when a locale has no label for an option key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingTranslationPolicy {
    /// Fail the projection.
    Strict,
    /// Log a warning and use the canonical value.
    #[default]
    FallbackToCanonical,
}

/// A translation source for one locale.
pub trait Translate {
    /// Label for `key` within `category`, or `None` if the locale lacks one.
    fn translate(&self, category: Category, key: &str) -> Option<String>;
}

impl<F> Translate for F
where
    F: Fn(Category, &str) -> Option<String>,
{
    fn translate(&self, category: Category, key: &str) -> Option<String> {
        self(category, key)
    }
}

impl Translate for LocaleBundle {
    fn translate(&self, category: Category, key: &str) -> Option<String> {
        self.get(category.as_str(), key).map(str::to_string)
    }
}

/// Translation source that returns canonical values unchanged.
pub struct CanonicalTranslator<'a> {
    vocabulary: &'a Vocabulary,
}

impl<'a> CanonicalTranslator<'a> {
    pub fn new(vocabulary: &'a Vocabulary) -> Self {
        Self { vocabulary }
    }
}

impl Translate for CanonicalTranslator<'_> {
    fn translate(&self, category: Category, key: &str) -> Option<String> {
        let entry = self.vocabulary.entry(category).ok()?;
        entry.option(key).map(|o| o.value.clone())
    }
}

/// Projects vocabulary entries into locale-specific views.
pub struct Projector<'a> {
    vocabulary: &'a Vocabulary,
    policy: MissingTranslationPolicy,
}

impl<'a> Projector<'a> {
    /// Create a new projector.
    pub fn new(vocabulary: &'a Vocabulary, policy: MissingTranslationPolicy) -> Self {
        Self { vocabulary, policy }
    }

    pub fn vocabulary(&self) -> &'a Vocabulary {
        self.vocabulary
    }

    pub fn policy(&self) -> MissingTranslationPolicy {
        self.policy
    }

    /// Project one category. Position `i` of the result is the translation of
    /// canonical option `i`.
    ///
    /// Labels must be distinct within the category under every policy, so a
    /// label always resolves back to exactly one option key.
    pub fn project<T>(
        &self,
        locale: Locale,
        category: Category,
        translate: &T,
    ) -> ProjectionResult<LocalizedCategory>
    where
        T: Translate + ?Sized,
    {
        let entry = self.vocabulary.entry(category)?;

        let mut options = Vec::with_capacity(entry.options.len());
        let mut seen = HashSet::with_capacity(entry.options.len());
        let mut normal = None;
        for option in &entry.options {
            let label = self.resolve(locale, category, &option.key, &option.value, translate)?;
            if !seen.insert(label.clone()) {
                tracing::error!(
                    locale = %locale,
                    %category,
                    key = %option.key,
                    label = %label,
                    "duplicate label"
                );
                return Err(ProjectionError::DuplicateLabel {
                    locale,
                    category,
                    label,
                });
            }
            if entry.normal.as_deref() == Some(option.key.as_str()) {
                normal = Some(label.clone());
            }
            options.push(LocalizedOption {
                key: option.key.clone(),
                label,
            });
        }

        Ok(LocalizedCategory::new(category, locale, options, normal))
    }

    /// Project only the normal default of a category.
    pub fn project_normal_default<T>(
        &self,
        locale: Locale,
        category: Category,
        translate: &T,
    ) -> ProjectionResult<Option<String>>
    where
        T: Translate + ?Sized,
    {
        let entry = self.vocabulary.entry(category)?;
        let Some(key) = entry.normal.as_deref() else {
            return Ok(None);
        };
        let Some(option) = entry.option(key) else {
            return Ok(None);
        };
        self.resolve(locale, category, &option.key, &option.value, translate)
            .map(Some)
    }

    /// Project every registered category into a snapshot for one locale.
    pub fn project_all<T>(&self, locale: Locale, translate: &T) -> ProjectionResult<LocalizedVocabulary>
    where
        T: Translate + ?Sized,
    {
        let categories = self
            .vocabulary
            .list_categories()
            .into_iter()
            .map(|category| self.project(locale, category, translate))
            .collect::<ProjectionResult<Vec<_>>>()?;

        tracing::debug!(locale = %locale, categories = categories.len(), "projected vocabulary");
        Ok(LocalizedVocabulary::new(locale, categories))
    }

    fn resolve<T>(
        &self,
        locale: Locale,
        category: Category,
        key: &str,
        canonical: &str,
        translate: &T,
    ) -> ProjectionResult<String>
    where
        T: Translate + ?Sized,
    {
        if let Some(label) = translate.translate(category, key) {
            return Ok(label);
        }

        match self.policy {
            MissingTranslationPolicy::Strict => {
                tracing::error!(locale = %locale, %category, key, "missing translation");
                Err(ProjectionError::MissingTranslation {
                    locale,
                    category,
                    key: key.to_string(),
                })
            }
            MissingTranslationPolicy::FallbackToCanonical => {
                tracing::warn!(
                    locale = %locale,
                    %category,
                    key,
                    "missing translation, using canonical value"
                );
                Ok(canonical.to_string())
            }
        }
    }
}
