//! Locale bundles: translation tables keyed by `(category, option key)`.
//!
//! Bundle files are JSON:
//!
//! ```json
//! {
//!   "locale": "ru",
//!   "categories": {
//!     "globe": { "normal": "в норме", "atrophy": "атрофия" }
//!   }
//! }
//! ```

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::locale::Locale;

const UZ_BUNDLE: &str = include_str!("../bundles/uz.json");
const RU_BUNDLE: &str = include_str!("../bundles/ru.json");
const EN_BUNDLE: &str = include_str!("../bundles/en.json");

/// Bundle errors.
#[derive(Error, Debug)]
pub enum BundleError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read bundle {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid bundle format: {0}")]
    InvalidFormat(String),

    #[error("Unknown locale: '{0}'")]
    UnknownLocale(String),

    #[error("Bundle locale mismatch: expected {expected}, found {found}")]
    LocaleMismatch { expected: Locale, found: Locale },
}

pub type BundleResult<T> = Result<T, BundleError>;

/// On-disk representation of a bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BundleFile {
    locale: String,
    categories: BTreeMap<String, BTreeMap<String, String>>,
}

/// Translation table for one locale.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleBundle {
    locale: Locale,
    entries: HashMap<String, HashMap<String, String>>,
}

impl LocaleBundle {
    /// Create an empty bundle.
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            entries: HashMap::new(),
        }
    }

    /// Parse a bundle from JSON.
    pub fn parse(json: &str) -> BundleResult<Self> {
        let file: BundleFile = serde_json::from_str(json)?;
        let locale = Locale::from_code(&file.locale)?;

        let mut bundle = Self::new(locale);
        for (category, labels) in file.categories {
            if category.trim().is_empty() {
                return Err(BundleError::InvalidFormat("empty category name".into()));
            }
            for (key, label) in labels {
                if key.trim().is_empty() {
                    return Err(BundleError::InvalidFormat(format!(
                        "empty option key in category '{}'",
                        category
                    )));
                }
                if label.trim().is_empty() {
                    return Err(BundleError::InvalidFormat(format!(
                        "empty label for '{}.{}'",
                        category, key
                    )));
                }
                bundle.insert(&category, &key, label);
            }
        }

        tracing::debug!(locale = %locale, entries = bundle.len(), "parsed locale bundle");
        Ok(bundle)
    }

    /// The bundle shipped with the crate for `locale`.
    pub fn builtin(locale: Locale) -> BundleResult<Self> {
        let source = match locale {
            Locale::Uz => UZ_BUNDLE,
            Locale::Ru => RU_BUNDLE,
            Locale::En => EN_BUNDLE,
        };
        let bundle = Self::parse(source)?;
        if bundle.locale != locale {
            return Err(BundleError::LocaleMismatch {
                expected: locale,
                found: bundle.locale,
            });
        }
        Ok(bundle)
    }

    /// Load a bundle file from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> BundleResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| BundleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&json)
    }

    /// The built-in bundle for `locale`, with `<dir>/<code>.json` merged over it
    /// when that file exists.
    pub fn with_overrides(locale: Locale, dir: Option<&Path>) -> BundleResult<Self> {
        let mut bundle = Self::builtin(locale)?;

        if let Some(dir) = dir {
            let path = dir.join(format!("{}.json", locale.code()));
            if path.is_file() {
                let overrides = Self::load(&path)?;
                tracing::info!(
                    locale = %locale,
                    path = %path.display(),
                    entries = overrides.len(),
                    "applying locale bundle overrides"
                );
                bundle.merge(overrides)?;
            }
        }

        Ok(bundle)
    }

    /// Merge another bundle of the same locale into this one. Labels from
    /// `other` replace existing labels.
    pub fn merge(&mut self, other: LocaleBundle) -> BundleResult<()> {
        if other.locale != self.locale {
            return Err(BundleError::LocaleMismatch {
                expected: self.locale,
                found: other.locale,
            });
        }
        for (category, labels) in other.entries {
            self.entries.entry(category).or_default().extend(labels);
        }
        Ok(())
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Look up the label for an option key.
    pub fn get(&self, category: &str, key: &str) -> Option<&str> {
        self.entries
            .get(category)
            .and_then(|labels| labels.get(key))
            .map(String::as_str)
    }

    /// Add or replace a label.
    pub fn insert(&mut self, category: &str, key: &str, label: impl Into<String>) {
        self.entries
            .entry(category.to_string())
            .or_default()
            .insert(key.to_string(), label.into());
    }

    /// Remove a label, returning it if present.
    pub fn remove(&mut self, category: &str, key: &str) -> Option<String> {
        self.entries.get_mut(category)?.remove(key)
    }

    /// Category names present in this bundle, sorted.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        categories.sort_unstable();
        categories
    }

    /// Option keys present for a category, sorted.
    pub fn keys(&self, category: &str) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .entries
            .get(category)
            .map(|labels| labels.keys().map(String::as_str).collect())
            .unwrap_or_default();
        keys.sort_unstable();
        keys
    }

    /// Total number of labels.
    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Serialize back to the bundle file format.
    pub fn to_json(&self) -> BundleResult<String> {
        let file = BundleFile {
            locale: self.locale.code().to_string(),
            categories: self
                .entries
                .iter()
                .map(|(category, labels)| {
                    (
                        category.clone(),
                        labels
                            .iter()
                            .map(|(k, v)| (k.clone(), v.clone()))
                            .collect::<BTreeMap<_, _>>(),
                    )
                })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }
}
