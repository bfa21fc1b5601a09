//! Vocabulary registry: the canonical, locale-independent catalogue of
//! examination categories and their options.
//!
//! Every option carries a stable key alongside its canonical value. Locale
//! bundles bind to keys, never to list positions, so reordering either side
//! cannot silently shift translations.

mod builtin;

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Vocabulary errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VocabularyError {
    #[error("Unknown category: '{0}'")]
    UnknownCategory(String),

    #[error("Category {0} has no options")]
    EmptyCategory(Category),

    #[error("Category {0} is registered more than once")]
    DuplicateCategory(Category),

    #[error("Duplicate option key '{key}' in {category}")]
    DuplicateKey { category: Category, key: String },

    #[error("Duplicate option value '{value}' in {category}")]
    DuplicateValue { category: Category, value: String },

    #[error("Normal default '{key}' is not an option of {category}")]
    NormalNotInOptions { category: Category, key: String },
}

pub type VocabularyResult<T> = Result<T, VocabularyError>;

/// One clinical dimension of an eye examination or report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Globe,
    Muscles,
    LidsLacrimal,
    Conjunctiva,
    Sclera,
    Cornea,
    AnteriorChamber,
    IrisPupil,
    Lens,
    Vitreous,
    Fundus,
    Diagnosis,
    Recommendations,
    Complaints,
    Comorbidities,
    Cities,
    Gender,
    IopMethods,
}

impl Category {
    pub const ALL: [Category; 18] = [
        Category::Globe,
        Category::Muscles,
        Category::LidsLacrimal,
        Category::Conjunctiva,
        Category::Sclera,
        Category::Cornea,
        Category::AnteriorChamber,
        Category::IrisPupil,
        Category::Lens,
        Category::Vitreous,
        Category::Fundus,
        Category::Diagnosis,
        Category::Recommendations,
        Category::Complaints,
        Category::Comorbidities,
        Category::Cities,
        Category::Gender,
        Category::IopMethods,
    ];

    /// Categories recorded once per eye, in examination order.
    pub const ANATOMICAL: [Category; 11] = [
        Category::Globe,
        Category::Muscles,
        Category::LidsLacrimal,
        Category::Conjunctiva,
        Category::Sclera,
        Category::Cornea,
        Category::AnteriorChamber,
        Category::IrisPupil,
        Category::Lens,
        Category::Vitreous,
        Category::Fundus,
    ];

    /// Stable string id, also used as the bundle category name.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Globe => "globe",
            Category::Muscles => "muscles",
            Category::LidsLacrimal => "lids_lacrimal",
            Category::Conjunctiva => "conjunctiva",
            Category::Sclera => "sclera",
            Category::Cornea => "cornea",
            Category::AnteriorChamber => "anterior_chamber",
            Category::IrisPupil => "iris_pupil",
            Category::Lens => "lens",
            Category::Vitreous => "vitreous",
            Category::Fundus => "fundus",
            Category::Diagnosis => "diagnosis",
            Category::Recommendations => "recommendations",
            Category::Complaints => "complaints",
            Category::Comorbidities => "comorbidities",
            Category::Cities => "cities",
            Category::Gender => "gender",
            Category::IopMethods => "iop_methods",
        }
    }

    /// Whether this category is a per-eye examination finding.
    pub fn is_anatomical(self) -> bool {
        Self::ANATOMICAL.contains(&self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| VocabularyError::UnknownCategory(s.to_string()))
    }
}

/// A structured reference to one option, used to look up its translation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TranslationKey {
    pub category: Category,
    pub key: String,
}

impl fmt::Display for TranslationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.category, self.key)
    }
}

/// A single canonical option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyOption {
    /// Stable identifier, shared by all locales
    pub key: String,
    /// Canonical (locale-neutral) value
    pub value: String,
}

/// A category's ordered option list and optional normal default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub category: Category,
    /// Options in display order
    pub options: Vec<VocabularyOption>,
    /// Key of the option representing an unremarkable finding
    pub normal: Option<String>,
}

impl VocabularyEntry {
    /// Create an entry from owned options.
    pub fn new(category: Category, options: Vec<VocabularyOption>, normal: Option<String>) -> Self {
        Self {
            category,
            options,
            normal,
        }
    }

    /// Create an entry from a static `(key, value)` table.
    pub fn from_table(category: Category, table: &[(&str, &str)], normal: Option<&str>) -> Self {
        let options = table
            .iter()
            .map(|(key, value)| VocabularyOption {
                key: (*key).to_string(),
                value: (*value).to_string(),
            })
            .collect();
        Self::new(category, options, normal.map(str::to_string))
    }

    /// Canonical values in display order.
    pub fn values(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.value.as_str()).collect()
    }

    /// Option keys in display order.
    pub fn keys(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.key.as_str()).collect()
    }

    /// Look up an option by key.
    pub fn option(&self, key: &str) -> Option<&VocabularyOption> {
        self.options.iter().find(|o| o.key == key)
    }

    /// Canonical value of the normal default, if declared.
    pub fn normal_value(&self) -> Option<&str> {
        let key = self.normal.as_deref()?;
        self.option(key).map(|o| o.value.as_str())
    }

    fn validate(&self) -> VocabularyResult<()> {
        if self.options.is_empty() {
            return Err(VocabularyError::EmptyCategory(self.category));
        }

        let mut keys = HashSet::new();
        let mut values = HashSet::new();
        for option in &self.options {
            if !keys.insert(option.key.as_str()) {
                return Err(VocabularyError::DuplicateKey {
                    category: self.category,
                    key: option.key.clone(),
                });
            }
            if !values.insert(option.value.as_str()) {
                return Err(VocabularyError::DuplicateValue {
                    category: self.category,
                    value: option.value.clone(),
                });
            }
        }

        if let Some(normal) = &self.normal {
            if !keys.contains(normal.as_str()) {
                return Err(VocabularyError::NormalNotInOptions {
                    category: self.category,
                    key: normal.clone(),
                });
            }
        }

        Ok(())
    }
}

/// Read-only registry of vocabulary entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary {
    entries: BTreeMap<Category, VocabularyEntry>,
}

static VOCABULARY: OnceLock<Vocabulary> = OnceLock::new();

impl Vocabulary {
    /// The process-wide built-in vocabulary.
    ///
    /// # Panics
    /// Panics if the built-in tables violate a vocabulary invariant. The
    /// tables are covered by tests, so this indicates a build defect.
    pub fn get() -> &'static Vocabulary {
        VOCABULARY.get_or_init(|| {
            Self::build(builtin::builtin_entries()).expect("built-in vocabulary should be valid")
        })
    }

    /// Build a registry, validating every entry.
    pub fn build(entries: Vec<VocabularyEntry>) -> VocabularyResult<Self> {
        let mut map = BTreeMap::new();
        for entry in entries {
            entry.validate()?;
            let category = entry.category;
            if map.insert(category, entry).is_some() {
                return Err(VocabularyError::DuplicateCategory(category));
            }
        }
        Ok(Self { entries: map })
    }

    /// All registered categories, in registry order.
    pub fn list_categories(&self) -> Vec<Category> {
        self.entries.keys().copied().collect()
    }

    pub fn entry(&self, category: Category) -> VocabularyResult<&VocabularyEntry> {
        self.entries
            .get(&category)
            .ok_or_else(|| VocabularyError::UnknownCategory(category.to_string()))
    }

    pub fn entries(&self) -> impl Iterator<Item = &VocabularyEntry> {
        self.entries.values()
    }

    /// Canonical options for a category, in display order.
    pub fn options(&self, category: Category) -> VocabularyResult<Vec<&str>> {
        Ok(self.entry(category)?.values())
    }

    /// Canonical options for a category named by its string id.
    pub fn options_by_id(&self, id: &str) -> VocabularyResult<Vec<&str>> {
        self.options(id.parse()?)
    }

    /// Canonical normal default, or `None` when the category declares none.
    pub fn normal_default(&self, category: Category) -> VocabularyResult<Option<&str>> {
        Ok(self.entry(category)?.normal_value())
    }

    /// Translation keys for a category, in the same order as its options.
    pub fn translation_keys(&self, category: Category) -> VocabularyResult<Vec<TranslationKey>> {
        Ok(self
            .entry(category)?
            .options
            .iter()
            .map(|o| TranslationKey {
                category,
                key: o.key.clone(),
            })
            .collect())
    }

    /// Whether `value` is a canonical option of `category`.
    pub fn contains(&self, category: Category, value: &str) -> bool {
        self.entries
            .get(&category)
            .map(|entry| entry.options.iter().any(|o| o.value == value))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(category: Category, table: &[(&str, &str)], normal: Option<&str>) -> VocabularyEntry {
        VocabularyEntry::from_table(category, table, normal)
    }

    #[test]
    fn test_builtin_registers_every_category() {
        let vocabulary = Vocabulary::get();
        assert_eq!(vocabulary.list_categories(), Category::ALL.to_vec());
    }

    #[test]
    fn test_get_returns_singleton() {
        assert!(std::ptr::eq(Vocabulary::get(), Vocabulary::get()));
    }

    #[test]
    fn test_globe_options_in_display_order() {
        let options = Vocabulary::get().options(Category::Globe).unwrap();
        assert_eq!(
            options,
            vec!["normada", "subatrofiya", "atrofiya", "mikroftalm", "gidroftalm", "buftalm"]
        );
        assert_eq!(
            Vocabulary::get().normal_default(Category::Globe).unwrap(),
            Some("normada")
        );
    }

    #[test]
    fn test_categories_without_normal_default() {
        let vocabulary = Vocabulary::get();
        for category in [Category::Diagnosis, Category::Recommendations, Category::Cities] {
            assert_eq!(vocabulary.normal_default(category).unwrap(), None);
        }
    }

    #[test]
    fn test_every_anatomical_category_has_normal_default() {
        let vocabulary = Vocabulary::get();
        for category in Category::ANATOMICAL {
            assert!(
                vocabulary.normal_default(category).unwrap().is_some(),
                "{} has no normal default",
                category
            );
        }
    }

    #[test]
    fn test_options_by_id() {
        let vocabulary = Vocabulary::get();
        assert_eq!(
            vocabulary.options_by_id("cornea").unwrap(),
            vocabulary.options(Category::Cornea).unwrap()
        );

        let err = vocabulary.options_by_id("retina").unwrap_err();
        assert_eq!(err, VocabularyError::UnknownCategory("retina".into()));
    }

    #[test]
    fn test_unregistered_category_is_unknown() {
        let vocabulary =
            Vocabulary::build(vec![entry(Category::Lens, &[("clear", "tiniq")], None)]).unwrap();
        assert!(matches!(
            vocabulary.options(Category::Cornea),
            Err(VocabularyError::UnknownCategory(_))
        ));
        assert!(!vocabulary.contains(Category::Cornea, "tiniq"));
    }

    #[test]
    fn test_translation_keys_follow_option_order() {
        let vocabulary = Vocabulary::get();
        let keys = vocabulary.translation_keys(Category::Globe).unwrap();
        let names: Vec<_> = keys.iter().map(|k| k.key.as_str()).collect();
        assert_eq!(
            names,
            vec!["normal", "subatrophy", "atrophy", "microphthalmos", "hydrophthalmos", "buphthalmos"]
        );
        assert_eq!(keys[2].to_string(), "globe.atrophy");
    }

    #[test]
    fn test_build_rejects_normal_outside_options() {
        let result = Vocabulary::build(vec![entry(
            Category::Sclera,
            &[("white", "oq")],
            Some("blue"),
        )]);
        assert_eq!(
            result.unwrap_err(),
            VocabularyError::NormalNotInOptions {
                category: Category::Sclera,
                key: "blue".into()
            }
        );
    }

    #[test]
    fn test_build_rejects_duplicates() {
        let dup_key = Vocabulary::build(vec![entry(
            Category::Lens,
            &[("clear", "tiniq"), ("clear", "xira")],
            None,
        )]);
        assert!(matches!(dup_key, Err(VocabularyError::DuplicateKey { .. })));

        let dup_value = Vocabulary::build(vec![entry(
            Category::Lens,
            &[("clear", "tiniq"), ("transparent", "tiniq")],
            None,
        )]);
        assert!(matches!(dup_value, Err(VocabularyError::DuplicateValue { .. })));

        let dup_category = Vocabulary::build(vec![
            entry(Category::Lens, &[("clear", "tiniq")], None),
            entry(Category::Lens, &[("clear", "tiniq")], None),
        ]);
        assert_eq!(
            dup_category.unwrap_err(),
            VocabularyError::DuplicateCategory(Category::Lens)
        );
    }

    #[test]
    fn test_build_rejects_empty_category() {
        let result = Vocabulary::build(vec![entry(Category::Gender, &[], None)]);
        assert_eq!(result.unwrap_err(), VocabularyError::EmptyCategory(Category::Gender));
    }

    #[test]
    fn test_category_round_trips_through_id() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
            assert_eq!(
                serde_json::to_string(&category).unwrap(),
                format!("\"{}\"", category.as_str())
            );
        }
    }

    #[test]
    fn test_anatomical_flag() {
        assert!(Category::Cornea.is_anatomical());
        assert!(Category::Fundus.is_anatomical());
        assert!(!Category::Diagnosis.is_anatomical());
        assert!(!Category::IopMethods.is_anatomical());
    }
}
