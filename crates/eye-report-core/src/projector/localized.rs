//! Locale-specific views produced by the projector.

use std::collections::BTreeMap;

use eye_report_locales::Locale;
use serde::{Deserialize, Serialize};

use crate::vocabulary::Category;

/// One option after translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedOption {
    /// Stable option key
    pub key: String,
    /// Label in the target locale
    pub label: String,
}

/// A category's options and normal default in one locale.
///
/// Immutable once built; a locale change produces a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedCategory {
    category: Category,
    locale: Locale,
    options: Vec<LocalizedOption>,
    normal: Option<String>,
}

impl LocalizedCategory {
    pub(crate) fn new(
        category: Category,
        locale: Locale,
        options: Vec<LocalizedOption>,
        normal: Option<String>,
    ) -> Self {
        Self {
            category,
            locale,
            options,
            normal,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn options(&self) -> &[LocalizedOption] {
        &self.options
    }

    /// Labels in display order.
    pub fn labels(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.label.as_str()).collect()
    }

    /// Localized normal default, if the category declares one.
    pub fn normal(&self) -> Option<&str> {
        self.normal.as_deref()
    }

    /// The normal default, or the first option when there is none.
    pub fn default_label(&self) -> Option<&str> {
        self.normal()
            .or_else(|| self.options.first().map(|o| o.label.as_str()))
    }

    pub fn contains(&self, label: &str) -> bool {
        self.options.iter().any(|o| o.label == label)
    }

    /// Key of the option with this label.
    pub fn key_of(&self, label: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.label == label)
            .map(|o| o.key.as_str())
    }

    /// Label of the option with this key.
    pub fn label_of(&self, key: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.key == key)
            .map(|o| o.label.as_str())
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// Every registered category projected through one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedVocabulary {
    locale: Locale,
    categories: BTreeMap<Category, LocalizedCategory>,
}

impl LocalizedVocabulary {
    pub(crate) fn new(locale: Locale, categories: Vec<LocalizedCategory>) -> Self {
        Self {
            locale,
            categories: categories
                .into_iter()
                .map(|c| (c.category(), c))
                .collect(),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn category(&self, category: Category) -> Option<&LocalizedCategory> {
        self.categories.get(&category)
    }

    /// Projected categories, in registry order.
    pub fn categories(&self) -> Vec<Category> {
        self.categories.keys().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sclera() -> LocalizedCategory {
        LocalizedCategory::new(
            Category::Sclera,
            Locale::En,
            vec![
                LocalizedOption {
                    key: "white".into(),
                    label: "white".into(),
                },
                LocalizedOption {
                    key: "icteric".into(),
                    label: "icteric".into(),
                },
            ],
            None,
        )
    }

    #[test]
    fn test_default_label_falls_back_to_first() {
        let category = sclera();
        assert_eq!(category.normal(), None);
        assert_eq!(category.default_label(), Some("white"));
    }

    #[test]
    fn test_lookups() {
        let category = sclera();
        assert!(category.contains("icteric"));
        assert!(!category.contains("Icteric"));
        assert_eq!(category.key_of("icteric"), Some("icteric"));
        assert_eq!(category.label_of("white"), Some("white"));
        assert_eq!(category.label_of("blue"), None);
        assert_eq!(category.len(), 2);
    }

    #[test]
    fn test_empty_category_has_no_default() {
        let category = LocalizedCategory::new(Category::Gender, Locale::Ru, vec![], None);
        assert!(category.is_empty());
        assert_eq!(category.default_label(), None);
    }
}
