//! Locale coverage checks.
//!
//! A deployed locale must label every `(category, key)` pair the registry
//! defines. A gap is a configuration defect.

use std::collections::HashSet;

use eye_report_locales::LocaleBundle;
use serde::{Deserialize, Serialize};

use super::{Projector, Translate};
use crate::vocabulary::{Category, TranslationKey};

/// Coverage of a translation source against the registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageReport {
    /// Registry keys the source cannot translate
    pub missing: Vec<TranslationKey>,
    /// Bundle keys with no registry counterpart
    pub unexpected: Vec<String>,
    /// Registry keys whose label repeats an earlier option's label
    pub duplicates: Vec<TranslationKey>,
}

impl CoverageReport {
    /// Whether the source labels every registry key once, with distinct
    /// labels, and nothing else.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty() && self.duplicates.is_empty()
    }
}

impl Projector<'_> {
    /// Find registry keys that `translate` cannot label, and keys whose label
    /// is already taken by an earlier option of the same category.
    pub fn coverage<T>(&self, translate: &T) -> CoverageReport
    where
        T: Translate + ?Sized,
    {
        let mut report = CoverageReport::default();

        for entry in self.vocabulary.entries() {
            let mut seen = HashSet::new();
            for option in &entry.options {
                let tk = TranslationKey {
                    category: entry.category,
                    key: option.key.clone(),
                };
                match translate.translate(entry.category, &option.key) {
                    Some(label) => {
                        if !seen.insert(label) {
                            report.duplicates.push(tk);
                        }
                    }
                    None => report.missing.push(tk),
                }
            }
        }

        report
    }

    /// Coverage of a bundle, including keys the registry does not know.
    pub fn bundle_coverage(&self, bundle: &LocaleBundle) -> CoverageReport {
        let mut report = self.coverage(bundle);

        for category_id in bundle.categories() {
            let known = category_id
                .parse::<Category>()
                .ok()
                .and_then(|category| self.vocabulary.entry(category).ok());
            for key in bundle.keys(category_id) {
                let is_known = known.map(|entry| entry.option(key).is_some()).unwrap_or(false);
                if !is_known {
                    report.unexpected.push(format!("{}.{}", category_id, key));
                }
            }
        }

        if !report.is_complete() {
            tracing::warn!(
                locale = %bundle.locale(),
                missing = report.missing.len(),
                unexpected = report.unexpected.len(),
                duplicates = report.duplicates.len(),
                "locale bundle does not match vocabulary"
            );
        }
        report
    }
}
