//! Property tests for the localization projector over arbitrary vocabularies.

use std::collections::BTreeSet;

use eye_report_core::projector::{MissingTranslationPolicy, ProjectionError, Projector};
use eye_report_core::vocabulary::{Category, Vocabulary, VocabularyEntry, VocabularyOption};
use eye_report_locales::Locale;
use proptest::prelude::*;

/// Distinct option keys, in generation order.
fn option_keys() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[a-z]{1,8}", 1..12)
        .prop_map(|keys: BTreeSet<String>| keys.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

fn build_vocabulary(keys: &[String], normal: Option<usize>) -> Vocabulary {
    let options = keys
        .iter()
        .map(|key| VocabularyOption {
            key: key.clone(),
            value: format!("canonical {}", key),
        })
        .collect();
    let normal = normal.map(|i| keys[i % keys.len()].clone());
    Vocabulary::build(vec![VocabularyEntry::new(Category::Lens, options, normal)]).unwrap()
}

fn suffixed(category: Category, key: &str) -> Option<String> {
    Some(format!("{}:{}", category, key.to_uppercase()))
}

proptest! {
    #[test]
    fn projection_is_deterministic(keys in option_keys(), normal in prop::option::of(0usize..12)) {
        let vocabulary = build_vocabulary(&keys, normal);
        let projector = Projector::new(&vocabulary, MissingTranslationPolicy::Strict);

        let first = projector.project(Locale::En, Category::Lens, &suffixed).unwrap();
        let second = projector.project(Locale::En, Category::Lens, &suffixed).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn projection_preserves_order_and_length(keys in option_keys()) {
        let vocabulary = build_vocabulary(&keys, None);
        let projector = Projector::new(&vocabulary, MissingTranslationPolicy::Strict);

        let projected = projector.project(Locale::Ru, Category::Lens, &suffixed).unwrap();
        prop_assert_eq!(projected.len(), keys.len());
        for (option, key) in projected.options().iter().zip(&keys) {
            prop_assert_eq!(&option.key, key);
            prop_assert_eq!(Some(option.label.clone()), suffixed(Category::Lens, key));
        }
    }

    #[test]
    fn projected_normal_matches_its_option(keys in option_keys(), normal in 0usize..12) {
        let vocabulary = build_vocabulary(&keys, Some(normal));
        let projector = Projector::new(&vocabulary, MissingTranslationPolicy::Strict);

        let projected = projector.project(Locale::En, Category::Lens, &suffixed).unwrap();
        let normal_key = &keys[normal % keys.len()];
        prop_assert_eq!(projected.normal(), projected.label_of(normal_key));
        prop_assert_eq!(
            projector.project_normal_default(Locale::En, Category::Lens, &suffixed).unwrap(),
            projected.normal().map(str::to_string)
        );
    }

    #[test]
    fn missing_key_fails_strict_and_falls_back(keys in option_keys(), hole in 0usize..12) {
        let vocabulary = build_vocabulary(&keys, None);
        let missing = keys[hole % keys.len()].clone();
        let translate = |category: Category, key: &str| {
            if key == missing { None } else { suffixed(category, key) }
        };

        let strict = Projector::new(&vocabulary, MissingTranslationPolicy::Strict);
        let err = strict.project(Locale::En, Category::Lens, &translate).unwrap_err();
        let is_missing_translation = matches!(
            err,
            ProjectionError::MissingTranslation { ref key, .. } if *key == missing
        );
        prop_assert!(is_missing_translation);

        let lenient = Projector::new(&vocabulary, MissingTranslationPolicy::FallbackToCanonical);
        let projected = lenient.project(Locale::En, Category::Lens, &translate).unwrap();
        prop_assert_eq!(projected.len(), keys.len());
        let expected = format!("canonical {}", missing);
        prop_assert_eq!(projected.label_of(&missing), Some(expected.as_str()));
    }
}

#[test]
fn test_unregistered_category_is_rejected() {
    let vocabulary = build_vocabulary(&["clear".to_string()], None);
    let projector = Projector::new(&vocabulary, MissingTranslationPolicy::Strict);
    assert!(matches!(
        projector.project(Locale::En, Category::Globe, &suffixed),
        Err(ProjectionError::Vocabulary(_))
    ));
}
