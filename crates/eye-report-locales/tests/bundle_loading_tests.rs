//! Bundle loading from disk.

use std::fs;

use eye_report_locales::{BundleError, Locale, LocaleBundle};
use proptest::prelude::*;

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("en.json");
    fs::write(
        &path,
        r#"{"locale": "en", "categories": {"cornea": {"clear": "transparent"}}}"#,
    )
    .unwrap();

    let bundle = LocaleBundle::load(&path).unwrap();
    assert_eq!(bundle.locale(), Locale::En);
    assert_eq!(bundle.get("cornea", "clear"), Some("transparent"));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = LocaleBundle::load(dir.path().join("missing.json"));
    assert!(matches!(result, Err(BundleError::Io { .. })));
}

#[test]
fn test_with_overrides_merges_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("ru.json"),
        r#"{"locale": "ru", "categories": {"globe": {"normal": "норма"}}}"#,
    )
    .unwrap();

    let builtin = LocaleBundle::builtin(Locale::Ru).unwrap();
    let bundle = LocaleBundle::with_overrides(Locale::Ru, Some(dir.path())).unwrap();

    assert_eq!(bundle.get("globe", "normal"), Some("норма"));
    assert_eq!(bundle.get("globe", "atrophy"), builtin.get("globe", "atrophy"));
    assert_eq!(bundle.len(), builtin.len());
}

#[test]
fn test_with_overrides_ignores_other_locales() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("ru.json"),
        r#"{"locale": "ru", "categories": {"globe": {"normal": "норма"}}}"#,
    )
    .unwrap();

    let bundle = LocaleBundle::with_overrides(Locale::En, Some(dir.path())).unwrap();
    assert_eq!(bundle, LocaleBundle::builtin(Locale::En).unwrap());
}

#[test]
fn test_with_overrides_rejects_mislabelled_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("en.json"),
        r#"{"locale": "ru", "categories": {}}"#,
    )
    .unwrap();

    let result = LocaleBundle::with_overrides(Locale::En, Some(dir.path()));
    assert!(matches!(result, Err(BundleError::LocaleMismatch { .. })));
}

#[test]
fn test_with_overrides_without_dir() {
    let bundle = LocaleBundle::with_overrides(Locale::Uz, None).unwrap();
    assert_eq!(bundle, LocaleBundle::builtin(Locale::Uz).unwrap());
}

proptest! {
    #[test]
    fn parse_never_panics(input in ".{0,200}") {
        let _ = LocaleBundle::parse(&input);
    }

    #[test]
    fn inserted_labels_are_retrievable(
        category in "[a-z_]{1,12}",
        key in "[a-z_]{1,12}",
        label in "[^\\s].{0,20}",
    ) {
        let mut bundle = LocaleBundle::new(Locale::En);
        bundle.insert(&category, &key, label.clone());
        prop_assert_eq!(bundle.get(&category, &key), Some(label.as_str()));
    }
}
