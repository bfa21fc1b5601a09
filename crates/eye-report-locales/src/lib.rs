//! Locale registry and translation bundles for eye examination reports.
//!
//! Bundles map `(category, option key)` to a display label. They carry no
//! knowledge of the vocabulary itself; coverage against the vocabulary is
//! checked by `eye-report-core`.

pub mod bundle;
pub mod locale;

pub use bundle::{BundleError, BundleResult, LocaleBundle};
pub use locale::{Locale, LocaleConfig};
