//! Report assembly, validation and submission.
//!
//! Lifecycle: create_draft → edits (set_finding, add_diagnosis, ...) →
//! validate_complete → submit → SubmittedReport → amend (new draft)

mod editing;
mod seal;
mod suggest;
mod validation;

pub use seal::*;
pub use suggest::suggest_option;
pub use validation::*;

use eye_report_locales::Locale;
use thiserror::Error;

use crate::vocabulary::{Category, VocabularyError};

/// Report errors.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("'{value}' is not a valid {category} option{}", suggestion_hint(.suggestion))]
    InvalidOption {
        category: Category,
        value: String,
        suggestion: Option<String>,
    },

    #[error("Report is incomplete: {}", describe_issues(.0))]
    IncompleteReport(Vec<ValidationIssue>),

    #[error("Report {0} has been submitted and can no longer be edited")]
    ReportSealed(String),

    #[error("Vocabulary locale {found} does not match report locale {expected}")]
    LocaleMismatch { expected: Locale, found: Locale },

    #[error("{0} is not a per-eye examination category")]
    NotAnExaminationCategory(Category),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error(transparent)]
    Vocabulary(#[from] VocabularyError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ReportResult<T> = Result<T, ReportError>;

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean '{}'?)", s),
        None => String::new(),
    }
}

fn describe_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ValidationIssue::field)
        .collect::<Vec<_>>()
        .join(", ")
}
