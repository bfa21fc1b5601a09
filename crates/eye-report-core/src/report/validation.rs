//! Completeness checks gating report submission.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::EyeReport;

/// Date format used for dates of birth and report dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A problem that blocks submission.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ValidationIssue {
    MissingPatientName,
    MissingDateOfBirth,
    InvalidDateOfBirth,
    MissingGender,
    MissingDiagnosis,
    MissingDoctorName,
    MissingDoctorSpecialization,
}

impl ValidationIssue {
    /// Dotted path of the offending field, for form-level display.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationIssue::MissingPatientName => "patient.full_name",
            ValidationIssue::MissingDateOfBirth | ValidationIssue::InvalidDateOfBirth => {
                "patient.date_of_birth"
            }
            ValidationIssue::MissingGender => "patient.gender",
            ValidationIssue::MissingDiagnosis => "diagnosis",
            ValidationIssue::MissingDoctorName => "doctor.full_name",
            ValidationIssue::MissingDoctorSpecialization => "doctor.specialization",
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            ValidationIssue::MissingPatientName => "patient full name is required",
            ValidationIssue::MissingDateOfBirth => "patient date of birth is required",
            ValidationIssue::InvalidDateOfBirth => "patient date of birth must be YYYY-MM-DD",
            ValidationIssue::MissingGender => "patient gender is required",
            ValidationIssue::MissingDiagnosis => "at least one diagnosis is required",
            ValidationIssue::MissingDoctorName => "doctor full name is required",
            ValidationIssue::MissingDoctorSpecialization => "doctor specialization is required",
        };
        f.write_str(message)
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn is_blank_opt(value: Option<&str>) -> bool {
    value.map(is_blank).unwrap_or(true)
}

/// Whether `value` is a calendar date in `YYYY-MM-DD` form.
pub fn is_valid_date(value: &str) -> bool {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).is_ok()
}

impl EyeReport {
    /// List every problem blocking submission. Empty iff the report is
    /// submittable. Does not modify the report.
    pub fn validate_complete(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        if is_blank(&self.patient.full_name) {
            issues.push(ValidationIssue::MissingPatientName);
        }
        match self.patient.date_of_birth.as_deref() {
            Some(dob) if !is_blank(dob) => {
                if !is_valid_date(dob) {
                    issues.push(ValidationIssue::InvalidDateOfBirth);
                }
            }
            _ => issues.push(ValidationIssue::MissingDateOfBirth),
        }
        if is_blank_opt(self.patient.gender.as_deref()) {
            issues.push(ValidationIssue::MissingGender);
        }
        if self.diagnosis.is_empty() {
            issues.push(ValidationIssue::MissingDiagnosis);
        }
        if is_blank(&self.doctor.full_name) {
            issues.push(ValidationIssue::MissingDoctorName);
        }
        if is_blank(&self.doctor.specialization) {
            issues.push(ValidationIssue::MissingDoctorSpecialization);
        }

        issues
    }

    /// Whether the report can be submitted.
    pub fn is_complete(&self) -> bool {
        self.validate_complete().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_dates() {
        assert!(is_valid_date("1985-03-14"));
        assert!(is_valid_date(" 2000-02-29 "));
        assert!(!is_valid_date("2001-02-29"));
        assert!(!is_valid_date("14.03.1985"));
        assert!(!is_valid_date(""));
    }

    #[test]
    fn test_issue_fields() {
        assert_eq!(
            ValidationIssue::MissingDoctorSpecialization.field(),
            "doctor.specialization"
        );
        assert_eq!(
            ValidationIssue::InvalidDateOfBirth.field(),
            ValidationIssue::MissingDateOfBirth.field()
        );
    }

    #[test]
    fn test_issue_display() {
        assert_eq!(
            ValidationIssue::MissingDiagnosis.to_string(),
            "at least one diagnosis is required"
        );
    }
}
