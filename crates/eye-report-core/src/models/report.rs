//! The eye report aggregate.
//!
//! Fields are crate-private: every edit goes through the checked operations
//! in [`crate::report`], which enforce option membership and the sealed state.

use eye_report_locales::Locale;
use serde::{Deserialize, Serialize};

use super::examination::{Eye, EyeExamination};
use super::participants::{DoctorInfo, PatientInfo};

/// Report lifecycle status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    /// Being authored; edits allowed
    Draft,
    /// Sealed; no further edits
    Submitted,
}

/// Which eye(s) a diagnosis applies to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosisScope {
    RightEye,
    LeftEye,
    BothEyes,
}

/// Diagnoses, recorded separately per eye and for both eyes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Diagnosis {
    pub right_eye: Vec<String>,
    pub left_eye: Vec<String>,
    pub both_eyes: Vec<String>,
}

impl Diagnosis {
    pub fn get(&self, scope: DiagnosisScope) -> &[String] {
        match scope {
            DiagnosisScope::RightEye => &self.right_eye,
            DiagnosisScope::LeftEye => &self.left_eye,
            DiagnosisScope::BothEyes => &self.both_eyes,
        }
    }

    pub(crate) fn get_mut(&mut self, scope: DiagnosisScope) -> &mut Vec<String> {
        match scope {
            DiagnosisScope::RightEye => &mut self.right_eye,
            DiagnosisScope::LeftEye => &mut self.left_eye,
            DiagnosisScope::BothEyes => &mut self.both_eyes,
        }
    }

    /// True when no scope has a diagnosis.
    pub fn is_empty(&self) -> bool {
        self.right_eye.is_empty() && self.left_eye.is_empty() && self.both_eyes.is_empty()
    }
}

/// A complete clinical record for one encounter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EyeReport {
    pub(crate) report_id: String,
    pub(crate) locale: Locale,
    pub(crate) status: ReportStatus,
    /// Report this one corrects, if any
    pub(crate) amends: Option<String>,
    /// Encounter date (YYYY-MM-DD)
    pub(crate) report_date: String,
    pub(crate) patient: PatientInfo,
    pub(crate) complaints: Vec<String>,
    pub(crate) anamnesis: String,
    pub(crate) comorbidities: Vec<String>,
    /// Free-text finding shared by both eyes
    pub(crate) both_eyes: Option<String>,
    pub(crate) right_eye: EyeExamination,
    pub(crate) left_eye: EyeExamination,
    pub(crate) diagnosis: Diagnosis,
    pub(crate) recommendations: Vec<String>,
    pub(crate) iop_method: String,
    pub(crate) doctor: DoctorInfo,
    pub(crate) created_at: String,
    pub(crate) updated_at: String,
}

impl EyeReport {
    pub fn report_id(&self) -> &str {
        &self.report_id
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn status(&self) -> ReportStatus {
        self.status
    }

    pub fn is_submitted(&self) -> bool {
        self.status == ReportStatus::Submitted
    }

    pub fn amends(&self) -> Option<&str> {
        self.amends.as_deref()
    }

    pub fn report_date(&self) -> &str {
        &self.report_date
    }

    pub fn patient(&self) -> &PatientInfo {
        &self.patient
    }

    pub fn complaints(&self) -> &[String] {
        &self.complaints
    }

    pub fn anamnesis(&self) -> &str {
        &self.anamnesis
    }

    pub fn comorbidities(&self) -> &[String] {
        &self.comorbidities
    }

    pub fn both_eyes(&self) -> Option<&str> {
        self.both_eyes.as_deref()
    }

    pub fn eye(&self, eye: Eye) -> &EyeExamination {
        match eye {
            Eye::Right => &self.right_eye,
            Eye::Left => &self.left_eye,
        }
    }

    pub(crate) fn eye_mut(&mut self, eye: Eye) -> &mut EyeExamination {
        match eye {
            Eye::Right => &mut self.right_eye,
            Eye::Left => &mut self.left_eye,
        }
    }

    pub fn right_eye(&self) -> &EyeExamination {
        &self.right_eye
    }

    pub fn left_eye(&self) -> &EyeExamination {
        &self.left_eye
    }

    pub fn diagnosis(&self) -> &Diagnosis {
        &self.diagnosis
    }

    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }

    pub fn iop_method(&self) -> &str {
        &self.iop_method
    }

    pub fn doctor(&self) -> &DoctorInfo {
        &self.doctor
    }

    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    pub fn updated_at(&self) -> &str {
        &self.updated_at
    }

    /// Touch the updated_at timestamp.
    pub(crate) fn touch(&mut self) {
        self.updated_at = chrono::Utc::now().to_rfc3339();
    }

    /// Serialize to canonical JSON for content hashing.
    pub fn to_canonical_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnosis_scopes() {
        let mut diagnosis = Diagnosis::default();
        assert!(diagnosis.is_empty());

        diagnosis.get_mut(DiagnosisScope::LeftEye).push("katarakta".into());
        assert!(!diagnosis.is_empty());
        assert_eq!(diagnosis.get(DiagnosisScope::LeftEye), ["katarakta".to_string()]);
        assert!(diagnosis.get(DiagnosisScope::RightEye).is_empty());
    }

    #[test]
    fn test_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&ReportStatus::Submitted).unwrap(),
            "\"submitted\""
        );
        assert_eq!(
            serde_json::to_string(&DiagnosisScope::BothEyes).unwrap(),
            "\"both_eyes\""
        );
    }
}
