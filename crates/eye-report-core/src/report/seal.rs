//! Submission: sealing a complete report and amending sealed ones.
//!
//! Sealing is tracked per report id in a process-wide registry, so clones and
//! deserialized copies of a submitted report are sealed too.

use std::collections::HashSet;
use std::sync::{Mutex, OnceLock, PoisonError};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::models::{EyeReport, ReportStatus};

use super::{ReportError, ReportResult};

static SEALED_IDS: OnceLock<Mutex<HashSet<String>>> = OnceLock::new();

fn sealed_ids() -> &'static Mutex<HashSet<String>> {
    SEALED_IDS.get_or_init(|| Mutex::new(HashSet::new()))
}

/// Whether a report with this id has been submitted in this process.
pub(crate) fn is_sealed(report_id: &str) -> bool {
    sealed_ids()
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .contains(report_id)
}

/// Claim `report_id` for sealing. False if it was already sealed.
fn seal_id(report_id: &str) -> bool {
    sealed_ids()
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(report_id.to_string())
}

/// A sealed report with the SHA-256 of its canonical JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmittedReport {
    report: EyeReport,
    submitted_at: String,
    content_hash: String,
}

impl SubmittedReport {
    pub fn report(&self) -> &EyeReport {
        &self.report
    }

    pub fn report_id(&self) -> &str {
        self.report.report_id()
    }

    pub fn submitted_at(&self) -> &str {
        &self.submitted_at
    }

    /// Hex-encoded SHA-256 of the report's canonical JSON at submission.
    pub fn content_hash(&self) -> &str {
        &self.content_hash
    }

    /// Recompute the content hash and compare.
    pub fn verify(&self) -> bool {
        match self.report.to_canonical_json() {
            Ok(json) => hash_data(json.as_bytes()) == self.content_hash,
            Err(_) => false,
        }
    }

    /// Start a correcting draft.
    ///
    /// The sealed report is left untouched; the new draft copies its content,
    /// gets a fresh id, and points back at the original through `amends`.
    pub fn amend(&self) -> EyeReport {
        let now = chrono::Utc::now().to_rfc3339();
        let mut draft = self.report.clone();
        draft.report_id = uuid::Uuid::new_v4().to_string();
        draft.amends = Some(self.report.report_id.clone());
        draft.status = ReportStatus::Draft;
        draft.created_at = now.clone();
        draft.updated_at = now;

        tracing::info!(
            report_id = %draft.report_id,
            amends = %self.report.report_id,
            "opened amendment draft"
        );
        draft
    }

    pub fn to_json(&self) -> ReportResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl EyeReport {
    /// Seal the report.
    ///
    /// Fails with the full issue list when the report is incomplete. On
    /// success the report id is sealed: this value and every copy sharing its
    /// id reject further edits and a second submission.
    pub fn submit(&mut self) -> ReportResult<SubmittedReport> {
        self.ensure_editable()?;

        let issues = self.validate_complete();
        if !issues.is_empty() {
            tracing::debug!(
                report_id = %self.report_id,
                issues = issues.len(),
                "submission rejected"
            );
            return Err(ReportError::IncompleteReport(issues));
        }

        let mut sealed = self.clone();
        sealed.status = ReportStatus::Submitted;
        sealed.touch();
        let content_hash = hash_data(sealed.to_canonical_json()?.as_bytes());

        if !seal_id(&self.report_id) {
            return Err(ReportError::ReportSealed(self.report_id.clone()));
        }
        *self = sealed.clone();

        tracing::info!(
            report_id = %self.report_id,
            content_hash = %content_hash,
            "report submitted"
        );

        Ok(SubmittedReport {
            submitted_at: sealed.updated_at.clone(),
            report: sealed,
            content_hash,
        })
    }
}

/// Compute SHA-256 hash of data.
pub fn hash_data(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DiagnosisScope, DoctorInfo, Eye, PatientInfo};
    use crate::projector::{CanonicalTranslator, LocalizedVocabulary, MissingTranslationPolicy, Projector};
    use crate::report::ValidationIssue;
    use crate::vocabulary::{Category, Vocabulary};
    use eye_report_locales::Locale;

    fn uz() -> LocalizedVocabulary {
        let vocabulary = Vocabulary::get();
        Projector::new(vocabulary, MissingTranslationPolicy::Strict)
            .project_all(Locale::Uz, &CanonicalTranslator::new(vocabulary))
            .unwrap()
    }

    fn complete_report(vocabulary: &LocalizedVocabulary) -> EyeReport {
        let mut patient = PatientInfo::new("Aziza Karimova");
        patient.date_of_birth = Some("1985-03-14".into());
        patient.gender = Some("ayol".into());

        let mut report = EyeReport::create_draft(
            patient,
            DoctorInfo::new("Dr. Rustamov", "oftalmolog"),
            vocabulary,
        )
        .unwrap();
        report
            .add_diagnosis(vocabulary, DiagnosisScope::BothEyes, "katarakta")
            .unwrap();
        report
    }

    #[test]
    fn test_hash_data() {
        assert_eq!(
            hash_data(b"hello"),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn test_submit_seals_report() {
        let vocabulary = uz();
        let mut report = complete_report(&vocabulary);

        let submitted = report.submit().unwrap();
        assert!(report.is_submitted());
        assert_eq!(submitted.report().status(), ReportStatus::Submitted);
        assert_eq!(submitted.content_hash().len(), 64);
        assert!(submitted.verify());

        let result = report.add_complaint(&vocabulary, "qizarish");
        assert!(matches!(result, Err(ReportError::ReportSealed(_))));
        assert!(matches!(report.submit(), Err(ReportError::ReportSealed(_))));
    }

    #[test]
    fn test_submit_rejects_incomplete() {
        let vocabulary = uz();
        let mut report = EyeReport::create_draft(
            PatientInfo::new("Aziza Karimova"),
            DoctorInfo::new("Dr. Rustamov", ""),
            &vocabulary,
        )
        .unwrap();

        match report.submit() {
            Err(ReportError::IncompleteReport(issues)) => {
                assert_eq!(
                    issues,
                    vec![
                        ValidationIssue::MissingDateOfBirth,
                        ValidationIssue::MissingGender,
                        ValidationIssue::MissingDiagnosis,
                        ValidationIssue::MissingDoctorSpecialization,
                    ]
                );
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(!report.is_submitted());
    }

    #[test]
    fn test_amend_creates_linked_draft() {
        let vocabulary = uz();
        let mut report = complete_report(&vocabulary);
        let submitted = report.submit().unwrap();

        let mut amendment = submitted.amend();
        assert_ne!(amendment.report_id(), submitted.report_id());
        assert_eq!(amendment.amends(), Some(submitted.report_id()));
        assert_eq!(amendment.status(), ReportStatus::Draft);
        assert_eq!(amendment.diagnosis(), submitted.report().diagnosis());

        amendment.add_complaint(&vocabulary, "qizarish").unwrap();
        assert!(submitted.verify());
        assert!(submitted.report().complaints().is_empty());
    }

    #[test]
    fn test_copy_of_submitted_report_is_sealed() {
        let vocabulary = uz();
        let mut report = complete_report(&vocabulary);
        let mut copy = report.clone();
        let mut restored: EyeReport =
            serde_json::from_str(&report.to_canonical_json().unwrap()).unwrap();

        let submitted = report.submit().unwrap();
        assert!(!copy.is_submitted());

        let result = copy.set_finding(&vocabulary, Eye::Right, Category::Globe, "atrofiya");
        assert!(matches!(result, Err(ReportError::ReportSealed(ref id)) if id == submitted.report_id()));
        assert!(matches!(copy.submit(), Err(ReportError::ReportSealed(_))));

        assert!(matches!(
            restored.set_anamnesis("edited"),
            Err(ReportError::ReportSealed(_))
        ));
        assert_eq!(copy.right_eye().globe, "normada");
    }

    #[test]
    fn test_amendment_of_sealed_report_is_editable() {
        let vocabulary = uz();
        let mut report = complete_report(&vocabulary);
        let copy = report.clone();
        let submitted = report.submit().unwrap();

        let mut amendment = submitted.amend();
        amendment
            .set_finding(&vocabulary, Eye::Right, Category::Globe, "atrofiya")
            .unwrap();
        assert!(amendment.submit().unwrap().verify());
        assert!(is_sealed(copy.report_id()));
    }

    #[test]
    fn test_verify_detects_tampering() {
        let vocabulary = uz();
        let mut report = complete_report(&vocabulary);
        let mut submitted = report.submit().unwrap();

        submitted.report.patient.full_name = "Someone Else".into();
        assert!(!submitted.verify());
    }
}
