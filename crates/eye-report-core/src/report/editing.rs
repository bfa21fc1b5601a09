//! Draft creation and checked edits.
//!
//! Every categorical edit requires the value to be an exact label from the
//! report locale's option list. Every edit fails once the report is sealed.

use crate::models::{
    Diagnosis, DiagnosisScope, DoctorInfo, Eye, EyeExamination, EyeReport, Measurement,
    PatientInfo, ReportStatus,
};
use crate::projector::{LocalizedCategory, LocalizedVocabulary};
use crate::vocabulary::{Category, VocabularyError};

use super::seal::is_sealed;
use super::suggest::suggest_option;
use super::validation::{is_valid_date, DATE_FORMAT};
use super::{ReportError, ReportResult};

fn localized(
    vocabulary: &LocalizedVocabulary,
    category: Category,
) -> ReportResult<&LocalizedCategory> {
    vocabulary
        .category(category)
        .ok_or_else(|| VocabularyError::UnknownCategory(category.to_string()).into())
}

/// Normal default for a category, or its first option.
fn default_label(vocabulary: &LocalizedVocabulary, category: Category) -> ReportResult<String> {
    localized(vocabulary, category)?
        .default_label()
        .map(str::to_string)
        .ok_or_else(|| VocabularyError::EmptyCategory(category).into())
}

fn default_examination(vocabulary: &LocalizedVocabulary) -> ReportResult<EyeExamination> {
    let mut exam = EyeExamination::default();
    for category in Category::ANATOMICAL {
        let label = default_label(vocabulary, category)?;
        if let Some(slot) = exam.finding_mut(category) {
            *slot = label;
        }
    }
    Ok(exam)
}

fn push_unique(list: &mut Vec<String>, value: &str) -> bool {
    if list.iter().any(|v| v == value) {
        return false;
    }
    list.push(value.to_string());
    true
}

fn remove_value(list: &mut Vec<String>, value: &str) -> bool {
    let before = list.len();
    list.retain(|v| v != value);
    list.len() != before
}

impl EyeReport {
    /// Start a new encounter.
    ///
    /// Both eyes start with every finding at its normal default, or the first
    /// option when the category has none. The report takes the snapshot's
    /// locale.
    pub fn create_draft(
        patient: PatientInfo,
        doctor: DoctorInfo,
        vocabulary: &LocalizedVocabulary,
    ) -> ReportResult<Self> {
        let right_eye = default_examination(vocabulary)?;
        let left_eye = right_eye.clone();
        let iop_method = default_label(vocabulary, Category::IopMethods)?;

        let now = chrono::Utc::now();
        let mut report = Self {
            report_id: uuid::Uuid::new_v4().to_string(),
            locale: vocabulary.locale(),
            status: ReportStatus::Draft,
            amends: None,
            report_date: now.date_naive().format(DATE_FORMAT).to_string(),
            patient: PatientInfo::default(),
            complaints: Vec::new(),
            anamnesis: String::new(),
            comorbidities: Vec::new(),
            both_eyes: None,
            right_eye,
            left_eye,
            diagnosis: Diagnosis::default(),
            recommendations: Vec::new(),
            iop_method,
            doctor,
            created_at: now.to_rfc3339(),
            updated_at: now.to_rfc3339(),
        };
        report.set_patient(vocabulary, patient)?;

        tracing::debug!(
            report_id = %report.report_id,
            locale = %report.locale,
            "created report draft"
        );
        Ok(report)
    }

    pub(crate) fn ensure_editable(&self) -> ReportResult<()> {
        if self.is_submitted() || is_sealed(&self.report_id) {
            return Err(ReportError::ReportSealed(self.report_id.clone()));
        }
        Ok(())
    }

    /// Check that `value` may be stored for `category` in this report.
    fn check_option(
        &self,
        vocabulary: &LocalizedVocabulary,
        category: Category,
        value: &str,
    ) -> ReportResult<()> {
        self.ensure_editable()?;

        if vocabulary.locale() != self.locale {
            return Err(ReportError::LocaleMismatch {
                expected: self.locale,
                found: vocabulary.locale(),
            });
        }

        let options = localized(vocabulary, category)?;
        if !options.contains(value) {
            tracing::debug!(
                report_id = %self.report_id,
                %category,
                value,
                "rejected value outside option list"
            );
            return Err(ReportError::InvalidOption {
                category,
                value: value.to_string(),
                suggestion: suggest_option(options, value),
            });
        }
        Ok(())
    }

    /// Record a per-eye finding.
    pub fn set_finding(
        &mut self,
        vocabulary: &LocalizedVocabulary,
        eye: Eye,
        category: Category,
        value: &str,
    ) -> ReportResult<()> {
        self.ensure_editable()?;
        if !category.is_anatomical() {
            return Err(ReportError::NotAnExaminationCategory(category));
        }
        self.check_option(vocabulary, category, value)?;

        if let Some(slot) = self.eye_mut(eye).finding_mut(category) {
            *slot = value.to_string();
        }
        self.touch();

        tracing::debug!(report_id = %self.report_id, %eye, %category, value, "set finding");
        Ok(())
    }

    /// Record a free-form measurement.
    pub fn set_measurement(
        &mut self,
        eye: Eye,
        measurement: Measurement,
        value: impl Into<String>,
    ) -> ReportResult<()> {
        self.ensure_editable()?;
        *self.eye_mut(eye).measurements.get_mut(measurement) = value.into();
        self.touch();
        Ok(())
    }

    /// Replace patient details. Gender and city, when present, must be labels
    /// from their categories; blank ones are stored as absent.
    pub fn set_patient(
        &mut self,
        vocabulary: &LocalizedVocabulary,
        mut patient: PatientInfo,
    ) -> ReportResult<()> {
        self.ensure_editable()?;
        patient.gender = patient.gender.filter(|g| !g.trim().is_empty());
        patient.city = patient.city.filter(|c| !c.trim().is_empty());

        if let Some(gender) = patient.gender.as_deref() {
            self.check_option(vocabulary, Category::Gender, gender)?;
        }
        if let Some(city) = patient.city.as_deref() {
            self.check_option(vocabulary, Category::Cities, city)?;
        }

        self.patient = patient;
        self.touch();
        Ok(())
    }

    pub fn set_gender(&mut self, vocabulary: &LocalizedVocabulary, value: &str) -> ReportResult<()> {
        self.check_option(vocabulary, Category::Gender, value)?;
        self.patient.gender = Some(value.to_string());
        self.touch();
        Ok(())
    }

    pub fn set_city(&mut self, vocabulary: &LocalizedVocabulary, value: &str) -> ReportResult<()> {
        self.check_option(vocabulary, Category::Cities, value)?;
        self.patient.city = Some(value.to_string());
        self.touch();
        Ok(())
    }

    pub fn set_doctor(&mut self, doctor: DoctorInfo) -> ReportResult<()> {
        self.ensure_editable()?;
        self.doctor = doctor;
        self.touch();
        Ok(())
    }

    pub fn set_anamnesis(&mut self, anamnesis: impl Into<String>) -> ReportResult<()> {
        self.ensure_editable()?;
        self.anamnesis = anamnesis.into();
        self.touch();
        Ok(())
    }

    /// Set or clear the free-text finding shared by both eyes.
    pub fn set_both_eyes_note(&mut self, note: Option<String>) -> ReportResult<()> {
        self.ensure_editable()?;
        self.both_eyes = note.filter(|n| !n.trim().is_empty());
        self.touch();
        Ok(())
    }

    pub fn set_report_date(&mut self, date: &str) -> ReportResult<()> {
        self.ensure_editable()?;
        if !is_valid_date(date) {
            return Err(ReportError::InvalidDate(date.to_string()));
        }
        self.report_date = date.trim().to_string();
        self.touch();
        Ok(())
    }

    pub fn set_iop_method(&mut self, vocabulary: &LocalizedVocabulary, value: &str) -> ReportResult<()> {
        self.check_option(vocabulary, Category::IopMethods, value)?;
        self.iop_method = value.to_string();
        self.touch();
        Ok(())
    }

    /// Add a complaint. Adding one already present is a no-op.
    pub fn add_complaint(&mut self, vocabulary: &LocalizedVocabulary, value: &str) -> ReportResult<()> {
        self.check_option(vocabulary, Category::Complaints, value)?;
        if push_unique(&mut self.complaints, value) {
            self.touch();
        }
        Ok(())
    }

    pub fn remove_complaint(&mut self, value: &str) -> ReportResult<bool> {
        self.ensure_editable()?;
        let removed = remove_value(&mut self.complaints, value);
        if removed {
            self.touch();
        }
        Ok(removed)
    }

    pub fn add_comorbidity(&mut self, vocabulary: &LocalizedVocabulary, value: &str) -> ReportResult<()> {
        self.check_option(vocabulary, Category::Comorbidities, value)?;
        if push_unique(&mut self.comorbidities, value) {
            self.touch();
        }
        Ok(())
    }

    pub fn remove_comorbidity(&mut self, value: &str) -> ReportResult<bool> {
        self.ensure_editable()?;
        let removed = remove_value(&mut self.comorbidities, value);
        if removed {
            self.touch();
        }
        Ok(removed)
    }

    /// Add a diagnosis for one eye or both.
    pub fn add_diagnosis(
        &mut self,
        vocabulary: &LocalizedVocabulary,
        scope: DiagnosisScope,
        value: &str,
    ) -> ReportResult<()> {
        self.check_option(vocabulary, Category::Diagnosis, value)?;
        if push_unique(self.diagnosis.get_mut(scope), value) {
            self.touch();
        }
        Ok(())
    }

    pub fn remove_diagnosis(&mut self, scope: DiagnosisScope, value: &str) -> ReportResult<bool> {
        self.ensure_editable()?;
        let removed = remove_value(self.diagnosis.get_mut(scope), value);
        if removed {
            self.touch();
        }
        Ok(removed)
    }

    pub fn add_recommendation(
        &mut self,
        vocabulary: &LocalizedVocabulary,
        value: &str,
    ) -> ReportResult<()> {
        self.check_option(vocabulary, Category::Recommendations, value)?;
        if push_unique(&mut self.recommendations, value) {
            self.touch();
        }
        Ok(())
    }

    pub fn remove_recommendation(&mut self, value: &str) -> ReportResult<bool> {
        self.ensure_editable()?;
        let removed = remove_value(&mut self.recommendations, value);
        if removed {
            self.touch();
        }
        Ok(removed)
    }
}
