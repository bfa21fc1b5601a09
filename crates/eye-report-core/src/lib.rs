//! Eye Report Core Library
//!
//! Ophthalmology examination vocabulary, localization and report assembly.
//!
//! # Architecture
//!
//! ```text
//!   Vocabulary (canonical, uz)          LocaleBundle (uz / ru / en)
//!              │                                  │
//!              └──────────► Projector ◄───────────┘
//!                               │
//!                      LocalizedVocabulary
//!                               │
//!                  create_draft / set_finding / ...
//!                               │
//!                     [EyeReport: Draft]
//!                               │
//!                     validate_complete
//!                               │
//!                 ┌─────────────▼─────────────┐
//!                 │          submit           │
//!                 │ hash = sha256(report_json)│
//!                 └─────────────┬─────────────┘
//!                               │
//!                        SubmittedReport ──► amend ──► new Draft
//! ```
//!
//! # Core Principle
//!
//! **Every categorical value comes from the option list.** A report never
//! stores a label its locale's projection does not offer.
//!
//! # Modules
//!
//! - [`vocabulary`]: Canonical option lists and normal defaults
//! - [`projector`]: Locale projection and translation coverage
//! - [`models`]: Report, examination and participant types
//! - [`report`]: Checked editing, validation, submission and amendment
//! - [`config`]: Startup configuration

pub mod config;
pub mod models;
pub mod projector;
pub mod report;
pub mod vocabulary;

// Re-export commonly used types
pub use config::CoreConfig;
pub use eye_report_locales::{Locale, LocaleBundle};
pub use models::{
    Diagnosis, DiagnosisScope, DoctorInfo, Eye, EyeExamination, EyeReport, Measurement,
    Measurements, PatientInfo, ReportStatus,
};
pub use projector::{
    CanonicalTranslator, LocalizedCategory, LocalizedVocabulary, MissingTranslationPolicy,
    Projector, Translate,
};
pub use report::{ReportError, SubmittedReport, ValidationIssue};
pub use vocabulary::{Category, Vocabulary};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tracing_subscriber::EnvFilter;

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum EyeReportError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid option: {0}")]
    InvalidOption(String),

    #[error("Incomplete report: {0}")]
    IncompleteReport(String),

    #[error("Report sealed: {0}")]
    ReportSealed(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Localization error: {0}")]
    LocalizationError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<ReportError> for EyeReportError {
    fn from(e: ReportError) -> Self {
        let message = e.to_string();
        match e {
            ReportError::InvalidOption { .. } => EyeReportError::InvalidOption(message),
            ReportError::IncompleteReport(_) => EyeReportError::IncompleteReport(message),
            ReportError::ReportSealed(_) => EyeReportError::ReportSealed(message),
            ReportError::Json(_) => EyeReportError::SerializationError(message),
            ReportError::LocaleMismatch { .. } => EyeReportError::LocalizationError(message),
            ReportError::NotAnExaminationCategory(_)
            | ReportError::InvalidDate(_)
            | ReportError::Vocabulary(_) => EyeReportError::InvalidInput(message),
        }
    }
}

impl From<vocabulary::VocabularyError> for EyeReportError {
    fn from(e: vocabulary::VocabularyError) -> Self {
        EyeReportError::InvalidInput(e.to_string())
    }
}

impl From<projector::ProjectionError> for EyeReportError {
    fn from(e: projector::ProjectionError) -> Self {
        EyeReportError::LocalizationError(e.to_string())
    }
}

impl From<eye_report_locales::BundleError> for EyeReportError {
    fn from(e: eye_report_locales::BundleError) -> Self {
        EyeReportError::LocalizationError(e.to_string())
    }
}

impl From<anyhow::Error> for EyeReportError {
    fn from(e: anyhow::Error) -> Self {
        EyeReportError::ConfigurationError(format!("{:#}", e))
    }
}

impl From<serde_json::Error> for EyeReportError {
    fn from(e: serde_json::Error) -> Self {
        EyeReportError::SerializationError(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for EyeReportError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        EyeReportError::InternalError(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Install a `tracing` subscriber writing to stderr.
///
/// `filter` uses `EnvFilter` syntax; when absent, `RUST_LOG` is used, then
/// `info`. Does nothing if a subscriber is already installed.
#[uniffi::export]
pub fn init_logging(filter: Option<String>) {
    let filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Locales the built-in vocabulary can be projected into.
#[uniffi::export]
pub fn supported_locales() -> Vec<FfiLocale> {
    Locale::ALL.into_iter().map(FfiLocale::from).collect()
}

/// Open a session using configuration from the environment.
///
/// `locale_code` overrides the configured default locale when present.
#[uniffi::export]
pub fn open_session(locale_code: Option<String>) -> Result<Arc<EyeReportSession>, EyeReportError> {
    let config = CoreConfig::from_env()?;
    let locale = match locale_code {
        Some(code) => Locale::from_code(&code)?,
        None => config.default_locale(),
    };
    Ok(Arc::new(EyeReportSession::new(&config, locale)?))
}

/// Open a session with explicit settings.
#[uniffi::export]
pub fn open_session_with_config(
    locale_code: String,
    strict_translations: bool,
    bundle_dir: Option<String>,
) -> Result<Arc<EyeReportSession>, EyeReportError> {
    let locale = Locale::from_code(&locale_code)?;
    let policy = if strict_translations {
        MissingTranslationPolicy::Strict
    } else {
        MissingTranslationPolicy::FallbackToCanonical
    };
    let config = CoreConfig::new(locale, policy, bundle_dir.map(PathBuf::from));
    Ok(Arc::new(EyeReportSession::new(&config, locale)?))
}

// =========================================================================
// Main API Object
// =========================================================================

#[derive(Default)]
struct SessionState {
    reports: HashMap<String, EyeReport>,
    submitted: HashMap<String, SubmittedReport>,
}

/// One locale's vocabulary plus the reports authored against it.
#[derive(uniffi::Object)]
pub struct EyeReportSession {
    vocabulary: LocalizedVocabulary,
    state: Mutex<SessionState>,
}

impl EyeReportSession {
    /// Project the vocabulary for `locale` using `config`.
    pub fn new(config: &CoreConfig, locale: Locale) -> Result<Self, EyeReportError> {
        let vocabulary = config.localized(locale)?;
        tracing::debug!(locale = %locale, "opened report session");
        Ok(Self {
            vocabulary,
            state: Mutex::new(SessionState::default()),
        })
    }

    pub fn vocabulary(&self) -> &LocalizedVocabulary {
        &self.vocabulary
    }

    fn category(&self, id: &str) -> Result<&LocalizedCategory, EyeReportError> {
        let category: Category = id.parse()?;
        self.vocabulary
            .category(category)
            .ok_or_else(|| EyeReportError::NotFound(format!("category {}", category)))
    }

    fn with_report<R>(
        &self,
        report_id: &str,
        edit: impl FnOnce(&mut EyeReport, &LocalizedVocabulary) -> report::ReportResult<R>,
    ) -> Result<R, EyeReportError> {
        let mut state = self.state.lock()?;
        let report = state
            .reports
            .get_mut(report_id)
            .ok_or_else(|| EyeReportError::NotFound(format!("report {}", report_id)))?;
        Ok(edit(report, &self.vocabulary)?)
    }
}

#[uniffi::export]
impl EyeReportSession {
    /// Locale code of this session.
    pub fn locale(&self) -> String {
        self.vocabulary.locale().code().to_string()
    }

    // =========================================================================
    // Vocabulary Operations
    // =========================================================================

    /// Category ids in registry order.
    pub fn list_categories(&self) -> Vec<String> {
        self.vocabulary
            .categories()
            .into_iter()
            .map(|c| c.as_str().to_string())
            .collect()
    }

    /// Localized option labels for a category, in display order.
    pub fn options(&self, category: String) -> Result<Vec<String>, EyeReportError> {
        let category = self.category(&category)?;
        Ok(category.labels().into_iter().map(str::to_string).collect())
    }

    /// Localized normal default for a category, if it declares one.
    pub fn normal_default(&self, category: String) -> Result<Option<String>, EyeReportError> {
        let category = self.category(&category)?;
        Ok(category.normal().map(str::to_string))
    }

    // =========================================================================
    // Report Operations
    // =========================================================================

    /// Create a new draft. Returns its report id.
    pub fn create_draft(
        &self,
        patient: FfiPatientInfo,
        doctor: FfiDoctorInfo,
    ) -> Result<String, EyeReportError> {
        let report = EyeReport::create_draft(patient.into(), doctor.into(), &self.vocabulary)?;
        let report_id = report.report_id().to_string();
        self.state.lock()?.reports.insert(report_id.clone(), report);
        Ok(report_id)
    }

    pub fn set_finding(
        &self,
        report_id: String,
        eye: FfiEye,
        category: String,
        value: String,
    ) -> Result<(), EyeReportError> {
        let category: Category = category.parse()?;
        self.with_report(&report_id, |report, vocabulary| {
            report.set_finding(vocabulary, eye.into(), category, &value)
        })
    }

    pub fn set_measurement(
        &self,
        report_id: String,
        eye: FfiEye,
        measurement: FfiMeasurement,
        value: String,
    ) -> Result<(), EyeReportError> {
        self.with_report(&report_id, |report, _| {
            report.set_measurement(eye.into(), measurement.into(), value)
        })
    }

    pub fn set_patient(
        &self,
        report_id: String,
        patient: FfiPatientInfo,
    ) -> Result<(), EyeReportError> {
        self.with_report(&report_id, |report, vocabulary| {
            report.set_patient(vocabulary, patient.into())
        })
    }

    pub fn set_doctor(&self, report_id: String, doctor: FfiDoctorInfo) -> Result<(), EyeReportError> {
        self.with_report(&report_id, |report, _| report.set_doctor(doctor.into()))
    }

    pub fn set_anamnesis(&self, report_id: String, anamnesis: String) -> Result<(), EyeReportError> {
        self.with_report(&report_id, |report, _| report.set_anamnesis(anamnesis))
    }

    pub fn add_complaint(&self, report_id: String, value: String) -> Result<(), EyeReportError> {
        self.with_report(&report_id, |report, vocabulary| {
            report.add_complaint(vocabulary, &value)
        })
    }

    pub fn add_comorbidity(&self, report_id: String, value: String) -> Result<(), EyeReportError> {
        self.with_report(&report_id, |report, vocabulary| {
            report.add_comorbidity(vocabulary, &value)
        })
    }

    pub fn add_diagnosis(
        &self,
        report_id: String,
        scope: FfiDiagnosisScope,
        value: String,
    ) -> Result<(), EyeReportError> {
        self.with_report(&report_id, |report, vocabulary| {
            report.add_diagnosis(vocabulary, scope.into(), &value)
        })
    }

    pub fn add_recommendation(&self, report_id: String, value: String) -> Result<(), EyeReportError> {
        self.with_report(&report_id, |report, vocabulary| {
            report.add_recommendation(vocabulary, &value)
        })
    }

    /// Problems blocking submission. Empty when the report is complete.
    pub fn validate(&self, report_id: String) -> Result<Vec<FfiValidationIssue>, EyeReportError> {
        self.with_report(&report_id, |report, _| {
            Ok(report
                .validate_complete()
                .into_iter()
                .map(FfiValidationIssue::from)
                .collect())
        })
    }

    /// Seal a report.
    pub fn submit(&self, report_id: String) -> Result<FfiSubmittedReport, EyeReportError> {
        let mut state = self.state.lock()?;
        let report = state
            .reports
            .get_mut(&report_id)
            .ok_or_else(|| EyeReportError::NotFound(format!("report {}", report_id)))?;
        let submitted = report.submit()?;
        let ffi = FfiSubmittedReport::from(&submitted);
        state.submitted.insert(report_id, submitted);
        Ok(ffi)
    }

    /// Open an amendment draft for a submitted report. Returns the new id.
    pub fn amend(&self, report_id: String) -> Result<String, EyeReportError> {
        let mut state = self.state.lock()?;
        let submitted = state.submitted.get(&report_id).ok_or_else(|| {
            EyeReportError::NotFound(format!("submitted report {}", report_id))
        })?;
        let draft = submitted.amend();
        let draft_id = draft.report_id().to_string();
        state.reports.insert(draft_id.clone(), draft);
        Ok(draft_id)
    }

    /// Whether a submitted report still matches its content hash.
    pub fn verify(&self, report_id: String) -> Result<bool, EyeReportError> {
        let state = self.state.lock()?;
        let submitted = state.submitted.get(&report_id).ok_or_else(|| {
            EyeReportError::NotFound(format!("submitted report {}", report_id))
        })?;
        Ok(submitted.verify())
    }

    /// Report as pretty-printed JSON.
    pub fn report_json(&self, report_id: String) -> Result<String, EyeReportError> {
        self.with_report(&report_id, |report, _| Ok(serde_json::to_string_pretty(report)?))
    }

    /// Ids of all reports in this session.
    pub fn report_ids(&self) -> Result<Vec<String>, EyeReportError> {
        let state = self.state.lock()?;
        let mut ids: Vec<String> = state.reports.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe locale description.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiLocale {
    pub code: String,
    pub name: String,
    pub native_name: String,
    pub canonical: bool,
}

impl From<Locale> for FfiLocale {
    fn from(locale: Locale) -> Self {
        Self {
            code: locale.code().to_string(),
            name: locale.name().to_string(),
            native_name: locale.native_name().to_string(),
            canonical: locale.is_canonical(),
        }
    }
}

/// FFI-safe patient details.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPatientInfo {
    pub full_name: String,
    pub date_of_birth: Option<String>,
    pub gender: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl From<FfiPatientInfo> for PatientInfo {
    fn from(patient: FfiPatientInfo) -> Self {
        PatientInfo {
            full_name: patient.full_name,
            date_of_birth: patient.date_of_birth,
            gender: patient.gender,
            city: patient.city,
            phone: patient.phone,
            address: patient.address,
        }
    }
}

/// FFI-safe doctor details.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDoctorInfo {
    pub full_name: String,
    pub specialization: String,
    pub clinic: Option<String>,
}

impl From<FfiDoctorInfo> for DoctorInfo {
    fn from(doctor: FfiDoctorInfo) -> Self {
        DoctorInfo {
            full_name: doctor.full_name,
            specialization: doctor.specialization,
            clinic: doctor.clinic,
        }
    }
}

#[derive(Debug, Clone, Copy, uniffi::Enum)]
pub enum FfiEye {
    Right,
    Left,
}

impl From<FfiEye> for Eye {
    fn from(eye: FfiEye) -> Self {
        match eye {
            FfiEye::Right => Eye::Right,
            FfiEye::Left => Eye::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, uniffi::Enum)]
pub enum FfiDiagnosisScope {
    RightEye,
    LeftEye,
    BothEyes,
}

impl From<FfiDiagnosisScope> for DiagnosisScope {
    fn from(scope: FfiDiagnosisScope) -> Self {
        match scope {
            FfiDiagnosisScope::RightEye => DiagnosisScope::RightEye,
            FfiDiagnosisScope::LeftEye => DiagnosisScope::LeftEye,
            FfiDiagnosisScope::BothEyes => DiagnosisScope::BothEyes,
        }
    }
}

#[derive(Debug, Clone, Copy, uniffi::Enum)]
pub enum FfiMeasurement {
    VisualAcuityUncorrected,
    VisualAcuityCorrected,
    RefractionSphere,
    RefractionCylinder,
    RefractionAxis,
    IntraocularPressure,
    AxialLength,
    Pachymetry,
    Gonioscopy,
    BScan,
}

impl From<FfiMeasurement> for Measurement {
    fn from(measurement: FfiMeasurement) -> Self {
        match measurement {
            FfiMeasurement::VisualAcuityUncorrected => Measurement::VisualAcuityUncorrected,
            FfiMeasurement::VisualAcuityCorrected => Measurement::VisualAcuityCorrected,
            FfiMeasurement::RefractionSphere => Measurement::RefractionSphere,
            FfiMeasurement::RefractionCylinder => Measurement::RefractionCylinder,
            FfiMeasurement::RefractionAxis => Measurement::RefractionAxis,
            FfiMeasurement::IntraocularPressure => Measurement::IntraocularPressure,
            FfiMeasurement::AxialLength => Measurement::AxialLength,
            FfiMeasurement::Pachymetry => Measurement::Pachymetry,
            FfiMeasurement::Gonioscopy => Measurement::Gonioscopy,
            FfiMeasurement::BScan => Measurement::BScan,
        }
    }
}

/// FFI-safe validation issue.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiValidationIssue {
    pub field: String,
    pub message: String,
}

impl From<ValidationIssue> for FfiValidationIssue {
    fn from(issue: ValidationIssue) -> Self {
        Self {
            field: issue.field().to_string(),
            message: issue.to_string(),
        }
    }
}

/// FFI-safe submission result.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSubmittedReport {
    pub report_id: String,
    pub submitted_at: String,
    pub content_hash: String,
}

impl From<&SubmittedReport> for FfiSubmittedReport {
    fn from(submitted: &SubmittedReport) -> Self {
        Self {
            report_id: submitted.report_id().to_string(),
            submitted_at: submitted.submitted_at().to_string(),
            content_hash: submitted.content_hash().to_string(),
        }
    }
}
