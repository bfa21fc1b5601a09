//! Patient and doctor details carried on a report.

use serde::{Deserialize, Serialize};

/// Patient details.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PatientInfo {
    /// Full name
    pub full_name: String,
    /// Date of birth (YYYY-MM-DD)
    pub date_of_birth: Option<String>,
    /// Gender, a label from the `gender` category
    pub gender: Option<String>,
    /// City of residence, a label from the `cities` category
    pub city: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl PatientInfo {
    /// Create patient details with only a name.
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            ..Self::default()
        }
    }
}

/// Examining doctor details.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DoctorInfo {
    /// Full name
    pub full_name: String,
    /// Specialization (e.g. "ophthalmologist")
    pub specialization: String,
    /// Clinic name
    pub clinic: Option<String>,
}

impl DoctorInfo {
    pub fn new(full_name: impl Into<String>, specialization: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            specialization: specialization.into(),
            clinic: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_patient() {
        let patient = PatientInfo::new("Aziza Karimova");
        assert_eq!(patient.full_name, "Aziza Karimova");
        assert!(patient.date_of_birth.is_none());
        assert!(patient.gender.is_none());
    }

    #[test]
    fn test_new_doctor() {
        let doctor = DoctorInfo::new("Dr. Rustamov", "ophthalmologist");
        assert_eq!(doctor.specialization, "ophthalmologist");
        assert!(doctor.clinic.is_none());
    }
}
