//! Per-eye examination findings and measurements.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::vocabulary::Category;

/// Which eye a finding belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Eye {
    Right,
    Left,
}

impl fmt::Display for Eye {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Eye::Right => "right",
            Eye::Left => "left",
        })
    }
}

/// One eye's full finding set.
///
/// Categorical fields hold labels from the report locale's option lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EyeExamination {
    pub globe: String,
    pub muscles: String,
    pub lids_lacrimal: String,
    pub conjunctiva: String,
    pub sclera: String,
    pub cornea: String,
    pub anterior_chamber: String,
    pub iris_pupil: String,
    pub lens: String,
    pub vitreous: String,
    pub fundus: String,
    pub measurements: Measurements,
}

impl EyeExamination {
    /// The finding recorded for an anatomical category.
    ///
    /// Returns `None` for categories that are not per-eye findings.
    pub fn finding(&self, category: Category) -> Option<&str> {
        let value = match category {
            Category::Globe => &self.globe,
            Category::Muscles => &self.muscles,
            Category::LidsLacrimal => &self.lids_lacrimal,
            Category::Conjunctiva => &self.conjunctiva,
            Category::Sclera => &self.sclera,
            Category::Cornea => &self.cornea,
            Category::AnteriorChamber => &self.anterior_chamber,
            Category::IrisPupil => &self.iris_pupil,
            Category::Lens => &self.lens,
            Category::Vitreous => &self.vitreous,
            Category::Fundus => &self.fundus,
            _ => return None,
        };
        Some(value.as_str())
    }

    pub(crate) fn finding_mut(&mut self, category: Category) -> Option<&mut String> {
        let value = match category {
            Category::Globe => &mut self.globe,
            Category::Muscles => &mut self.muscles,
            Category::LidsLacrimal => &mut self.lids_lacrimal,
            Category::Conjunctiva => &mut self.conjunctiva,
            Category::Sclera => &mut self.sclera,
            Category::Cornea => &mut self.cornea,
            Category::AnteriorChamber => &mut self.anterior_chamber,
            Category::IrisPupil => &mut self.iris_pupil,
            Category::Lens => &mut self.lens,
            Category::Vitreous => &mut self.vitreous,
            Category::Fundus => &mut self.fundus,
            _ => return None,
        };
        Some(value)
    }

    /// All findings in examination order.
    pub fn findings(&self) -> Vec<(Category, &str)> {
        Category::ANATOMICAL
            .iter()
            .filter_map(|&category| self.finding(category).map(|value| (category, value)))
            .collect()
    }
}

/// A measured quantity recorded per eye.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Measurement {
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

impl Measurement {
    pub const ALL: [Measurement; 10] = [
        Measurement::VisualAcuityUncorrected,
        Measurement::VisualAcuityCorrected,
        Measurement::RefractionSphere,
        Measurement::RefractionCylinder,
        Measurement::RefractionAxis,
        Measurement::IntraocularPressure,
        Measurement::AxialLength,
        Measurement::Pachymetry,
        Measurement::Gonioscopy,
        Measurement::BScan,
    ];
}

/// Measured quantities. Values are free-form, unit-less and locale-formatted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Measurements {
    pub visual_acuity_uncorrected: String,
    pub visual_acuity_corrected: String,
    pub refraction_sphere: String,
    pub refraction_cylinder: String,
    pub refraction_axis: String,
    pub intraocular_pressure: String,
    pub axial_length: String,
    pub pachymetry: String,
    pub gonioscopy: String,
    pub b_scan: String,
}

impl Measurements {
    pub fn get(&self, measurement: Measurement) -> &str {
        match measurement {
            Measurement::VisualAcuityUncorrected => &self.visual_acuity_uncorrected,
            Measurement::VisualAcuityCorrected => &self.visual_acuity_corrected,
            Measurement::RefractionSphere => &self.refraction_sphere,
            Measurement::RefractionCylinder => &self.refraction_cylinder,
            Measurement::RefractionAxis => &self.refraction_axis,
            Measurement::IntraocularPressure => &self.intraocular_pressure,
            Measurement::AxialLength => &self.axial_length,
            Measurement::Pachymetry => &self.pachymetry,
            Measurement::Gonioscopy => &self.gonioscopy,
            Measurement::BScan => &self.b_scan,
        }
    }

    pub(crate) fn get_mut(&mut self, measurement: Measurement) -> &mut String {
        match measurement {
            Measurement::VisualAcuityUncorrected => &mut self.visual_acuity_uncorrected,
            Measurement::VisualAcuityCorrected => &mut self.visual_acuity_corrected,
            Measurement::RefractionSphere => &mut self.refraction_sphere,
            Measurement::RefractionCylinder => &mut self.refraction_cylinder,
            Measurement::RefractionAxis => &mut self.refraction_axis,
            Measurement::IntraocularPressure => &mut self.intraocular_pressure,
            Measurement::AxialLength => &mut self.axial_length,
            Measurement::Pachymetry => &mut self.pachymetry,
            Measurement::Gonioscopy => &mut self.gonioscopy,
            Measurement::BScan => &mut self.b_scan,
        }
    }
}
