use serde::{Deserialize, Serialize};

use super::validation::{require_text, trim_optional};
use crate::document::application::domain::patch::PatchField;
use crate::document::application::domain::record::{
    sort_by_display_order, CollectionEntity, NoFilter, Record, ValidationError,
};

const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1900..=2100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    #[serde(default)]
    pub field_of_study: Option<String>,
    pub start_year: i32,
    /// Always `None` while `is_current` is set.
    #[serde(default)]
    pub end_year: Option<i32>,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub display_order: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EducationPatch {
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub institution: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub degree: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub field_of_study: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub start_year: PatchField<i32>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub end_year: PatchField<i32>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub is_current: PatchField<bool>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub grade: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub description: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub display_order: PatchField<i32>,
}

impl CollectionEntity for Education {
    const COLLECTION: &'static str = "education";
    type Patch = EducationPatch;
    type Filter = NoFilter;

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("institution", &self.institution, 200)?;
        require_text("degree", &self.degree, 200)?;

        if !YEAR_RANGE.contains(&self.start_year) {
            return Err(ValidationError::new("start_year", "must be a plausible year"));
        }

        if let Some(end_year) = self.end_year {
            if !YEAR_RANGE.contains(&end_year) {
                return Err(ValidationError::new("end_year", "must be a plausible year"));
            }
            if end_year < self.start_year {
                return Err(ValidationError::new(
                    "end_year",
                    "must not be before start_year",
                ));
            }
        }
        Ok(())
    }

    fn normalize(&mut self) {
        self.institution = self.institution.trim().to_string();
        self.degree = self.degree.trim().to_string();
        trim_optional(&mut self.field_of_study);
        trim_optional(&mut self.grade);
        trim_optional(&mut self.description);

        if self.is_current {
            self.end_year = None;
        }
    }

    fn sort(records: &mut [Record<Self>]) {
        sort_by_display_order(records, |e| e.display_order);
    }
}
