use serde::{Deserialize, Serialize};

use super::validation::{require_text, trim_optional};
use crate::document::application::domain::patch::PatchField;
use crate::document::application::domain::record::{
    sort_by_display_order, CollectionEntity, NoFilter, Record, ValidationError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
    Other,
}

fn default_proficiency() -> i32 {
    50
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: SkillCategory,
    #[serde(default = "default_proficiency")]
    pub proficiency: i32,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub display_order: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillPatch {
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub name: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub category: PatchField<SkillCategory>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub proficiency: PatchField<i32>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub icon: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub display_order: PatchField<i32>,
}

impl CollectionEntity for Skill {
    const COLLECTION: &'static str = "skills";
    type Patch = SkillPatch;
    type Filter = NoFilter;

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name, 100)?;

        if !(0..=100).contains(&self.proficiency) {
            return Err(ValidationError::new(
                "proficiency",
                "must be between 0 and 100",
            ));
        }
        Ok(())
    }

    fn normalize(&mut self) {
        self.name = self.name.trim().to_string();
        trim_optional(&mut self.icon);
    }

    fn sort(records: &mut [Record<Self>]) {
        sort_by_display_order(records, |s| s.display_order);
    }
}
