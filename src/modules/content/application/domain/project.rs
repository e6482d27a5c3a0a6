use serde::{Deserialize, Serialize};

use super::validation::{optional_url, require_text, trim_optional};
use crate::document::application::domain::patch::PatchField;
use crate::document::application::domain::record::{
    sort_by_display_order, CollectionEntity, NoFilter, Record, ValidationError,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub long_description: Option<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub display_order: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectPatch {
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub title: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub description: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub long_description: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub tech_stack: PatchField<Vec<String>>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub github_url: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub live_url: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub image_url: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub is_featured: PatchField<bool>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub display_order: PatchField<i32>,
}

impl CollectionEntity for Project {
    const COLLECTION: &'static str = "projects";
    type Patch = ProjectPatch;
    type Filter = NoFilter;

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("title", &self.title, 200)?;
        require_text("description", &self.description, 2000)?;
        optional_url("github_url", self.github_url.as_deref())?;
        optional_url("live_url", self.live_url.as_deref())?;
        optional_url("image_url", self.image_url.as_deref())?;

        if self.tech_stack.iter().any(|t| t.is_empty()) {
            return Err(ValidationError::new(
                "tech_stack",
                "entries must not be empty",
            ));
        }
        Ok(())
    }

    fn normalize(&mut self) {
        self.title = self.title.trim().to_string();
        self.description = self.description.trim().to_string();
        self.tech_stack = self
            .tech_stack
            .iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        trim_optional(&mut self.long_description);
        trim_optional(&mut self.github_url);
        trim_optional(&mut self.live_url);
        trim_optional(&mut self.image_url);
    }

    fn sort(records: &mut [Record<Self>]) {
        sort_by_display_order(records, |p| p.display_order);
    }
}
