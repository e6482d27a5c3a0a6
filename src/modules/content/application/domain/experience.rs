use serde::{Deserialize, Serialize};

use super::validation::{require_text, trim_optional};
use crate::document::application::domain::document::FieldFilter;
use crate::document::application::domain::patch::PatchField;
use crate::document::application::domain::record::{
    sort_by_display_order, CollectionEntity, Record, ValidationError,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceKind {
    Work,
    #[default]
    Leadership,
}

impl ExperienceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceKind::Work => "work",
            ExperienceKind::Leadership => "leadership",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    #[serde(rename = "type", default)]
    pub kind: ExperienceKind,
    pub title: String,
    pub organization: String,
    #[serde(default)]
    pub description: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub display_order: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperiencePatch {
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "PatchField::is_unset"
    )]
    pub kind: PatchField<ExperienceKind>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub title: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub organization: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub description: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub start_date: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub end_date: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub is_current: PatchField<bool>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub display_order: PatchField<i32>,
}

/// `?type=work|leadership`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExperienceFilter {
    #[serde(rename = "type", default)]
    pub kind: Option<ExperienceKind>,
}

impl ExperienceFilter {
    pub fn of_kind(kind: ExperienceKind) -> Self {
        Self { kind: Some(kind) }
    }
}

impl CollectionEntity for Experience {
    const COLLECTION: &'static str = "experiences";
    type Patch = ExperiencePatch;
    type Filter = ExperienceFilter;

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("title", &self.title, 200)?;
        require_text("organization", &self.organization, 200)?;
        require_text("start_date", &self.start_date, 40)?;
        Ok(())
    }

    fn normalize(&mut self) {
        self.title = self.title.trim().to_string();
        self.organization = self.organization.trim().to_string();
        self.start_date = self.start_date.trim().to_string();
        trim_optional(&mut self.end_date);

        if self.is_current {
            self.end_date = None;
        }
    }

    fn filter_fields(filter: &Self::Filter) -> Vec<FieldFilter> {
        filter
            .kind
            .map(|kind| vec![FieldFilter::eq("type", kind.as_str())])
            .unwrap_or_default()
    }

    fn sort(records: &mut [Record<Self>]) {
        sort_by_display_order(records, |e| e.display_order);
    }
}
