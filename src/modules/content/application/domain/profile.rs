use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::validation::{optional_email, optional_url, trim_optional};
use crate::document::application::domain::patch::PatchField;
use crate::document::application::domain::record::{
    CollectionEntity, NoFilter, Record, ValidationError,
};

/// Well-known id of the single current profile document.
pub const PROFILE_ID: Uuid = Uuid::from_u128(0x0000_0000_0000_4000_8000_7072_6f66_696c);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub twitter_url: Option<String>,
    #[serde(default)]
    pub resume_url: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Omitted fields are kept, `null` clears a field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ProfilePatch {
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub full_name: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub title: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub subtitle: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub email: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub phone: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub bio: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub location: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub website: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub github_url: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub linkedin_url: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub twitter_url: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub resume_url: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub avatar_url: PatchField<String>,
}

impl ProfilePatch {
    pub fn avatar(url: impl Into<String>) -> Self {
        Self {
            avatar_url: PatchField::Value(url.into()),
            ..Default::default()
        }
    }
}

impl CollectionEntity for Profile {
    const COLLECTION: &'static str = "profiles";
    type Patch = ProfilePatch;
    type Filter = NoFilter;

    fn validate(&self) -> Result<(), ValidationError> {
        optional_email("email", self.email.as_deref())?;

        for (field, value) in [
            ("website", &self.website),
            ("github_url", &self.github_url),
            ("linkedin_url", &self.linkedin_url),
            ("twitter_url", &self.twitter_url),
            ("resume_url", &self.resume_url),
            ("avatar_url", &self.avatar_url),
        ] {
            optional_url(field, value.as_deref())?;
        }
        Ok(())
    }

    fn normalize(&mut self) {
        for value in [
            &mut self.full_name,
            &mut self.title,
            &mut self.subtitle,
            &mut self.email,
            &mut self.phone,
            &mut self.bio,
            &mut self.location,
            &mut self.website,
            &mut self.github_url,
            &mut self.linkedin_url,
            &mut self.twitter_url,
            &mut self.resume_url,
            &mut self.avatar_url,
        ] {
            trim_optional(value);
        }
    }

    fn sort(_records: &mut [Record<Self>]) {}
}
