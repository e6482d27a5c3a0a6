use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

use super::validation::{optional_url, require_text, trim_optional};
use crate::document::application::domain::patch::PatchField;
use crate::document::application::domain::record::{
    CollectionEntity, NoFilter, Record, ValidationError,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// ISO date: `YYYY-MM-DD`, `YYYY-MM`, `YYYY` or an RFC 3339 timestamp.
    pub date: String,
    #[serde(default)]
    pub certificate_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub display_order: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AchievementPatch {
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub title: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub description: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub date: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub certificate_url: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub image_url: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub display_order: PatchField<i32>,
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d"))
        .or_else(|_| NaiveDate::parse_from_str(&format!("{value}-01-01"), "%Y-%m-%d"))
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

impl CollectionEntity for Achievement {
    const COLLECTION: &'static str = "achievements";
    type Patch = AchievementPatch;
    type Filter = NoFilter;

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("title", &self.title, 200)?;
        if parse_date(&self.date).is_none() {
            return Err(ValidationError::new("date", "must be an ISO date"));
        }
        optional_url("certificate_url", self.certificate_url.as_deref())?;
        optional_url("image_url", self.image_url.as_deref())?;
        Ok(())
    }

    fn normalize(&mut self) {
        self.title = self.title.trim().to_string();
        self.date = self.date.trim().to_string();
        trim_optional(&mut self.certificate_url);
        trim_optional(&mut self.image_url);
    }

    /// Newest first. Unparseable dates sink to the end.
    fn sort(records: &mut [Record<Self>]) {
        records.sort_by_key(|r| Reverse(parse_date(&r.data.date)));
    }
}
