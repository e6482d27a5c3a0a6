use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

pub type JsonObject = serde_json::Map<String, Value>;

/// Keys the document layer owns. They are stripped from caller payloads.
pub const RESERVED_KEYS: [&str; 4] = ["id", "user_id", "created_at", "updated_at"];

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: Uuid,
    pub collection: String,
    pub owner: UserId,
    pub data: JsonObject,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Equality on a top-level data field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldFilter {
    pub field: String,
    pub value: Value,
}

impl FieldFilter {
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn matches(&self, data: &JsonObject) -> bool {
        data.get(&self.field) == Some(&self.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListScope {
    /// Every document in the collection, regardless of owner.
    Public,
    /// Only documents owned by the given identity.
    Owner(UserId),
}
