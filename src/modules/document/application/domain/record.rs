use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::document::{Document, FieldFilter, JsonObject};
use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A typed entity stored as the data of a document in `COLLECTION`.
pub trait CollectionEntity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const COLLECTION: &'static str;

    /// Partial update payload. Serializes to the object merged into the stored data.
    type Patch: Serialize + DeserializeOwned + Send + Sync + 'static;

    /// List filter accepted from the query string.
    type Filter: DeserializeOwned + Default + Send + Sync + 'static;

    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }

    /// Canonicalizes derived fields before the entity is written.
    fn normalize(&mut self) {}

    fn filter_fields(_filter: &Self::Filter) -> Vec<FieldFilter> {
        Vec::new()
    }

    /// Orders a list in place. Store order is creation order, so stable sorts keep ties put.
    fn sort(records: &mut [Record<Self>]);

    /// Normalizes and validates a new entity.
    fn prepared(mut self) -> Result<Self, ValidationError> {
        self.normalize();
        self.validate()?;
        Ok(self)
    }

    /// Applies `patch` over stored `data` and returns the resulting entity, prepared.
    fn apply_patch(data: &JsonObject, patch: &Self::Patch) -> Result<Self, ValidationError> {
        let partial = match serde_json::to_value(patch) {
            Ok(Value::Object(partial)) => partial,
            Ok(_) => return Err(ValidationError::new("body", "patch must be a JSON object")),
            Err(e) => return Err(ValidationError::new("body", e.to_string())),
        };

        let mut merged = data.clone();
        merged.extend(partial);

        let entity: Self = serde_json::from_value(Value::Object(merged))
            .map_err(|e| ValidationError::new("body", e.to_string()))?;

        entity.prepared()
    }
}

/// Filter for collections that accept none. Unknown query keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoFilter {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<T> {
    pub id: Uuid,
    pub user_id: UserId,
    #[serde(flatten)]
    pub data: T,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<T: DeserializeOwned> TryFrom<Document> for Record<T> {
    type Error = serde_json::Error;

    fn try_from(doc: Document) -> Result<Self, Self::Error> {
        let data = serde_json::from_value(Value::Object(doc.data))?;

        Ok(Self {
            id: doc.id,
            user_id: doc.owner,
            data,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
        })
    }
}

pub fn sort_by_display_order<T>(records: &mut [Record<T>], display_order: impl Fn(&T) -> i32) {
    records.sort_by_key(|record| display_order(&record.data));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::application::domain::patch::PatchField;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        title: String,
        #[serde(default)]
        display_order: i32,
    }

    fn document(data: serde_json::Value) -> Document {
        let now = Utc::now();
        Document {
            id: Uuid::new_v4(),
            collection: "notes".to_string(),
            owner: UserId::from(Uuid::new_v4()),
            data: data.as_object().cloned().unwrap(),
            created_at: now,
            updated_at: now,
        }
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    struct NotePatch {
        #[serde(default, skip_serializing_if = "PatchField::is_unset")]
        title: PatchField<String>,
    }

    impl CollectionEntity for Note {
        const COLLECTION: &'static str = "notes";
        type Patch = NotePatch;
        type Filter = NoFilter;

        fn validate(&self) -> Result<(), ValidationError> {
            if self.title.is_empty() {
                return Err(ValidationError::new("title", "must not be empty"));
            }
            Ok(())
        }

        fn normalize(&mut self) {
            self.title = self.title.trim().to_string();
        }

        fn sort(records: &mut [Record<Self>]) {
            sort_by_display_order(records, |n| n.display_order);
        }
    }

    #[test]
    fn apply_patch_merges_over_stored_data() {
        let stored = json!({ "title": "Old", "display_order": 4 });
        let patch = NotePatch {
            title: PatchField::Value("  New  ".to_string()),
        };

        let note = Note::apply_patch(stored.as_object().unwrap(), &patch).unwrap();
        assert_eq!(note.title, "New");
        assert_eq!(note.display_order, 4);
    }

    #[test]
    fn apply_patch_rejects_nulling_required_field() {
        let stored = json!({ "title": "Old" });
        let patch = NotePatch {
            title: PatchField::Null,
        };

        let err = Note::apply_patch(stored.as_object().unwrap(), &patch).unwrap_err();
        assert_eq!(err.field, "body");
    }

    #[test]
    fn prepared_runs_validation_after_normalizing() {
        let blank = Note {
            title: "   ".to_string(),
            display_order: 0,
        };

        assert_eq!(blank.prepared().unwrap_err().field, "title");
    }

    #[test]
    fn record_from_document_keeps_identity_and_timestamps() {
        let doc = document(json!({ "title": "First", "display_order": 3 }));
        let record: Record<Note> = Record::try_from(doc.clone()).unwrap();

        assert_eq!(record.id, doc.id);
        assert_eq!(record.user_id, doc.owner);
        assert_eq!(record.created_at, doc.created_at);
        assert_eq!(record.data.title, "First");
        assert_eq!(record.data.display_order, 3);
    }

    #[test]
    fn record_serializes_flat() {
        let doc = document(json!({ "title": "Flat" }));
        let record: Record<Note> = Record::try_from(doc.clone()).unwrap();
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["title"], "Flat");
        assert_eq!(json["id"], doc.id.to_string());
        assert_eq!(json["user_id"], doc.owner.to_string());
    }

    #[test]
    fn record_from_malformed_document_fails() {
        let doc = document(json!({ "display_order": "first" }));
        assert!(Record::<Note>::try_from(doc).is_err());
    }

    #[test]
    fn display_order_sort_is_stable_on_ties() {
        let mut records: Vec<Record<Note>> = [("b", 1), ("a", 0), ("c", 1)]
            .into_iter()
            .map(|(title, order)| {
                Record::try_from(document(json!({ "title": title, "display_order": order })))
                    .unwrap()
            })
            .collect();

        sort_by_display_order(&mut records, |n| n.display_order);

        let titles: Vec<_> = records.iter().map(|r| r.data.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }
}
