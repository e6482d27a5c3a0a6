use chrono::{DateTime, Duration, Utc};
use serde_json::Value;
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::document::application::domain::document::{
    Document, FieldFilter, JsonObject, ListScope, RESERVED_KEYS,
};
use crate::document::application::ports::outgoing::{
    DocumentQuery, DocumentStore, DocumentStoreError,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    #[error("Authentication required")]
    Unauthenticated,

    #[error("Document not found")]
    NotFound,

    #[error("Document already exists")]
    AlreadyExists,

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Invalid document payload: {0}")]
    InvalidPayload(String),

    #[error("Document store error: {0}")]
    StoreError(String),
}

impl From<DocumentStoreError> for DocumentError {
    fn from(e: DocumentStoreError) -> Self {
        match e {
            DocumentStoreError::NotFound => DocumentError::NotFound,
            DocumentStoreError::AlreadyExists => DocumentError::AlreadyExists,
            DocumentStoreError::PermissionDenied(msg) => DocumentError::PermissionDenied(msg),
            DocumentStoreError::DatabaseError(msg) | DocumentStoreError::Malformed(msg) => {
                error!(error = %msg, "Document store failure");
                DocumentError::StoreError(msg)
            }
        }
    }
}

/// Create/read/update/delete/list over named collections.
///
/// Every write stamps ownership and timestamps and goes straight to the store.
#[derive(Clone)]
pub struct DocumentService {
    store: Arc<dyn DocumentStore>,
}

impl DocumentService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn create(
        &self,
        collection: &str,
        owner: Option<UserId>,
        data: Value,
    ) -> Result<Document, DocumentError> {
        self.create_with_id(collection, Uuid::new_v4(), owner, data)
            .await
    }

    pub async fn create_with_id(
        &self,
        collection: &str,
        id: Uuid,
        owner: Option<UserId>,
        data: Value,
    ) -> Result<Document, DocumentError> {
        let owner = owner.ok_or(DocumentError::Unauthenticated)?;
        let data = into_payload(data)?;
        let now = Utc::now();

        let document = Document {
            id,
            collection: collection.to_string(),
            owner,
            data,
            created_at: now,
            updated_at: now,
        };

        Ok(self.store.insert(document).await?)
    }

    pub async fn update(
        &self,
        collection: &str,
        id: Uuid,
        partial: Value,
    ) -> Result<Document, DocumentError> {
        let current = self
            .get(collection, id)
            .await?
            .ok_or(DocumentError::NotFound)?;

        self.update_document(&current, partial).await
    }

    /// Merge into a document the caller already holds, skipping the re-read.
    pub async fn update_document(
        &self,
        current: &Document,
        partial: Value,
    ) -> Result<Document, DocumentError> {
        let partial = into_payload(partial)?;
        let stamp = next_update_stamp(current.updated_at);

        Ok(self
            .store
            .merge(&current.collection, current.id, partial, stamp)
            .await?)
    }

    pub async fn delete(&self, collection: &str, id: Uuid) -> Result<(), DocumentError> {
        Ok(self.store.remove(collection, id).await?)
    }

    pub async fn get(&self, collection: &str, id: Uuid) -> Result<Option<Document>, DocumentError> {
        Ok(self.store.fetch(collection, id).await?)
    }

    pub async fn list(
        &self,
        collection: &str,
        filters: Vec<FieldFilter>,
        scope: ListScope,
    ) -> Result<Vec<Document>, DocumentError> {
        let owner = match scope {
            ListScope::Public => None,
            ListScope::Owner(owner) => Some(owner),
        };

        Ok(self
            .store
            .query(DocumentQuery {
                collection: collection.to_string(),
                owner,
                filters,
            })
            .await?)
    }
}

fn into_payload(data: Value) -> Result<JsonObject, DocumentError> {
    match data {
        Value::Object(mut map) => {
            for key in RESERVED_KEYS {
                map.remove(key);
            }
            Ok(map)
        }
        other => Err(DocumentError::InvalidPayload(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Strictly after `previous`, with a millisecond floor so the stamp survives
/// the store's timestamp precision.
fn next_update_stamp(previous: DateTime<Utc>) -> DateTime<Utc> {
    std::cmp::max(Utc::now(), previous + Duration::milliseconds(1))
}
