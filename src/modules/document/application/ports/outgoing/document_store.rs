use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::document::application::domain::document::{Document, FieldFilter, JsonObject};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentStoreError {
    #[error("Document already exists")]
    AlreadyExists,

    #[error("Document not found")]
    NotFound,

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Stored document is malformed: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentQuery {
    pub collection: String,
    pub owner: Option<UserId>,
    pub filters: Vec<FieldFilter>,
}

/// Persistence for schemaless documents grouped in named collections.
///
/// `query` returns documents in creation order.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn insert(&self, document: Document) -> Result<Document, DocumentStoreError>;

    /// Shallow-merges `partial` into the stored data and sets `updated_at`.
    async fn merge(
        &self,
        collection: &str,
        id: Uuid,
        partial: JsonObject,
        updated_at: DateTime<Utc>,
    ) -> Result<Document, DocumentStoreError>;

    /// Removing a missing document is not an error.
    async fn remove(&self, collection: &str, id: Uuid) -> Result<(), DocumentStoreError>;

    async fn fetch(&self, collection: &str, id: Uuid)
        -> Result<Option<Document>, DocumentStoreError>;

    async fn query(&self, query: DocumentQuery) -> Result<Vec<Document>, DocumentStoreError>;
}
