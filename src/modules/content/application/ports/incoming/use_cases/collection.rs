use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::document::application::document_service::DocumentError;
use crate::document::application::domain::record::{CollectionEntity, Record, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("Record not found")]
    NotFound,

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Authentication required")]
    Unauthenticated,

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<DocumentError> for ContentError {
    fn from(e: DocumentError) -> Self {
        match e {
            DocumentError::NotFound => ContentError::NotFound,
            DocumentError::Unauthenticated => ContentError::Unauthenticated,
            DocumentError::PermissionDenied(msg) => ContentError::PermissionDenied(msg),
            DocumentError::InvalidPayload(msg) => {
                ContentError::Validation(ValidationError::new("body", msg))
            }
            other => ContentError::RepositoryError(other.to_string()),
        }
    }
}

/// Typed CRUD over one content collection.
#[async_trait]
pub trait CollectionUseCase<T: CollectionEntity>: Send + Sync {
    /// Owner-scoped, sorted.
    async fn get_all(&self, owner: UserId, filter: T::Filter)
        -> Result<Vec<Record<T>>, ContentError>;

    /// Every owner, sorted.
    async fn get_all_public(&self, filter: T::Filter) -> Result<Vec<Record<T>>, ContentError>;

    async fn get_by_id(&self, id: Uuid) -> Result<Record<T>, ContentError>;

    async fn create(&self, owner: UserId, draft: T) -> Result<Record<T>, ContentError>;

    async fn update(&self, id: Uuid, patch: T::Patch) -> Result<Record<T>, ContentError>;

    /// Deleting a missing id succeeds.
    async fn delete(&self, id: Uuid) -> Result<(), ContentError>;
}
