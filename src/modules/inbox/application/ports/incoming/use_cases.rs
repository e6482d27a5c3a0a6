use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::content::application::ports::incoming::use_cases::ContentError;
use crate::document::application::document_service::DocumentError;
use crate::document::application::domain::record::{Record, ValidationError};
use crate::inbox::application::domain::{InboxEntity, ProjectQuestion};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InboxError {
    #[error("Record not found")]
    NotFound,

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Cannot move from {from} to {to}")]
    InvalidTransition { from: &'static str, to: &'static str },

    #[error("The portfolio has no profile yet")]
    SiteNotConfigured,

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ContentError> for InboxError {
    fn from(e: ContentError) -> Self {
        match e {
            ContentError::NotFound => InboxError::NotFound,
            ContentError::Validation(v) => InboxError::Validation(v),
            ContentError::PermissionDenied(msg) => InboxError::PermissionDenied(msg),
            ContentError::Unauthenticated => {
                InboxError::RepositoryError("inbox write without an owner".to_string())
            }
            ContentError::RepositoryError(msg) => InboxError::RepositoryError(msg),
        }
    }
}

impl From<DocumentError> for InboxError {
    fn from(e: DocumentError) -> Self {
        ContentError::from(e).into()
    }
}

/// Visitor submissions plus the admin status workflow for one inbox kind.
#[async_trait]
pub trait InboxUseCase<T: InboxEntity>: Send + Sync {
    /// Stores a visitor submission addressed to the portfolio owner.
    async fn submit(&self, submission: T::Submission) -> Result<Record<T>, InboxError>;

    /// Owner-scoped, newest first, optionally restricted to one status.
    async fn get_all(
        &self,
        owner: UserId,
        status: Option<T::Status>,
    ) -> Result<Vec<Record<T>>, InboxError>;

    /// Returns the record, marking it processed first when the kind asks for that.
    async fn open(&self, id: Uuid) -> Result<Record<T>, InboxError>;

    async fn set_status(&self, id: Uuid, status: T::Status) -> Result<Record<T>, InboxError>;

    /// Deleting a missing id succeeds.
    async fn delete(&self, id: Uuid) -> Result<(), InboxError>;
}

#[async_trait]
pub trait AnswerQuestionUseCase: Send + Sync {
    /// Stores the answer, stamps `answered_at` and marks the question answered.
    async fn answer(&self, id: Uuid, answer: String)
        -> Result<Record<ProjectQuestion>, InboxError>;
}
