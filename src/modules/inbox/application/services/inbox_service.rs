use async_trait::async_trait;
use chrono::Utc;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::content::application::domain::validation::require_text;
use crate::content::application::ports::incoming::use_cases::ProfileUseCase;
use crate::content::application::services::{to_json, to_record};
use crate::document::application::document_service::DocumentService;
use crate::document::application::domain::document::{Document, FieldFilter, ListScope};
use crate::document::application::domain::record::Record;
use crate::inbox::application::domain::{InboxEntity, InboxStatus, ProjectQuestion, QuestionPatch};
use crate::inbox::application::ports::incoming::use_cases::{
    AnswerQuestionUseCase, InboxError, InboxUseCase,
};

pub struct InboxService<T> {
    documents: DocumentService,
    profile: Arc<dyn ProfileUseCase>,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for InboxService<T> {
    fn clone(&self) -> Self {
        Self {
            documents: self.documents.clone(),
            profile: Arc::clone(&self.profile),
            _entity: PhantomData,
        }
    }
}

impl<T: InboxEntity> InboxService<T> {
    pub fn new(documents: DocumentService, profile: Arc<dyn ProfileUseCase>) -> Self {
        Self {
            documents,
            profile,
            _entity: PhantomData,
        }
    }

    async fn fetch(&self, id: Uuid) -> Result<(Document, Record<T>), InboxError> {
        let document = self
            .documents
            .get(T::COLLECTION, id)
            .await?
            .ok_or(InboxError::NotFound)?;
        let record = to_record(document.clone())?;

        Ok((document, record))
    }

    async fn write_patch(
        &self,
        current: &Document,
        patch: &T::Patch,
    ) -> Result<Record<T>, InboxError> {
        let entity = T::apply_patch(&current.data, patch)?;
        let document = self
            .documents
            .update_document(current, to_json(&entity)?)
            .await?;

        Ok(to_record(document)?)
    }
}

#[async_trait]
impl<T: InboxEntity> InboxUseCase<T> for InboxService<T> {
    async fn submit(&self, submission: T::Submission) -> Result<Record<T>, InboxError> {
        let owner = self
            .profile
            .get_current()
            .await?
            .map(|profile| profile.user_id)
            .ok_or_else(|| {
                warn!(collection = T::COLLECTION, "Submission rejected: no profile yet");
                InboxError::SiteNotConfigured
            })?;

        let entity = T::from_submission(submission)?.prepared()?;
        let document = self
            .documents
            .create(T::COLLECTION, Some(owner), to_json(&entity)?)
            .await?;

        info!(collection = T::COLLECTION, id = %document.id, "Submission received");
        Ok(to_record(document)?)
    }

    async fn get_all(
        &self,
        owner: UserId,
        status: Option<T::Status>,
    ) -> Result<Vec<Record<T>>, InboxError> {
        let filters = status
            .map(|s| vec![FieldFilter::eq("status", s.as_str())])
            .unwrap_or_default();

        let documents = self
            .documents
            .list(T::COLLECTION, filters, ListScope::Owner(owner))
            .await?;

        let mut records = documents
            .into_iter()
            .map(to_record)
            .collect::<Result<Vec<Record<T>>, _>>()?;

        T::sort(&mut records);
        Ok(records)
    }

    async fn open(&self, id: Uuid) -> Result<Record<T>, InboxError> {
        let (document, record) = self.fetch(id).await?;

        if T::OPEN_MARKS_PROCESSED && record.data.status() == T::Status::INITIAL {
            return self
                .write_patch(&document, &T::status_patch(T::Status::PROCESSED))
                .await;
        }

        Ok(record)
    }

    async fn set_status(&self, id: Uuid, status: T::Status) -> Result<Record<T>, InboxError> {
        let (document, record) = self.fetch(id).await?;
        let current = record.data.status();

        if current == status {
            return Ok(record);
        }

        if !current.can_transition_to(status) {
            return Err(InboxError::InvalidTransition {
                from: current.as_str(),
                to: status.as_str(),
            });
        }

        let updated = self.write_patch(&document, &T::status_patch(status)).await?;
        info!(
            collection = T::COLLECTION,
            id = %id,
            from = current.as_str(),
            to = status.as_str(),
            "Status changed"
        );
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<(), InboxError> {
        self.documents.delete(T::COLLECTION, id).await?;
        info!(collection = T::COLLECTION, id = %id, "Record deleted");
        Ok(())
    }
}

#[async_trait]
impl AnswerQuestionUseCase for InboxService<ProjectQuestion> {
    async fn answer(
        &self,
        id: Uuid,
        answer: String,
    ) -> Result<Record<ProjectQuestion>, InboxError> {
        require_text("answer", &answer, 5000)?;

        let (document, _) = self.fetch(id).await?;
        let patch = QuestionPatch::answered(answer, Utc::now());

        self.write_patch(&document, &patch).await
    }
}
