use async_trait::async_trait;
use std::marker::PhantomData;
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::content::application::ports::incoming::use_cases::{CollectionUseCase, ContentError};
use crate::document::application::document_service::DocumentService;
use crate::document::application::domain::document::{Document, FieldFilter, ListScope};
use crate::document::application::domain::record::{CollectionEntity, Record};

pub struct CollectionService<T> {
    documents: DocumentService,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for CollectionService<T> {
    fn clone(&self) -> Self {
        Self {
            documents: self.documents.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T: CollectionEntity> CollectionService<T> {
    pub fn new(documents: DocumentService) -> Self {
        Self {
            documents,
            _entity: PhantomData,
        }
    }

    async fn list(
        &self,
        filters: Vec<FieldFilter>,
        scope: ListScope,
    ) -> Result<Vec<Record<T>>, ContentError> {
        let documents = self.documents.list(T::COLLECTION, filters, scope).await?;

        let mut records = documents
            .into_iter()
            .map(to_record)
            .collect::<Result<Vec<Record<T>>, _>>()?;

        T::sort(&mut records);
        Ok(records)
    }

    async fn fetch(&self, id: Uuid) -> Result<Document, ContentError> {
        self.documents
            .get(T::COLLECTION, id)
            .await?
            .ok_or(ContentError::NotFound)
    }
}

#[async_trait]
impl<T: CollectionEntity> CollectionUseCase<T> for CollectionService<T> {
    async fn get_all(
        &self,
        owner: UserId,
        filter: T::Filter,
    ) -> Result<Vec<Record<T>>, ContentError> {
        self.list(T::filter_fields(&filter), ListScope::Owner(owner))
            .await
    }

    async fn get_all_public(&self, filter: T::Filter) -> Result<Vec<Record<T>>, ContentError> {
        self.list(T::filter_fields(&filter), ListScope::Public).await
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Record<T>, ContentError> {
        to_record(self.fetch(id).await?)
    }

    async fn create(&self, owner: UserId, draft: T) -> Result<Record<T>, ContentError> {
        let entity = draft.prepared()?;
        let data = to_json(&entity)?;

        let document = self
            .documents
            .create(T::COLLECTION, Some(owner), data)
            .await?;

        info!(collection = T::COLLECTION, id = %document.id, "Record created");
        to_record(document)
    }

    async fn update(&self, id: Uuid, patch: T::Patch) -> Result<Record<T>, ContentError> {
        let current = self.fetch(id).await?;
        let entity = T::apply_patch(&current.data, &patch)?;

        let document = self
            .documents
            .update_document(&current, to_json(&entity)?)
            .await?;

        to_record(document)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContentError> {
        self.documents.delete(T::COLLECTION, id).await?;
        info!(collection = T::COLLECTION, id = %id, "Record deleted");
        Ok(())
    }
}

pub(crate) fn to_record<T: CollectionEntity>(document: Document) -> Result<Record<T>, ContentError> {
    let id = document.id;
    Record::try_from(document).map_err(|e| {
        error!(collection = T::COLLECTION, id = %id, error = %e, "Stored record is malformed");
        ContentError::RepositoryError(format!("stored record {id} is malformed"))
    })
}

pub(crate) fn to_json<T: serde::Serialize>(entity: &T) -> Result<serde_json::Value, ContentError> {
    serde_json::to_value(entity).map_err(|e| ContentError::RepositoryError(e.to_string()))
}
