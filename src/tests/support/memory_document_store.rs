use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::document::application::domain::document::{Document, JsonObject};
use crate::document::application::ports::outgoing::{
    DocumentQuery, DocumentStore, DocumentStoreError,
};

/// Document store kept in a vector, insertion ordered like the Postgres adapter.
#[derive(Default)]
pub struct InMemoryDocumentStore {
    documents: RwLock<Vec<Document>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn insert(&self, document: Document) -> Result<Document, DocumentStoreError> {
        let mut documents = self.documents.write().await;

        if documents
            .iter()
            .any(|d| d.collection == document.collection && d.id == document.id)
        {
            return Err(DocumentStoreError::AlreadyExists);
        }

        documents.push(document.clone());
        Ok(document)
    }

    async fn merge(
        &self,
        collection: &str,
        id: Uuid,
        partial: JsonObject,
        updated_at: DateTime<Utc>,
    ) -> Result<Document, DocumentStoreError> {
        let mut documents = self.documents.write().await;

        let document = documents
            .iter_mut()
            .find(|d| d.collection == collection && d.id == id)
            .ok_or(DocumentStoreError::NotFound)?;

        document.data.extend(partial);
        document.updated_at = updated_at;

        Ok(document.clone())
    }

    async fn remove(&self, collection: &str, id: Uuid) -> Result<(), DocumentStoreError> {
        self.documents
            .write()
            .await
            .retain(|d| !(d.collection == collection && d.id == id));
        Ok(())
    }

    async fn fetch(
        &self,
        collection: &str,
        id: Uuid,
    ) -> Result<Option<Document>, DocumentStoreError> {
        Ok(self
            .documents
            .read()
            .await
            .iter()
            .find(|d| d.collection == collection && d.id == id)
            .cloned())
    }

    async fn query(&self, query: DocumentQuery) -> Result<Vec<Document>, DocumentStoreError> {
        Ok(self
            .documents
            .read()
            .await
            .iter()
            .filter(|d| d.collection == query.collection)
            .filter(|d| query.owner.map_or(true, |owner| d.owner == owner))
            .filter(|d| query.filters.iter().all(|f| f.matches(&d.data)))
            .cloned()
            .collect())
    }
}
