use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::document::adapter::outgoing::sea_orm_entity::documents::{
    self, ActiveModel, Column, Entity,
};
use crate::document::application::domain::document::{Document, JsonObject};
use crate::document::application::ports::outgoing::{
    DocumentQuery, DocumentStore, DocumentStoreError,
};

// ============================================================================
// Store Implementation
// ============================================================================

#[derive(Clone)]
pub struct DocumentStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl DocumentStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DocumentStore for DocumentStorePostgres {
    async fn insert(&self, document: Document) -> Result<Document, DocumentStoreError> {
        let model = ActiveModel {
            collection: Set(document.collection),
            id: Set(document.id),
            user_id: Set(document.owner.into()),
            data: Set(Value::Object(document.data)),
            created_at: Set(document.created_at.fixed_offset()),
            updated_at: Set(document.updated_at.fixed_offset()),
        };

        let result = model.insert(&*self.db).await.map_err(map_insert_err)?;

        model_to_document(result)
    }

    async fn merge(
        &self,
        collection: &str,
        id: Uuid,
        partial: JsonObject,
        updated_at: DateTime<Utc>,
    ) -> Result<Document, DocumentStoreError> {
        let results = Entity::update_many()
            .col_expr(
                Column::Data,
                Expr::cust_with_values("\"data\" || $1::jsonb", [Value::Object(partial)]),
            )
            .col_expr(Column::UpdatedAt, Expr::value(updated_at.fixed_offset()))
            .filter(Column::Collection.eq(collection))
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(DocumentStoreError::NotFound)?;

        model_to_document(result)
    }

    async fn remove(&self, collection: &str, id: Uuid) -> Result<(), DocumentStoreError> {
        Entity::delete_many()
            .filter(Column::Collection.eq(collection))
            .filter(Column::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }

    async fn fetch(
        &self,
        collection: &str,
        id: Uuid,
    ) -> Result<Option<Document>, DocumentStoreError> {
        Entity::find_by_id((collection.to_string(), id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_document)
            .transpose()
    }

    async fn query(&self, query: DocumentQuery) -> Result<Vec<Document>, DocumentStoreError> {
        let mut select = Entity::find().filter(Column::Collection.eq(query.collection));

        if let Some(owner) = query.owner {
            select = select.filter(Column::UserId.eq(owner.value()));
        }

        // All equality filters collapse into one containment check on the GIN index
        if !query.filters.is_empty() {
            let containment: JsonObject = query
                .filters
                .into_iter()
                .map(|f| (f.field, f.value))
                .collect();

            select = select.filter(Expr::cust_with_values(
                "\"data\" @> $1::jsonb",
                [Value::Object(containment)],
            ));
        }

        let models = select
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models.into_iter().map(model_to_document).collect()
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_document(model: documents::Model) -> Result<Document, DocumentStoreError> {
    let data = match model.data {
        Value::Object(map) => map,
        other => {
            return Err(DocumentStoreError::Malformed(format!(
                "document {} in {} has non-object data: {}",
                model.id, model.collection, other
            )))
        }
    };

    Ok(Document {
        id: model.id,
        collection: model.collection,
        owner: UserId::from(model.user_id),
        data,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn map_insert_err(e: DbErr) -> DocumentStoreError {
    let msg = e.to_string().to_lowercase();

    if msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505") {
        DocumentStoreError::AlreadyExists
    } else {
        map_db_err(e)
    }
}

fn map_db_err(e: DbErr) -> DocumentStoreError {
    let msg = e.to_string();
    let lowered = msg.to_lowercase();

    if lowered.contains("permission denied") || lowered.contains("42501") {
        DocumentStoreError::PermissionDenied(msg)
    } else {
        DocumentStoreError::DatabaseError(msg)
    }
}

// ============================================================================
// Tests
// ============================================================================
