use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity, Model as UserModel,
};
use crate::auth::application::domain::{User, UserId};
use crate::auth::application::ports::outgoing::{NewUser, UserRepository, UserRepositoryError};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        Self {
            id: UserId::from(model.id),
            email: model.email,
            password_hash: model.password_hash,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

fn is_unique_violation(message: &str) -> bool {
    let message = message.to_lowercase();
    message.contains("23505")
        || message.contains("duplicate key")
        || message.contains("unique constraint")
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError> {
        let model = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(model.map(User::from))
    }

    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let now = Utc::now();
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        let inserted = active_user.insert(&*self.db).await.map_err(|e| {
            let message = e.to_string();
            if is_unique_violation(&message) {
                UserRepositoryError::UserAlreadyExists
            } else {
                UserRepositoryError::DatabaseError(message)
            }
        })?;

        Ok(inserted.into())
    }
}
