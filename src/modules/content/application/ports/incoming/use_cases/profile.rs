use async_trait::async_trait;

use super::ContentError;
use crate::auth::application::domain::entities::UserId;
use crate::content::application::domain::{Profile, ProfilePatch};
use crate::document::application::domain::record::Record;

#[async_trait]
pub trait ProfileUseCase: Send + Sync {
    async fn get_current(&self) -> Result<Option<Record<Profile>>, ContentError>;

    /// Updates the current profile, creating it first when there is none.
    async fn upsert(&self, owner: UserId, patch: ProfilePatch)
        -> Result<Record<Profile>, ContentError>;
}
