use async_trait::async_trait;
use tracing::info;

use super::collection_service::{to_json, to_record};
use crate::auth::application::domain::entities::UserId;
use crate::content::application::domain::{Profile, ProfilePatch, PROFILE_ID};
use crate::content::application::ports::incoming::use_cases::{ContentError, ProfileUseCase};
use crate::document::application::document_service::{DocumentError, DocumentService};
use crate::document::application::domain::document::JsonObject;
use crate::document::application::domain::record::{CollectionEntity, Record};

/// The profile is a singleton stored under `PROFILE_ID`.
#[derive(Clone)]
pub struct ProfileService {
    documents: DocumentService,
}

impl ProfileService {
    pub fn new(documents: DocumentService) -> Self {
        Self { documents }
    }

    async fn update_existing(
        &self,
        patch: &ProfilePatch,
    ) -> Result<Option<Record<Profile>>, ContentError> {
        let Some(current) = self.documents.get(Profile::COLLECTION, PROFILE_ID).await? else {
            return Ok(None);
        };

        let profile = Profile::apply_patch(&current.data, patch)?;
        let document = self
            .documents
            .update_document(&current, to_json(&profile)?)
            .await?;

        to_record(document).map(Some)
    }
}

#[async_trait]
impl ProfileUseCase for ProfileService {
    async fn get_current(&self) -> Result<Option<Record<Profile>>, ContentError> {
        self.documents
            .get(Profile::COLLECTION, PROFILE_ID)
            .await?
            .map(to_record)
            .transpose()
    }

    async fn upsert(
        &self,
        owner: UserId,
        patch: ProfilePatch,
    ) -> Result<Record<Profile>, ContentError> {
        if let Some(updated) = self.update_existing(&patch).await? {
            return Ok(updated);
        }

        let profile = Profile::apply_patch(&JsonObject::new(), &patch)?;
        let created = self
            .documents
            .create_with_id(
                Profile::COLLECTION,
                PROFILE_ID,
                Some(owner),
                to_json(&profile)?,
            )
            .await;

        match created {
            Ok(document) => {
                info!(owner = %owner, "Profile created");
                to_record(document)
            }
            // Lost a creation race: the other writer's profile now exists
            Err(DocumentError::AlreadyExists) => self
                .update_existing(&patch)
                .await?
                .ok_or(ContentError::NotFound),
            Err(e) => Err(e.into()),
        }
    }
}
