use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::UserId;
use crate::content::application::content_use_cases::ContentUseCases;
use crate::content::application::domain::{
    Achievement, Education, Experience, ProfilePatch, Project, Skill,
};
use crate::content::application::ports::incoming::use_cases::ProfileUseCase;
use crate::content::application::services::{CollectionService, ProfileService};
use crate::document::application::document_service::DocumentService;
use crate::document::application::domain::patch::PatchField;
use crate::inbox::application::domain::{ContactMessage, ProjectFeedback, ProjectQuestion};
use crate::inbox::application::inbox_use_cases::InboxUseCases;
use crate::inbox::application::services::InboxService;
use crate::tests::support::memory_document_store::InMemoryDocumentStore;

pub fn memory_documents() -> DocumentService {
    DocumentService::new(Arc::new(InMemoryDocumentStore::new()))
}

/// In-memory documents with a saved profile; returns the profile owner.
pub async fn site_documents() -> (DocumentService, UserId) {
    let documents = memory_documents();
    let owner = UserId::from(Uuid::new_v4());

    save_profile(&documents, owner).await;
    (documents, owner)
}

pub async fn save_profile(documents: &DocumentService, owner: UserId) {
    let patch = ProfilePatch {
        full_name: PatchField::Value("Ada Lovelace".to_string()),
        title: PatchField::Value("Software Engineer".to_string()),
        ..Default::default()
    };

    ProfileService::new(documents.clone())
        .upsert(owner, patch)
        .await
        .expect("profile saves");
}

pub fn content_use_cases(documents: &DocumentService) -> ContentUseCases {
    ContentUseCases {
        profile: Arc::new(ProfileService::new(documents.clone())),
        projects: Arc::new(CollectionService::<Project>::new(documents.clone())),
        education: Arc::new(CollectionService::<Education>::new(documents.clone())),
        experiences: Arc::new(CollectionService::<Experience>::new(documents.clone())),
        skills: Arc::new(CollectionService::<Skill>::new(documents.clone())),
        achievements: Arc::new(CollectionService::<Achievement>::new(documents.clone())),
    }
}

pub fn inbox_use_cases(documents: &DocumentService, content: &ContentUseCases) -> InboxUseCases {
    let questions = Arc::new(InboxService::<ProjectQuestion>::new(
        documents.clone(),
        Arc::clone(&content.profile),
    ));

    InboxUseCases {
        messages: Arc::new(InboxService::<ContactMessage>::new(
            documents.clone(),
            Arc::clone(&content.profile),
        )),
        questions: questions.clone(),
        answer_question: questions,
        feedback: Arc::new(InboxService::<ProjectFeedback>::new(
            documents.clone(),
            Arc::clone(&content.profile),
        )),
    }
}
