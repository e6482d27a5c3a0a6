use async_trait::async_trait;
use std::fmt::Display;
use tracing::error;

use crate::auth::application::domain::entities::UserId;
use crate::content::application::content_use_cases::ContentUseCases;
use crate::content::application::domain::{ExperienceFilter, ExperienceKind};
use crate::content::application::ports::incoming::use_cases::{
    DashboardError, DashboardStats, DashboardUseCase,
};
use crate::document::application::domain::record::NoFilter;
use crate::inbox::application::domain::{
    FeedbackStatus, InboxStatus, MessageStatus, QuestionStatus,
};
use crate::inbox::application::inbox_use_cases::InboxUseCases;

/// Counts for the admin landing page, all owner-scoped.
#[derive(Clone)]
pub struct DashboardService {
    content: ContentUseCases,
    inbox: InboxUseCases,
}

impl DashboardService {
    pub fn new(content: ContentUseCases, inbox: InboxUseCases) -> Self {
        Self { content, inbox }
    }
}

fn load_failed(e: impl Display) -> DashboardError {
    error!(error = %e, "Dashboard read failed");
    DashboardError::LoadFailed(e.to_string())
}

#[async_trait]
impl DashboardUseCase for DashboardService {
    async fn stats(&self, owner: UserId) -> Result<DashboardStats, DashboardError> {
        let c = &self.content;
        let i = &self.inbox;

        let (
            projects,
            education,
            skills,
            leadership,
            achievements,
            new_messages,
            pending_questions,
            pending_feedback,
        ) = futures::try_join!(
            async { c.projects.get_all(owner, NoFilter {}).await.map_err(load_failed) },
            async { c.education.get_all(owner, NoFilter {}).await.map_err(load_failed) },
            async { c.skills.get_all(owner, NoFilter {}).await.map_err(load_failed) },
            async {
                c.experiences
                    .get_all(owner, ExperienceFilter::of_kind(ExperienceKind::Leadership))
                    .await
                    .map_err(load_failed)
            },
            async { c.achievements.get_all(owner, NoFilter {}).await.map_err(load_failed) },
            async {
                i.messages
                    .get_all(owner, Some(MessageStatus::INITIAL))
                    .await
                    .map_err(load_failed)
            },
            async {
                i.questions
                    .get_all(owner, Some(QuestionStatus::INITIAL))
                    .await
                    .map_err(load_failed)
            },
            async {
                i.feedback
                    .get_all(owner, Some(FeedbackStatus::INITIAL))
                    .await
                    .map_err(load_failed)
            },
        )?;

        Ok(DashboardStats {
            projects: projects.len(),
            education: education.len(),
            skills: skills.len(),
            leadership: leadership.len(),
            achievements: achievements.len(),
            new_messages: new_messages.len(),
            pending_questions: pending_questions.len(),
            pending_feedback: pending_feedback.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::application::domain::{Project, ProjectPatch};
    use crate::content::application::ports::incoming::use_cases::{
        CollectionUseCase, ContentError,
    };
    use crate::document::application::domain::record::Record;
    use crate::inbox::application::domain::ContactSubmission;
    use crate::tests::support::fixtures;
    use crate::tests::support::services::{content_use_cases, inbox_use_cases, site_documents};
    use std::sync::Arc;
    use uuid::Uuid;

    struct FailingProjects;

    #[async_trait]
    impl CollectionUseCase<Project> for FailingProjects {
        async fn get_all(
            &self,
            _owner: UserId,
            _filter: NoFilter,
        ) -> Result<Vec<Record<Project>>, ContentError> {
            Err(ContentError::RepositoryError("connection reset".into()))
        }

        async fn get_all_public(
            &self,
            _filter: NoFilter,
        ) -> Result<Vec<Record<Project>>, ContentError> {
            unimplemented!()
        }

        async fn get_by_id(&self, _id: Uuid) -> Result<Record<Project>, ContentError> {
            unimplemented!()
        }

        async fn create(
            &self,
            _owner: UserId,
            _draft: Project,
        ) -> Result<Record<Project>, ContentError> {
            unimplemented!()
        }

        async fn update(
            &self,
            _id: Uuid,
            _patch: ProjectPatch,
        ) -> Result<Record<Project>, ContentError> {
            unimplemented!()
        }

        async fn delete(&self, _id: Uuid) -> Result<(), ContentError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn stats_count_owner_records_and_unread_inbox() {
        let (documents, owner) = site_documents().await;
        let content = content_use_cases(&documents);
        let inbox = inbox_use_cases(&documents, &content);

        content
            .projects
            .create(owner, fixtures::project("CMS", 0))
            .await
            .unwrap();
        content
            .skills
            .create(owner, fixtures::skill("Rust", 0))
            .await
            .unwrap();
        content
            .experiences
            .create(owner, fixtures::experience("Chair", ExperienceKind::Leadership))
            .await
            .unwrap();
        content
            .experiences
            .create(owner, fixtures::experience("Engineer", ExperienceKind::Work))
            .await
            .unwrap();
        content
            .projects
            .create(UserId::from(Uuid::new_v4()), fixtures::project("Other", 0))
            .await
            .unwrap();

        let submission = || ContactSubmission {
            name: "Jane".into(),
            email: "jane@example.com".into(),
            subject: None,
            message: "Hello".into(),
        };
        let read = inbox.messages.submit(submission()).await.unwrap();
        inbox.messages.submit(submission()).await.unwrap();
        inbox
            .messages
            .set_status(read.id, MessageStatus::Read)
            .await
            .unwrap();

        let stats = DashboardService::new(content, inbox)
            .stats(owner)
            .await
            .unwrap();

        assert_eq!(
            stats,
            DashboardStats {
                projects: 1,
                skills: 1,
                leadership: 1,
                new_messages: 1,
                ..Default::default()
            }
        );
    }

    #[tokio::test]
    async fn any_failed_read_fails_the_whole_load() {
        let (documents, owner) = site_documents().await;
        let mut content = content_use_cases(&documents);
        let inbox = inbox_use_cases(&documents, &content);
        content.projects = Arc::new(FailingProjects);

        let result = DashboardService::new(content, inbox).stats(owner).await;

        assert!(matches!(result, Err(DashboardError::LoadFailed(_))));
    }
}
