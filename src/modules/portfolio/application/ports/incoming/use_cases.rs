use async_trait::async_trait;

use crate::content::application::domain::{
    Achievement, Education, Experience, ExperienceKind, Profile, Project, Skill,
};
use crate::content::application::ports::incoming::use_cases::ContentError;
use crate::document::application::domain::record::Record;
use crate::portfolio::application::domain::{PortfolioSnapshot, Section};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortfolioError {
    #[error("Failed to load portfolio content: {0}")]
    LoadFailed(String),
}

impl From<ContentError> for PortfolioError {
    fn from(e: ContentError) -> Self {
        PortfolioError::LoadFailed(e.to_string())
    }
}

/// Read side of the public site. Lists are sorted the way the site shows them.
#[async_trait]
pub trait PortfolioQueryUseCase: Send + Sync {
    async fn profile(&self) -> Result<Option<Record<Profile>>, PortfolioError>;

    async fn projects(&self) -> Result<Vec<Record<Project>>, PortfolioError>;

    async fn education(&self) -> Result<Vec<Record<Education>>, PortfolioError>;

    async fn skills(&self) -> Result<Vec<Record<Skill>>, PortfolioError>;

    async fn experiences(
        &self,
        kind: Option<ExperienceKind>,
    ) -> Result<Vec<Record<Experience>>, PortfolioError>;

    async fn achievements(&self) -> Result<Vec<Record<Achievement>>, PortfolioError>;

    async fn snapshot(&self) -> Result<PortfolioSnapshot, PortfolioError>;

    /// Drops any cached copy of `section`.
    fn invalidate(&self, section: Section);
}
