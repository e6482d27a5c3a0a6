use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct DashboardStats {
    pub projects: usize,
    pub education: usize,
    pub skills: usize,
    pub leadership: usize,
    pub achievements: usize,
    pub new_messages: usize,
    pub pending_questions: usize,
    pub pending_feedback: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DashboardError {
    #[error("Failed to load dashboard statistics: {0}")]
    LoadFailed(String),
}

#[async_trait]
pub trait DashboardUseCase: Send + Sync {
    async fn stats(&self, owner: UserId) -> Result<DashboardStats, DashboardError>;
}
