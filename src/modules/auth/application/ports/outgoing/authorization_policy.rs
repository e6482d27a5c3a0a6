use async_trait::async_trait;

use crate::auth::application::domain::{AccessDecision, UserId};

/// Decides whether a signed-in user may enter the admin area.
#[async_trait]
pub trait AuthorizationPolicy: Send + Sync {
    async fn decide(&self, user_id: UserId) -> AccessDecision;
}
