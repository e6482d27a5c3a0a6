use async_trait::async_trait;

use crate::auth::application::domain::{Identity, Session};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Email is already registered")]
    EmailAlreadyInUse,

    #[error("{0}")]
    Backend(String),
}

/// Email/password authentication service.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, IdentityError>;

    async fn sign_up(&self, email: &str, password: &str) -> Result<Session, IdentityError>;

    /// Revokes `token`. Signing out a token that no longer verifies is a no-op.
    async fn sign_out(&self, token: &str) -> Result<(), IdentityError>;

    /// `None` for tokens that are invalid, expired or revoked.
    async fn current_identity(&self, token: &str) -> Result<Option<Identity>, IdentityError>;
}
