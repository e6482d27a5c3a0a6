use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Token blacklist error: {0}")]
pub struct BlacklistError(pub String);

#[async_trait]
pub trait TokenBlacklist: Send + Sync {
    /// Remembers `token` as revoked until it would have expired anyway.
    async fn revoke(&self, token: &str, expires_at: DateTime<Utc>) -> Result<(), BlacklistError>;
    async fn is_revoked(&self, token: &str) -> Result<bool, BlacklistError>;
}
