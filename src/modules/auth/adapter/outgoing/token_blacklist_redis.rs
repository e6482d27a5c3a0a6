use async_trait::async_trait;
use chrono::{DateTime, Utc};
use deadpool_redis::redis::AsyncCommands;
use deadpool_redis::Pool;
use sha2::{Digest, Sha256};
use std::sync::Arc;

use crate::auth::application::ports::outgoing::{BlacklistError, TokenBlacklist};

const KEY_PREFIX: &str = "auth:blacklist:token:";

/// Revoked tokens as Redis keys that expire together with the token.
#[derive(Clone)]
pub struct RedisTokenBlacklist {
    pool: Arc<Pool>,
}

impl RedisTokenBlacklist {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }
}

/// Tokens are stored hashed.
fn blacklist_key(token: &str) -> String {
    format!("{}{:x}", KEY_PREFIX, Sha256::digest(token.as_bytes()))
}

/// Remaining lifetime in whole seconds, at least one.
fn remaining_ttl(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    (expires_at - now).num_seconds().max(1) as u64
}

#[async_trait]
impl TokenBlacklist for RedisTokenBlacklist {
    async fn revoke(&self, token: &str, expires_at: DateTime<Utc>) -> Result<(), BlacklistError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| BlacklistError(format!("Redis connection error: {}", e)))?;

        let ttl = remaining_ttl(expires_at, Utc::now());
        conn.set_ex::<_, _, ()>(blacklist_key(token), 1, ttl)
            .await
            .map_err(|e| BlacklistError(format!("Failed to revoke token: {}", e)))
    }

    async fn is_revoked(&self, token: &str) -> Result<bool, BlacklistError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| BlacklistError(format!("Redis connection error: {}", e)))?;

        conn.exists::<_, bool>(blacklist_key(token))
            .await
            .map_err(|e| BlacklistError(format!("Failed to check token status: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use deadpool_redis::{Config, Runtime};

    #[test]
    fn key_hides_the_raw_token() {
        let key = blacklist_key("eyJ.secret.token");

        assert!(key.starts_with(KEY_PREFIX));
        assert!(!key.contains("secret"));
        assert_eq!(key.len(), KEY_PREFIX.len() + 64);
        assert_eq!(key, blacklist_key("eyJ.secret.token"));
    }

    #[test]
    fn ttl_follows_token_lifetime_with_floor() {
        let now = Utc::now();

        assert_eq!(remaining_ttl(now + Duration::seconds(900), now), 900);
        assert_eq!(remaining_ttl(now - Duration::seconds(10), now), 1);
    }

    #[tokio::test]
    async fn unreachable_redis_surfaces_connection_error() {
        let pool = Config::from_url("redis://127.0.0.1:6399")
            .create_pool(Some(Runtime::Tokio1))
            .unwrap();
        let blacklist = RedisTokenBlacklist::new(Arc::new(pool));

        let err = blacklist.is_revoked("token").await.unwrap_err();
        assert!(err.0.contains("Redis connection error"));
    }

    #[tokio::test]
    async fn revoke_then_check_against_live_redis() {
        let pool = Config::from_url("redis://127.0.0.1/")
            .create_pool(Some(Runtime::Tokio1))
            .unwrap();
        if pool.get().await.is_err() {
            eprintln!("Redis not available, skipping test");
            return;
        }
        let blacklist = RedisTokenBlacklist::new(Arc::new(pool));
        let token = format!("test-token-{}", uuid::Uuid::new_v4());

        assert!(!blacklist.is_revoked(&token).await.unwrap());
        blacklist
            .revoke(&token, Utc::now() + Duration::seconds(30))
            .await
            .unwrap();
        assert!(blacklist.is_revoked(&token).await.unwrap());
    }
}
