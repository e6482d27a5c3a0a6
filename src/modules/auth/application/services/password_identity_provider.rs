use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

use crate::auth::application::domain::{Identity, Session, User};
use crate::auth::application::ports::outgoing::{
    IdentityError, IdentityProvider, NewUser, PasswordHasher, TokenBlacklist, TokenProvider,
    UserRepository, UserRepositoryError,
};

/// Email/password accounts backed by the `users` table, JWT sessions and
/// a revocation list.
#[derive(Clone)]
pub struct PasswordIdentityProvider {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenProvider>,
    blacklist: Arc<dyn TokenBlacklist>,
}

impl PasswordIdentityProvider {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenProvider>,
        blacklist: Arc<dyn TokenBlacklist>,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
            blacklist,
        }
    }

    fn open_session(&self, user: &User) -> Result<Session, IdentityError> {
        let issued = self
            .tokens
            .generate_access_token(user.id, &user.email)
            .map_err(|e| IdentityError::Backend(e.to_string()))?;

        Ok(Session {
            user_id: user.id,
            email: user.email.clone(),
            access_token: issued.token,
            expires_at: issued.expires_at,
        })
    }
}

fn backend(e: impl std::fmt::Display) -> IdentityError {
    IdentityError::Backend(e.to_string())
}

#[async_trait]
impl IdentityProvider for PasswordIdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, IdentityError> {
        let email = email.trim().to_lowercase();
        let user = self
            .users
            .find_by_email(&email)
            .await
            .map_err(backend)?
            .ok_or(IdentityError::InvalidCredentials)?;

        let matches = self
            .hasher
            .verify_password(password, &user.password_hash)
            .await
            .map_err(backend)?;
        if !matches {
            return Err(IdentityError::InvalidCredentials);
        }

        self.open_session(&user)
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<Session, IdentityError> {
        let email = email.trim().to_lowercase();
        let password_hash = self.hasher.hash_password(password).await.map_err(backend)?;

        let user = self
            .users
            .create_user(NewUser {
                email,
                password_hash,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => IdentityError::EmailAlreadyInUse,
                other => backend(other),
            })?;

        info!(user_id = %user.id, "Account created");
        self.open_session(&user)
    }

    async fn sign_out(&self, token: &str) -> Result<(), IdentityError> {
        let claims = match self.tokens.verify_token(token) {
            Ok(claims) => claims,
            Err(e) => {
                debug!(error = %e, "Sign-out with unusable token ignored");
                return Ok(());
            }
        };

        self.blacklist
            .revoke(token, claims.expires_at())
            .await
            .map_err(backend)?;

        info!(user_id = %claims.sub, "Session revoked");
        Ok(())
    }

    async fn current_identity(&self, token: &str) -> Result<Option<Identity>, IdentityError> {
        let claims = match self.tokens.verify_token(token) {
            Ok(claims) => claims,
            Err(e) => {
                debug!(error = %e, "Bearer token rejected");
                return Ok(None);
            }
        };

        if self.blacklist.is_revoked(token).await.map_err(backend)? {
            return Ok(None);
        }

        Ok(Some(Identity {
            user_id: claims.user_id(),
            email: claims.email,
        }))
    }
}
