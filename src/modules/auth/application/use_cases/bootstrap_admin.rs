use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::application::domain::{Session, UserId};
use crate::auth::application::ports::incoming::use_cases::{
    BootstrapAdminUseCase, BootstrapError, Credentials, CredentialsError,
};
use crate::auth::application::ports::outgoing::{IdentityError, IdentityProvider};
use crate::auth::application::services::AdminRolePolicy;

/// `ADMIN_EMAIL` and `ADMIN_PASSWORD`, when both are set.
pub fn credentials_from_env() -> Result<Option<Credentials>, CredentialsError> {
    match (std::env::var("ADMIN_EMAIL"), std::env::var("ADMIN_PASSWORD")) {
        (Ok(email), Ok(password)) => Credentials::new(email, password).map(Some),
        (Ok(_), Err(_)) | (Err(_), Ok(_)) => {
            warn!("Only one of ADMIN_EMAIL / ADMIN_PASSWORD is set, skipping admin bootstrap");
            Ok(None)
        }
        _ => Ok(None),
    }
}

#[derive(Clone)]
pub struct BootstrapAdminService {
    identity: Arc<dyn IdentityProvider>,
    roles: AdminRolePolicy,
}

impl BootstrapAdminService {
    pub fn new(identity: Arc<dyn IdentityProvider>, roles: AdminRolePolicy) -> Self {
        Self { identity, roles }
    }

    async fn account(&self, credentials: &Credentials) -> Result<Session, BootstrapError> {
        let email = credentials.email();
        let password = credentials.password();

        match self.identity.sign_up(email, password).await {
            Ok(session) => Ok(session),
            Err(IdentityError::EmailAlreadyInUse) => self
                .identity
                .sign_in(email, password)
                .await
                .map_err(|e| match e {
                    IdentityError::InvalidCredentials => BootstrapError::PasswordMismatch,
                    other => BootstrapError::Backend(other.to_string()),
                }),
            Err(e) => Err(BootstrapError::Backend(e.to_string())),
        }
    }
}

#[async_trait]
impl BootstrapAdminUseCase for BootstrapAdminService {
    async fn execute(&self, credentials: Credentials) -> Result<UserId, BootstrapError> {
        let session = self.account(&credentials).await?;

        // The bootstrap session is never handed out.
        self.identity
            .sign_out(&session.access_token)
            .await
            .map_err(|e| BootstrapError::Backend(e.to_string()))?;

        let granted = self
            .roles
            .grant_admin(session.user_id)
            .await
            .map_err(|e| BootstrapError::Backend(e.to_string()))?;

        info!(user_id = %session.user_id, granted, "Admin account ready");
        Ok(session.user_id)
    }
}
