use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::auth::application::domain::{AccessDecision, DenyReason, Session};
use crate::auth::application::ports::incoming::use_cases::{
    Credentials, LoginAdminUseCase, LoginError, PERMISSION_DENIED_HINT,
};
use crate::auth::application::ports::outgoing::{
    AuthorizationPolicy, IdentityError, IdentityProvider,
};

#[derive(Clone)]
pub struct LoginAdminService {
    identity: Arc<dyn IdentityProvider>,
    policy: Arc<dyn AuthorizationPolicy>,
}

impl LoginAdminService {
    pub fn new(identity: Arc<dyn IdentityProvider>, policy: Arc<dyn AuthorizationPolicy>) -> Self {
        Self { identity, policy }
    }

    /// A denied session must not outlive the login attempt.
    async fn revoke(&self, session: &Session) {
        if let Err(e) = self.identity.sign_out(&session.access_token).await {
            error!(user_id = %session.user_id, error = %e, "Failed to revoke denied session");
        }
    }
}

#[async_trait]
impl LoginAdminUseCase for LoginAdminService {
    async fn execute(&self, credentials: Credentials) -> Result<Session, LoginError> {
        let session = self
            .identity
            .sign_in(credentials.email(), credentials.password())
            .await
            .map_err(|e| match e {
                IdentityError::InvalidCredentials => LoginError::InvalidCredentials,
                other => LoginError::Backend(other.to_string()),
            })?;

        match self.policy.decide(session.user_id).await {
            AccessDecision::Allow => {
                info!(user_id = %session.user_id, "Admin signed in");
                Ok(session)
            }
            AccessDecision::Deny(reason) => {
                warn!(user_id = %session.user_id, reason = %reason, "Sign-in without admin access");
                self.revoke(&session).await;

                Err(match reason {
                    DenyReason::PermissionDenied => {
                        LoginError::PermissionDenied(PERMISSION_DENIED_HINT.to_string())
                    }
                    DenyReason::RoleLookupFailed(msg) => LoginError::Backend(msg),
                    DenyReason::MissingAdminRole | DenyReason::NotSignedIn => LoginError::NotAdmin,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::services::AdminRolePolicy;
    use crate::document::application::document_service::DocumentService;
    use crate::document::application::ports::outgoing::DocumentStoreError;
    use crate::tests::support::memory_document_store::InMemoryDocumentStore;
    use crate::tests::support::stubs::{FailingDocumentStore, StubIdentityProvider};

    fn credentials(email: &str, password: &str) -> Credentials {
        Credentials::new(email.to_string(), password.to_string()).unwrap()
    }

    fn in_memory_policy() -> AdminRolePolicy {
        AdminRolePolicy::new(DocumentService::new(Arc::new(InMemoryDocumentStore::new())))
    }

    #[tokio::test]
    async fn admin_keeps_the_session() {
        let identity = Arc::new(StubIdentityProvider::new());
        let admin = identity.register("owner@example.com", "secret");
        let policy = in_memory_policy();
        policy.grant_admin(admin).await.unwrap();

        let login = LoginAdminService::new(identity.clone(), Arc::new(policy));
        let session = login
            .execute(credentials("Owner@Example.com", "secret"))
            .await
            .unwrap();

        assert_eq!(session.user_id, admin);
        assert_eq!(identity.active_sessions(), 1);
    }

    #[tokio::test]
    async fn non_admin_is_signed_back_out() {
        let identity = Arc::new(StubIdentityProvider::new());
        identity.register("visitor@example.com", "secret");

        let login = LoginAdminService::new(identity.clone(), Arc::new(in_memory_policy()));
        let err = login
            .execute(credentials("visitor@example.com", "secret"))
            .await
            .unwrap_err();

        assert_eq!(err, LoginError::NotAdmin);
        assert_eq!(identity.active_sessions(), 0);
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials() {
        let identity = Arc::new(StubIdentityProvider::new());
        identity.register("owner@example.com", "secret");

        let login = LoginAdminService::new(identity, Arc::new(in_memory_policy()));
        let err = login
            .execute(credentials("owner@example.com", "nope"))
            .await
            .unwrap_err();

        assert_eq!(err, LoginError::InvalidCredentials);
    }

    #[tokio::test]
    async fn refused_role_lookup_carries_hint() {
        let identity = Arc::new(StubIdentityProvider::new());
        identity.register("owner@example.com", "secret");
        let policy = AdminRolePolicy::new(DocumentService::new(Arc::new(
            FailingDocumentStore::new(DocumentStoreError::PermissionDenied("user_roles".into())),
        )));

        let login = LoginAdminService::new(identity.clone(), Arc::new(policy));
        let err = login
            .execute(credentials("owner@example.com", "secret"))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            LoginError::PermissionDenied(PERMISSION_DENIED_HINT.to_string())
        );
        assert_eq!(identity.active_sessions(), 0);
    }

    #[tokio::test]
    async fn identity_outage_passes_through() {
        let identity = Arc::new(StubIdentityProvider::unavailable());

        let login = LoginAdminService::new(identity, Arc::new(in_memory_policy()));
        let err = login
            .execute(credentials("owner@example.com", "secret"))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            LoginError::Backend("identity service unavailable".to_string())
        );
    }
}
