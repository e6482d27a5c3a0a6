use async_trait::async_trait;
use serde_json::json;
use tracing::{error, info, warn};

use crate::auth::application::domain::{
    AccessDecision, DenyReason, Role, RoleAssignment, UserId, USER_ROLES_COLLECTION,
};
use crate::auth::application::ports::outgoing::AuthorizationPolicy;
use crate::document::application::document_service::{DocumentError, DocumentService};
use crate::document::application::domain::document::{FieldFilter, ListScope};

/// Allows exactly the users that own an `admin` row in `user_roles`.
#[derive(Clone)]
pub struct AdminRolePolicy {
    documents: DocumentService,
}

impl AdminRolePolicy {
    pub fn new(documents: DocumentService) -> Self {
        Self { documents }
    }

    fn admin_filter() -> Vec<FieldFilter> {
        vec![FieldFilter::eq("role", json!(Role::Admin))]
    }

    async fn has_admin_row(&self, user_id: UserId) -> Result<bool, DocumentError> {
        let rows = self
            .documents
            .list(
                USER_ROLES_COLLECTION,
                Self::admin_filter(),
                ListScope::Owner(user_id),
            )
            .await?;
        Ok(!rows.is_empty())
    }

    /// Adds the admin row unless one exists. Returns whether a row was written.
    pub async fn grant_admin(&self, user_id: UserId) -> Result<bool, DocumentError> {
        if self.has_admin_row(user_id).await? {
            return Ok(false);
        }

        self.documents
            .create(
                USER_ROLES_COLLECTION,
                Some(user_id),
                json!(RoleAssignment { role: Role::Admin }),
            )
            .await?;

        info!(user_id = %user_id, "Admin role granted");
        Ok(true)
    }
}

#[async_trait]
impl AuthorizationPolicy for AdminRolePolicy {
    async fn decide(&self, user_id: UserId) -> AccessDecision {
        match self.has_admin_row(user_id).await {
            Ok(true) => AccessDecision::Allow,
            Ok(false) => AccessDecision::Deny(DenyReason::MissingAdminRole),
            Err(DocumentError::PermissionDenied(msg)) => {
                warn!(user_id = %user_id, error = %msg, "Role lookup denied");
                AccessDecision::Deny(DenyReason::PermissionDenied)
            }
            Err(e) => {
                error!(user_id = %user_id, error = %e, "Role lookup failed");
                AccessDecision::Deny(DenyReason::RoleLookupFailed(e.to_string()))
            }
        }
    }
}
