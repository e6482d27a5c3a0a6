use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

use crate::auth::application::domain::{AccessDecision, DenyReason, UserId};
use crate::auth::application::ports::outgoing::AuthorizationPolicy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardState {
    Loading,
    Authorized(UserId),
    Unauthorized(DenyReason),
}

impl GuardState {
    pub fn label(&self) -> &'static str {
        match self {
            GuardState::Loading => "loading",
            GuardState::Authorized(_) => "authorized",
            GuardState::Unauthorized(_) => "unauthorized",
        }
    }
}

/// Wire form of a [`GuardState`].
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct GuardStateView {
    #[schema(example = "authorized")]
    pub state: &'static str,
    pub user_id: Option<uuid::Uuid>,
    pub reason: Option<String>,
}

impl From<&GuardState> for GuardStateView {
    fn from(state: &GuardState) -> Self {
        let (user_id, reason) = match state {
            GuardState::Loading => (None, None),
            GuardState::Authorized(id) => (Some(id.value()), None),
            GuardState::Unauthorized(reason) => (None, Some(reason.to_string())),
        };

        Self {
            state: state.label(),
            user_id,
            reason,
        }
    }
}

/// Perimeter around the admin area. Starts in `Loading` until the first
/// identity is known.
pub struct AccessGuard {
    policy: Arc<dyn AuthorizationPolicy>,
    state: GuardState,
}

impl AccessGuard {
    pub fn new(policy: Arc<dyn AuthorizationPolicy>) -> Self {
        Self {
            policy,
            state: GuardState::Loading,
        }
    }

    pub fn state(&self) -> &GuardState {
        &self.state
    }

    pub async fn on_identity_changed(&mut self, identity: Option<UserId>) -> &GuardState {
        self.state = match identity {
            None => GuardState::Unauthorized(DenyReason::NotSignedIn),
            Some(user_id) => match self.policy.decide(user_id).await {
                AccessDecision::Allow => GuardState::Authorized(user_id),
                AccessDecision::Deny(reason) => {
                    warn!(user_id = %user_id, reason = %reason, "Admin access denied");
                    GuardState::Unauthorized(reason)
                }
            },
        };

        &self.state
    }
}
