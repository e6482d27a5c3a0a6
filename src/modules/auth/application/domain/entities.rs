use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Collection holding `{ role }` rows owned by the user they grant.
pub const USER_ROLES_COLLECTION: &str = "user_roles";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<UserId> for Uuid {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    #[serde(skip)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

/// Payload of a role row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    pub role: Role,
}

/// Who the bearer of a valid, unrevoked token is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: UserId,
    pub email: String,
}

/// A signed-in session handed out by the identity provider.
#[derive(Clone)]
pub struct Session {
    pub user_id: UserId,
    pub email: String,
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("user_id", &self.user_id)
            .field("email", &self.email)
            .field("access_token", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_serializes_as_plain_uuid() {
        let id = Uuid::new_v4();
        let json = serde_json::to_value(UserId::from(id)).unwrap();
        assert_eq!(json, serde_json::json!(id.to_string()));
    }

    #[test]
    fn role_uses_lowercase_tags() {
        let json = serde_json::to_value(RoleAssignment { role: Role::Admin }).unwrap();
        assert_eq!(json, serde_json::json!({ "role": "admin" }));
    }

    #[test]
    fn session_debug_hides_token() {
        let session = Session {
            user_id: UserId::from(Uuid::new_v4()),
            email: "owner@example.com".to_string(),
            access_token: "secret-token".to_string(),
            expires_at: Utc::now(),
        };

        let rendered = format!("{session:?}");
        assert!(!rendered.contains("secret-token"));
    }
}
