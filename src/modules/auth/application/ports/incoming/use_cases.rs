use async_trait::async_trait;
use email_address::EmailAddress;

use crate::auth::application::domain::{Session, UserId};

//
// ──────────────────────────────────────────────────────────
// Credentials
// ──────────────────────────────────────────────────────────
//

/// Email and password that passed basic validation.
#[derive(Clone)]
pub struct Credentials {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialsError {
    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl Credentials {
    pub fn new(email: String, password: String) -> Result<Self, CredentialsError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(CredentialsError::EmptyEmail);
        }
        if !EmailAddress::is_valid(email) {
            return Err(CredentialsError::InvalidEmailFormat);
        }
        if password.trim().is_empty() {
            return Err(CredentialsError::EmptyPassword);
        }

        Ok(Self {
            email: email.to_lowercase(),
            password,
        })
    }

    /// Lower-cased.
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

//
// ──────────────────────────────────────────────────────────
// Login / logout
// ──────────────────────────────────────────────────────────
//

pub const PERMISSION_DENIED_HINT: &str = "Role lookup was denied by the document store. \
     Check the database grants for the user_roles collection.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("{0}")]
    PermissionDenied(String),

    #[error("Unauthorized: Not an admin user")]
    NotAdmin,

    #[error("{0}")]
    Backend(String),
}

#[async_trait]
pub trait LoginAdminUseCase: Send + Sync {
    /// Signs in and keeps the session only when the user holds the admin role.
    async fn execute(&self, credentials: Credentials) -> Result<Session, LoginError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LogoutError {
    #[error("Logout failed: {0}")]
    Backend(String),
}

#[async_trait]
pub trait LogoutUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> Result<(), LogoutError>;
}

//
// ──────────────────────────────────────────────────────────
// Bootstrap
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BootstrapError {
    #[error("Invalid admin credentials: {0}")]
    InvalidCredentials(#[from] CredentialsError),

    #[error("Admin account exists with a different password")]
    PasswordMismatch,

    #[error("Admin bootstrap failed: {0}")]
    Backend(String),
}

#[async_trait]
pub trait BootstrapAdminUseCase: Send + Sync {
    /// Makes sure an account for `credentials` exists and holds the admin role.
    async fn execute(&self, credentials: Credentials) -> Result<UserId, BootstrapError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_normalize_email() {
        let credentials =
            Credentials::new("  Owner@Example.COM ".to_string(), "secret".to_string()).unwrap();

        assert_eq!(credentials.email(), "owner@example.com");
        assert_eq!(credentials.password(), "secret");
    }

    #[test]
    fn credentials_reject_blank_fields() {
        assert_eq!(
            Credentials::new(" ".to_string(), "secret".to_string()).unwrap_err(),
            CredentialsError::EmptyEmail
        );
        assert_eq!(
            Credentials::new("not-an-email".to_string(), "secret".to_string()).unwrap_err(),
            CredentialsError::InvalidEmailFormat
        );
        assert_eq!(
            Credentials::new("owner@example.com".to_string(), "  ".to_string()).unwrap_err(),
            CredentialsError::EmptyPassword
        );
    }

    #[test]
    fn credentials_debug_hides_password() {
        let credentials =
            Credentials::new("owner@example.com".to_string(), "hunter22".to_string()).unwrap();
        assert!(!format!("{credentials:?}").contains("hunter22"));
    }

    #[test]
    fn login_error_messages() {
        assert_eq!(
            LoginError::InvalidCredentials.to_string(),
            "Invalid email or password"
        );
        assert_eq!(
            LoginError::NotAdmin.to_string(),
            "Unauthorized: Not an admin user"
        );
    }
}
