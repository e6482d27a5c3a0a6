use std::env;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JwtConfigError {
    #[error("JWT_SECRET must be set")]
    MissingSecret,

    #[error("JWT_SECRET must be at least 32 characters long for HS256")]
    SecretTooShort,

    #[error("JWT_ACCESS_EXPIRY must be between 1 and 86400 seconds")]
    InvalidExpiry,
}

#[derive(Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    /// Seconds.
    pub access_token_expiry: i64,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("issuer", &self.issuer)
            .field("access_token_expiry", &self.access_token_expiry)
            .finish()
    }
}

impl JwtConfig {
    pub fn from_env() -> Result<Self, JwtConfigError> {
        let secret_key = env::var("JWT_SECRET").map_err(|_| JwtConfigError::MissingSecret)?;
        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "portfolio-cms".to_string());
        let access_token_expiry = match env::var("JWT_ACCESS_EXPIRY") {
            Ok(raw) => raw.parse().map_err(|_| JwtConfigError::InvalidExpiry)?,
            Err(_) => 1800,
        };

        Self::new(secret_key, issuer, access_token_expiry)
    }

    pub fn new(
        secret_key: String,
        issuer: String,
        access_token_expiry: i64,
    ) -> Result<Self, JwtConfigError> {
        if secret_key.len() < 32 {
            return Err(JwtConfigError::SecretTooShort);
        }
        if !(1..=86400).contains(&access_token_expiry) {
            return Err(JwtConfigError::InvalidExpiry);
        }

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
        })
    }
}
