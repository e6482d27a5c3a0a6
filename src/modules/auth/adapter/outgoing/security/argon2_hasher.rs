use argon2::{
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;
use rand_core::OsRng;

use crate::auth::application::ports::outgoing::{HashError, PasswordHasher};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid Argon2 parameters: {0}")]
pub struct Argon2ConfigError(String);

/// Argon2id with parameters sized for a small VPS by default.
#[derive(Clone)]
pub struct Argon2Hasher {
    params: Params,
    #[cfg(test)]
    salt_override: Option<SaltString>,
}

impl Argon2Hasher {
    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, Argon2ConfigError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| Argon2ConfigError(e.to_string()))?;

        Ok(Self {
            params,
            #[cfg(test)]
            salt_override: None,
        })
    }

    /// `ARGON2_MEMORY_KIB` (4096), `ARGON2_ITERATIONS` (3), `ARGON2_PARALLELISM` (1).
    pub fn from_env() -> Result<Self, Argon2ConfigError> {
        fn var(key: &str, default: u32) -> u32 {
            std::env::var(key)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default)
        }

        Self::with_params(
            var("ARGON2_MEMORY_KIB", 4 * 1024),
            var("ARGON2_ITERATIONS", 3),
            var("ARGON2_PARALLELISM", 1),
        )
    }

    #[cfg(test)]
    fn with_fixed_salt(salt: &str) -> Self {
        Self {
            params: Params::new(4 * 1024, 3, 1, None).expect("Invalid params"),
            salt_override: Some(SaltString::from_b64(salt).expect("Invalid salt")),
        }
    }
}

#[async_trait]
impl PasswordHasher for Argon2Hasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_string();
        let params = self.params.clone();

        #[cfg(test)]
        let salt_override = self.salt_override.clone();

        tokio::task::spawn_blocking(move || {
            let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

            #[cfg(test)]
            let salt = salt_override.unwrap_or_else(|| SaltString::generate(&mut OsRng));

            #[cfg(not(test))]
            let salt = SaltString::generate(&mut OsRng);

            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|_| HashError::HashFailed)
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || {
            let parsed = PasswordHash::new(&hash).map_err(|_| HashError::VerifyFailed)?;

            match Argon2::default().verify_password(password.as_bytes(), &parsed) {
                Ok(()) => Ok(true),
                Err(PasswordHashError::Password) => Ok(false),
                Err(_) => Err(HashError::VerifyFailed),
            }
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> Argon2Hasher {
        Argon2Hasher::with_params(4 * 1024, 3, 1).unwrap()
    }

    #[tokio::test]
    async fn hash_then_verify() {
        let hasher = hasher();
        let hash = hasher.hash_password("SecurePassword123").await.unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher
            .verify_password("SecurePassword123", &hash)
            .await
            .unwrap());
        assert!(!hasher.verify_password("WrongPassword", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn unparsable_hash_is_an_error() {
        let result = hasher().verify_password("pw", "invalid-hash").await;
        assert_eq!(result, Err(HashError::VerifyFailed));
    }

    #[tokio::test]
    async fn too_short_salt_fails_hashing() {
        let bad_salt = SaltString::encode_b64(b"short").unwrap();
        let hasher = Argon2Hasher::with_fixed_salt(bad_salt.as_str());

        assert_eq!(
            hasher.hash_password("abc123").await,
            Err(HashError::HashFailed)
        );
    }

    #[test]
    fn zero_iterations_are_rejected() {
        assert!(Argon2Hasher::with_params(4 * 1024, 0, 1).is_err());
    }
}
