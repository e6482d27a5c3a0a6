pub mod authorization_policy;
pub mod identity_provider;
pub mod password_hasher;
pub mod token_blacklist;
pub mod token_provider;
pub mod user_repository;

pub use authorization_policy::AuthorizationPolicy;
pub use identity_provider::{IdentityError, IdentityProvider};
pub use password_hasher::{HashError, PasswordHasher};
pub use token_blacklist::{BlacklistError, TokenBlacklist};
pub use token_provider::{IssuedToken, TokenClaims, TokenError, TokenProvider};
pub use user_repository::{NewUser, UserRepository, UserRepositoryError};
