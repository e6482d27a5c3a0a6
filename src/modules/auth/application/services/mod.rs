pub mod access_guard;
pub mod admin_role_policy;
pub mod password_identity_provider;

pub use access_guard::{AccessGuard, GuardState, GuardStateView};
pub use admin_role_policy::AdminRolePolicy;
pub use password_identity_provider::PasswordIdentityProvider;
