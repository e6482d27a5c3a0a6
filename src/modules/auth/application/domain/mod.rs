pub mod entities;
pub mod policy;

pub use entities::{Identity, Role, RoleAssignment, Session, User, UserId, USER_ROLES_COLLECTION};
pub use policy::{AccessDecision, DenyReason};
