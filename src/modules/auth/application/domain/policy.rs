use std::fmt;

/// Why the perimeter refused a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DenyReason {
    NotSignedIn,
    MissingAdminRole,
    /// The role lookup itself was refused by the store.
    PermissionDenied,
    RoleLookupFailed(String),
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DenyReason::NotSignedIn => write!(f, "not signed in"),
            DenyReason::MissingAdminRole => write!(f, "missing admin role"),
            DenyReason::PermissionDenied => write!(f, "role lookup denied"),
            DenyReason::RoleLookupFailed(msg) => write!(f, "role lookup failed: {}", msg),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    Deny(DenyReason),
}

impl AccessDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allow)
    }
}
