use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{LoginAdminUseCase, LogoutUseCase};
use crate::auth::application::ports::outgoing::{AuthorizationPolicy, IdentityProvider};

#[derive(Clone)]
pub struct AuthUseCases {
    pub login: Arc<dyn LoginAdminUseCase>,
    pub logout: Arc<dyn LogoutUseCase>,
    /// Resolves bearer tokens for the admin perimeter.
    pub identity: Arc<dyn IdentityProvider>,
    pub policy: Arc<dyn AuthorizationPolicy>,
}
