use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{LogoutError, LogoutUseCase};
use crate::auth::application::ports::outgoing::IdentityProvider;

#[derive(Clone)]
pub struct LogoutService {
    identity: Arc<dyn IdentityProvider>,
}

impl LogoutService {
    pub fn new(identity: Arc<dyn IdentityProvider>) -> Self {
        Self { identity }
    }
}

#[async_trait]
impl LogoutUseCase for LogoutService {
    async fn execute(&self, token: &str) -> Result<(), LogoutError> {
        self.identity
            .sign_out(token)
            .await
            .map_err(|e| LogoutError::Backend(e.to_string()))
    }
}
