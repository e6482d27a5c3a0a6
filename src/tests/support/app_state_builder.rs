use actix_web::web;
use serde_json::json;
use std::sync::Arc;

use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::domain::{UserId, USER_ROLES_COLLECTION};
use crate::auth::application::ports::incoming::use_cases::{LoginAdminUseCase, LogoutUseCase};
use crate::auth::application::services::AdminRolePolicy;
use crate::auth::application::use_cases::{LoginAdminService, LogoutService};
use crate::content::application::content_use_cases::ContentUseCases;
use crate::content::application::ports::incoming::use_cases::DashboardUseCase;
use crate::content::application::services::DashboardService;
use crate::document::application::document_service::DocumentService;
use crate::inbox::application::inbox_use_cases::InboxUseCases;
use crate::media::application::ports::incoming::UploadMediaUseCase;
use crate::media::application::ports::outgoing::MediaHost;
use crate::media::application::services::UploadMediaService;
use crate::portfolio::application::ports::incoming::use_cases::PortfolioQueryUseCase;
use crate::portfolio::application::services::{CachedPortfolioQueries, PortfolioCacheConfig};
use crate::tests::support::auth_helper::{ADMIN_EMAIL, ADMIN_PASSWORD, USER_EMAIL, USER_PASSWORD};
use crate::tests::support::services::{
    content_use_cases, inbox_use_cases, memory_documents, save_profile,
};
use crate::tests::support::stubs::{StubIdentityProvider, StubMediaHost};
use crate::AppState;

/// Application state over an in-memory document store with the real
/// services. Two accounts exist from the start, each with an open session:
/// the site owner (no role until `with_admin*`) and a visitor.
pub struct TestAppStateBuilder {
    documents: DocumentService,
    content: ContentUseCases,
    inbox: InboxUseCases,
    identity: Arc<StubIdentityProvider>,
    roles: AdminRolePolicy,
    admin_id: UserId,
    admin_token: String,
    user_id: UserId,
    user_token: String,
    dashboard: Option<Arc<dyn DashboardUseCase>>,
    login: Option<Arc<dyn LoginAdminUseCase>>,
    logout: Option<Arc<dyn LogoutUseCase>>,
    media: Option<Arc<dyn UploadMediaUseCase>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let documents = memory_documents();
        let content = content_use_cases(&documents);
        let inbox = inbox_use_cases(&documents, &content);

        let identity = Arc::new(StubIdentityProvider::new());
        let admin_id = identity.register(ADMIN_EMAIL, ADMIN_PASSWORD);
        let admin_token = identity.issue(admin_id, ADMIN_EMAIL);
        let user_id = identity.register(USER_EMAIL, USER_PASSWORD);
        let user_token = identity.issue(user_id, USER_EMAIL);

        Self {
            roles: AdminRolePolicy::new(documents.clone()),
            documents,
            content,
            inbox,
            identity,
            admin_id,
            admin_token,
            user_id,
            user_token,
            dashboard: None,
            login: None,
            logout: None,
            media: None,
        }
    }
}

impl TestAppStateBuilder {
    /// Saves a profile owned by the site owner.
    pub async fn with_profile(self) -> Self {
        save_profile(&self.documents, self.admin_id).await;
        self
    }

    /// Grants the owner the admin role, without a profile.
    pub async fn with_admin_only(self) -> Self {
        self.roles
            .grant_admin(self.admin_id)
            .await
            .expect("admin role saves");
        self
    }

    pub async fn with_admin(self) -> Self {
        self.with_admin_only().await.with_profile().await
    }

    /// Gives the visitor a non-admin role row.
    pub async fn with_non_admin(self) -> Self {
        self.documents
            .create(
                USER_ROLES_COLLECTION,
                Some(self.user_id),
                json!({ "role": "user" }),
            )
            .await
            .expect("role row saves");
        self
    }

    pub fn with_dashboard(mut self, uc: impl DashboardUseCase + 'static) -> Self {
        self.dashboard = Some(Arc::new(uc));
        self
    }

    pub fn with_login(mut self, uc: impl LoginAdminUseCase + 'static) -> Self {
        self.login = Some(Arc::new(uc));
        self
    }

    pub fn with_logout(mut self, uc: impl LogoutUseCase + 'static) -> Self {
        self.logout = Some(Arc::new(uc));
        self
    }

    pub fn with_media_host(mut self, host: Arc<dyn MediaHost>) -> Self {
        self.media = Some(Arc::new(UploadMediaService::new(host)));
        self
    }

    pub fn admin_id(&self) -> UserId {
        self.admin_id
    }

    pub fn admin_token(&self) -> String {
        self.admin_token.clone()
    }

    pub fn user_token(&self) -> String {
        self.user_token.clone()
    }

    pub fn content(&self) -> ContentUseCases {
        self.content.clone()
    }

    pub fn inbox(&self) -> InboxUseCases {
        self.inbox.clone()
    }

    pub fn identity(&self) -> Arc<StubIdentityProvider> {
        Arc::clone(&self.identity)
    }

    pub fn build(self) -> web::Data<AppState> {
        let policy = Arc::new(self.roles.clone());

        let auth = AuthUseCases {
            login: self.login.unwrap_or_else(|| {
                Arc::new(LoginAdminService::new(
                    self.identity.clone(),
                    policy.clone(),
                ))
            }),
            logout: self
                .logout
                .unwrap_or_else(|| Arc::new(LogoutService::new(self.identity.clone()))),
            identity: self.identity.clone(),
            policy,
        };

        let portfolio: Arc<dyn PortfolioQueryUseCase> = Arc::new(CachedPortfolioQueries::new(
            self.content.clone(),
            PortfolioCacheConfig::default(),
        ));

        let dashboard = self.dashboard.unwrap_or_else(|| {
            Arc::new(DashboardService::new(
                self.content.clone(),
                self.inbox.clone(),
            ))
        });

        let media = self.media.unwrap_or_else(|| {
            Arc::new(UploadMediaService::new(Arc::new(StubMediaHost::default())))
        });

        web::Data::new(AppState {
            content: self.content,
            dashboard,
            inbox: self.inbox,
            portfolio,
            auth,
            media,
        })
    }
}
