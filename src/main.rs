pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{auth, content, document, inbox, media, portfolio};

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::token_blacklist_redis::RedisTokenBlacklist;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::incoming::use_cases::BootstrapAdminUseCase;
use crate::auth::application::ports::outgoing::IdentityProvider;
use crate::auth::application::services::{AdminRolePolicy, PasswordIdentityProvider};
use crate::auth::application::use_cases::bootstrap_admin::credentials_from_env;
use crate::auth::application::use_cases::{
    BootstrapAdminService, LoginAdminService, LogoutService,
};
use crate::content::application::content_use_cases::ContentUseCases;
use crate::content::application::domain::{Achievement, Education, Experience, Project, Skill};
use crate::content::application::ports::incoming::use_cases::DashboardUseCase;
use crate::content::application::services::{CollectionService, DashboardService, ProfileService};
use crate::document::adapter::outgoing::DocumentStorePostgres;
use crate::document::application::document_service::DocumentService;
use crate::inbox::application::domain::{ContactMessage, ProjectFeedback, ProjectQuestion};
use crate::inbox::application::inbox_use_cases::InboxUseCases;
use crate::inbox::application::services::InboxService;
use crate::media::adapter::incoming::web::routes::MAX_UPLOAD_BODY_BYTES;
use crate::media::adapter::outgoing::{CloudinaryMediaHost, MediaHostConfig};
use crate::media::application::ports::incoming::UploadMediaUseCase;
use crate::media::application::services::UploadMediaService;
use crate::portfolio::application::ports::incoming::use_cases::PortfolioQueryUseCase;
use crate::portfolio::application::services::{CachedPortfolioQueries, PortfolioCacheConfig};
use crate::shared::api::{custom_json_config, custom_query_config, ApiResponse};
use crate::shared::backend::{BackendClient, BackendConfig};

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::env;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub content: ContentUseCases,
    pub dashboard: Arc<dyn DashboardUseCase>,
    pub inbox: InboxUseCases,
    pub portfolio: Arc<dyn PortfolioQueryUseCase>,
    pub auth: AuthUseCases,
    pub media: Arc<dyn UploadMediaUseCase>,
}

#[cfg(not(tarpaulin_include))]
fn content_use_cases(documents: &DocumentService) -> ContentUseCases {
    ContentUseCases {
        profile: Arc::new(ProfileService::new(documents.clone())),
        projects: Arc::new(CollectionService::<Project>::new(documents.clone())),
        education: Arc::new(CollectionService::<Education>::new(documents.clone())),
        experiences: Arc::new(CollectionService::<Experience>::new(documents.clone())),
        skills: Arc::new(CollectionService::<Skill>::new(documents.clone())),
        achievements: Arc::new(CollectionService::<Achievement>::new(documents.clone())),
    }
}

#[cfg(not(tarpaulin_include))]
fn inbox_use_cases(documents: &DocumentService, content: &ContentUseCases) -> InboxUseCases {
    let questions = Arc::new(InboxService::<ProjectQuestion>::new(
        documents.clone(),
        Arc::clone(&content.profile),
    ));

    InboxUseCases {
        messages: Arc::new(InboxService::<ContactMessage>::new(
            documents.clone(),
            Arc::clone(&content.profile),
        )),
        questions: questions.clone(),
        answer_question: questions,
        feedback: Arc::new(InboxService::<ProjectFeedback>::new(
            documents.clone(),
            Arc::clone(&content.profile),
        )),
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    let _ = rustls::crypto::ring::default_provider().install_default();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let host = env::var("HOST").context("HOST is not set")?;
    let port = env::var("PORT").context("PORT is not set")?;
    let server_url = format!("{host}:{port}");

    let backend = BackendClient::connect(&BackendConfig::from_env()?).await?;

    // Content
    let documents = DocumentService::new(Arc::new(DocumentStorePostgres::new(backend.database())));
    let content = content_use_cases(&documents);
    let inbox = inbox_use_cases(&documents, &content);
    let dashboard = DashboardService::new(content.clone(), inbox.clone());
    let portfolio = CachedPortfolioQueries::new(content.clone(), PortfolioCacheConfig::from_env());

    // Auth
    let jwt_service = JwtTokenService::new(JwtConfig::from_env()?);
    let identity: Arc<dyn IdentityProvider> = Arc::new(PasswordIdentityProvider::new(
        Arc::new(UserRepositoryPostgres::new(backend.database())),
        Arc::new(Argon2Hasher::from_env()?),
        Arc::new(jwt_service),
        Arc::new(RedisTokenBlacklist::new(backend.redis())),
    ));
    let roles = AdminRolePolicy::new(documents.clone());

    if let Some(credentials) = credentials_from_env()? {
        let bootstrap = BootstrapAdminService::new(Arc::clone(&identity), roles.clone());
        if let Err(e) = bootstrap.execute(credentials).await {
            error!(error = %e, "Admin bootstrap failed");
        }
    } else {
        warn!("ADMIN_EMAIL / ADMIN_PASSWORD not set, skipping admin bootstrap");
    }

    let policy = Arc::new(roles);
    let auth = AuthUseCases {
        login: Arc::new(LoginAdminService::new(Arc::clone(&identity), policy.clone())),
        logout: Arc::new(LogoutService::new(Arc::clone(&identity))),
        identity,
        policy,
    };

    // Media
    let media_host = CloudinaryMediaHost::new(MediaHostConfig::from_env()?);
    let media = UploadMediaService::new(Arc::new(media_host));

    let state = web::Data::new(AppState {
        content,
        dashboard: Arc::new(dashboard),
        inbox,
        portfolio: Arc::new(portfolio),
        auth,
        media: Arc::new(media),
    });
    let backend_data = web::Data::new(backend.clone());
    let openapi = ApiDoc::openapi();

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(backend_data.clone())
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .app_data(web::PayloadConfig::new(MAX_UPLOAD_BODY_BYTES))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
            .default_service(web::to(|| async {
                ApiResponse::not_found("NOT_FOUND", "Resource not found")
            }))
    })
    .bind(server_url)?
    .run()
    .await?;

    backend.shutdown().await;
    info!("Server stopped");
    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_admin_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_admin_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::get_session_handler);
    // Public portfolio
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_portfolio_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_public_profile_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_public_projects_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_public_education_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_public_skills_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_public_experiences_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_public_achievements_handler);
    // Visitor submissions
    cfg.service(crate::inbox::adapter::incoming::web::routes::submit_contact_handler);
    cfg.service(crate::inbox::adapter::incoming::web::routes::submit_question_handler);
    cfg.service(crate::inbox::adapter::incoming::web::routes::submit_feedback_handler);
    // Admin content
    cfg.service(crate::content::adapter::incoming::web::routes::get_dashboard_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_profile_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::upsert_profile_handler);
    crate::content::adapter::incoming::web::routes::configure_collections(cfg);
    // Admin inbox
    cfg.service(crate::inbox::adapter::incoming::web::routes::list_messages_handler);
    cfg.service(crate::inbox::adapter::incoming::web::routes::open_message_handler);
    cfg.service(crate::inbox::adapter::incoming::web::routes::update_message_status_handler);
    cfg.service(crate::inbox::adapter::incoming::web::routes::delete_message_handler);
    cfg.service(crate::inbox::adapter::incoming::web::routes::list_questions_handler);
    cfg.service(crate::inbox::adapter::incoming::web::routes::answer_question_handler);
    cfg.service(crate::inbox::adapter::incoming::web::routes::update_question_status_handler);
    cfg.service(crate::inbox::adapter::incoming::web::routes::delete_question_handler);
    cfg.service(crate::inbox::adapter::incoming::web::routes::list_feedback_handler);
    cfg.service(crate::inbox::adapter::incoming::web::routes::update_feedback_status_handler);
    cfg.service(crate::inbox::adapter::incoming::web::routes::delete_feedback_handler);
    // Media
    cfg.service(crate::media::adapter::incoming::web::routes::upload_media_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
