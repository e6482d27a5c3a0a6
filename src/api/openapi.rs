use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{
    LoginRequestDto, LoginResponse, LoginUserInfo, LogoutResponse,
};
use crate::auth::application::services::GuardStateView;
use crate::content::application::domain::ProfilePatch;
use crate::content::application::ports::incoming::use_cases::DashboardStats;
use crate::inbox::adapter::incoming::web::routes::{
    AnswerRequest, FeedbackStatusRequest, MessageStatusRequest, QuestionStatusRequest,
};
use crate::inbox::application::domain::{
    ContactSubmission, FeedbackStatus, FeedbackSubmission, MessageStatus, QuestionStatus,
    QuestionSubmission,
};
use crate::media::adapter::incoming::web::routes::UploadMediaResponse;
use crate::media::application::domain::{MediaKind, UploadTarget};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio CMS API",
        version = "1.0.0",
        description = "Public portfolio content and the admin API that edits it",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Auth
        crate::auth::adapter::incoming::web::routes::login_admin_handler,
        crate::auth::adapter::incoming::web::routes::logout_admin_handler,
        crate::auth::adapter::incoming::web::routes::get_session_handler,

        // Public portfolio
        crate::portfolio::adapter::incoming::web::routes::get_portfolio_handler,
        crate::portfolio::adapter::incoming::web::routes::get_public_profile_handler,
        crate::portfolio::adapter::incoming::web::routes::get_public_projects_handler,
        crate::portfolio::adapter::incoming::web::routes::get_public_education_handler,
        crate::portfolio::adapter::incoming::web::routes::get_public_skills_handler,
        crate::portfolio::adapter::incoming::web::routes::get_public_experiences_handler,
        crate::portfolio::adapter::incoming::web::routes::get_public_achievements_handler,

        // Visitor submissions
        crate::inbox::adapter::incoming::web::routes::submit_contact_handler,
        crate::inbox::adapter::incoming::web::routes::submit_question_handler,
        crate::inbox::adapter::incoming::web::routes::submit_feedback_handler,

        // Admin content
        crate::content::adapter::incoming::web::routes::get_dashboard_handler,
        crate::content::adapter::incoming::web::routes::get_profile_handler,
        crate::content::adapter::incoming::web::routes::upsert_profile_handler,

        // Admin inbox
        crate::inbox::adapter::incoming::web::routes::list_messages_handler,
        crate::inbox::adapter::incoming::web::routes::open_message_handler,
        crate::inbox::adapter::incoming::web::routes::update_message_status_handler,
        crate::inbox::adapter::incoming::web::routes::delete_message_handler,
        crate::inbox::adapter::incoming::web::routes::list_questions_handler,
        crate::inbox::adapter::incoming::web::routes::answer_question_handler,
        crate::inbox::adapter::incoming::web::routes::update_question_status_handler,
        crate::inbox::adapter::incoming::web::routes::delete_question_handler,
        crate::inbox::adapter::incoming::web::routes::list_feedback_handler,
        crate::inbox::adapter::incoming::web::routes::update_feedback_status_handler,
        crate::inbox::adapter::incoming::web::routes::delete_feedback_handler,

        // Media
        crate::media::adapter::incoming::web::routes::upload_media_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,

            LoginRequestDto,
            LoginResponse,
            LoginUserInfo,
            LogoutResponse,
            GuardStateView,

            DashboardStats,
            ProfilePatch,

            ContactSubmission,
            QuestionSubmission,
            FeedbackSubmission,
            MessageStatus,
            QuestionStatus,
            FeedbackStatus,
            MessageStatusRequest,
            QuestionStatusRequest,
            FeedbackStatusRequest,
            AnswerRequest,

            UploadTarget,
            MediaKind,
            UploadMediaResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Admin sign-in and session state"),
        (name = "public", description = "Read-only portfolio content"),
        (name = "inbox", description = "Visitor messages, questions and feedback"),
        (name = "content", description = "Admin content management"),
        (name = "media", description = "Image and video uploads"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from /api/admin/login"))
                        .build(),
                ),
            )
        }
    }
}
