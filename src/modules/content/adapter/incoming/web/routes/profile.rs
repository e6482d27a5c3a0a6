use actix_web::{get, put, web, Responder};

use super::error::content_error_response;
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::content::application::domain::ProfilePatch;
use crate::portfolio::application::domain::Section;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Current profile, `null` before the first save
#[utoipa::path(
    get,
    path = "/api/admin/profile",
    tag = "content",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The profile or null"),
        (status = 401, description = "Not signed in", body = ErrorResponse),
    )
)]
#[get("/api/admin/profile")]
pub async fn get_profile_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.content.profile.get_current().await {
        Ok(profile) => ApiResponse::success(profile),
        Err(e) => content_error_response(e, "PROFILE_NOT_FOUND", "Profile not found"),
    }
}

/// Save profile fields, creating the profile on first save
///
/// Omitted fields are kept, `null` clears a field.
#[utoipa::path(
    put,
    path = "/api/admin/profile",
    tag = "content",
    security(("bearer_auth" = [])),
    request_body = ProfilePatch,
    responses(
        (status = 200, description = "Saved profile"),
        (status = 400, description = "Invalid field", body = ErrorResponse),
    )
)]
#[put("/api/admin/profile")]
pub async fn upsert_profile_handler(
    admin: AdminUser,
    req: web::Json<ProfilePatch>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .content
        .profile
        .upsert(admin.user_id, req.into_inner())
        .await
    {
        Ok(profile) => {
            data.portfolio.invalidate(Section::Profile);
            ApiResponse::success(profile)
        }
        Err(e) => content_error_response(e, "PROFILE_NOT_FOUND", "Profile not found"),
    }
}
