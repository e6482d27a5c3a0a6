use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::BearerToken;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct LogoutResponse {
    #[schema(example = "Signed out")]
    pub message: String,
}

/// Sign out
///
/// Revokes the presented token. Always answers 200 once a token is supplied.
#[utoipa::path(
    post,
    path = "/api/admin/logout",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Signed out", body = inline(SuccessResponse<LogoutResponse>)),
        (status = 401, description = "Missing bearer token", body = ErrorResponse),
    )
)]
#[post("/api/admin/logout")]
pub async fn logout_admin_handler(
    token: BearerToken,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.logout.execute(&token.0).await {
        Ok(()) => info!("Admin signed out"),
        Err(e) => error!(error = %e, "Sign-out failed"),
    }

    ApiResponse::success(LogoutResponse {
        message: "Signed out".to_string(),
    })
}
