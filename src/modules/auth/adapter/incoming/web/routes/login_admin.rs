use actix_web::{http::StatusCode, post, web, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::ports::incoming::use_cases::{Credentials, LoginError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "owner@example.com")]
    pub email: String,
    #[schema(example = "correct horse battery staple")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
    pub user: LoginUserInfo,
}

#[derive(Serialize, ToSchema)]
pub struct LoginUserInfo {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: String,
    #[schema(example = "owner@example.com")]
    pub email: String,
}

/// Admin sign-in
///
/// Succeeds only for accounts holding the admin role. Any other account is
/// signed straight back out.
#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Signed in", body = inline(SuccessResponse<LoginResponse>)),
        (status = 400, description = "Malformed credentials", body = ErrorResponse),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INVALID_CREDENTIALS", "message": "Invalid email or password" }
            })
        ),
        (
            status = 403,
            description = "Not an admin, or role lookup refused",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "NOT_ADMIN", "message": "Unauthorized: Not an admin user" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/admin/login")]
pub async fn login_admin_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let credentials = match Credentials::new(dto.email, dto.password) {
        Ok(credentials) => credentials,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    info!(email = %credentials.email(), "Admin login attempt");

    match data.auth.login.execute(credentials).await {
        Ok(session) => ApiResponse::success(LoginResponse {
            access_token: session.access_token,
            expires_at: session.expires_at,
            user: LoginUserInfo {
                id: session.user_id.to_string(),
                email: session.email,
            },
        }),

        Err(LoginError::InvalidCredentials) => {
            warn!("Login failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }

        Err(LoginError::PermissionDenied(hint)) => {
            ApiResponse::forbidden("PERMISSION_DENIED", &hint)
        }

        Err(e @ LoginError::NotAdmin) => ApiResponse::forbidden("NOT_ADMIN", &e.to_string()),

        Err(LoginError::Backend(msg)) => {
            error!(error = %msg, "Login failed");
            ApiResponse::error(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", &msg)
        }
    }
}
