use actix_web::HttpResponse;
use tracing::{error, warn};

use crate::content::application::ports::incoming::use_cases::ContentError;
use crate::shared::api::ApiResponse;

pub(crate) fn content_error_response(
    e: ContentError,
    not_found_code: &str,
    not_found_message: &str,
) -> HttpResponse {
    match e {
        ContentError::NotFound => ApiResponse::not_found(not_found_code, not_found_message),

        ContentError::Validation(v) => ApiResponse::bad_request("VALIDATION_ERROR", &v.to_string()),

        ContentError::Unauthenticated => {
            ApiResponse::unauthorized("UNAUTHENTICATED", "Authentication required")
        }

        ContentError::PermissionDenied(msg) => {
            warn!("Content write denied by the store: {}", msg);
            ApiResponse::forbidden("PERMISSION_DENIED", "Permission denied")
        }

        ContentError::RepositoryError(msg) => {
            error!("Content repository error: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
