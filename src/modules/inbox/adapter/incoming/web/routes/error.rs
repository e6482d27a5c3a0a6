use actix_web::{http::StatusCode, HttpResponse};
use tracing::{error, warn};

use crate::inbox::application::ports::incoming::use_cases::InboxError;
use crate::shared::api::ApiResponse;

pub(super) struct InboxLabels {
    pub not_found_code: &'static str,
    pub not_found_message: &'static str,
}

pub(super) const MESSAGES: InboxLabels = InboxLabels {
    not_found_code: "MESSAGE_NOT_FOUND",
    not_found_message: "Message not found",
};

pub(super) const QUESTIONS: InboxLabels = InboxLabels {
    not_found_code: "QUESTION_NOT_FOUND",
    not_found_message: "Question not found",
};

pub(super) const FEEDBACK: InboxLabels = InboxLabels {
    not_found_code: "FEEDBACK_NOT_FOUND",
    not_found_message: "Feedback not found",
};

pub(super) fn inbox_error_response(e: InboxError, labels: &InboxLabels) -> HttpResponse {
    match e {
        InboxError::NotFound => {
            ApiResponse::not_found(labels.not_found_code, labels.not_found_message)
        }

        InboxError::Validation(v) => ApiResponse::bad_request("VALIDATION_ERROR", &v.to_string()),

        InboxError::InvalidTransition { .. } => {
            ApiResponse::conflict("INVALID_STATUS_TRANSITION", &e.to_string())
        }

        InboxError::SiteNotConfigured => ApiResponse::error(
            StatusCode::SERVICE_UNAVAILABLE,
            "SITE_NOT_CONFIGURED",
            "This portfolio is not accepting messages yet",
        ),

        InboxError::PermissionDenied(msg) => {
            warn!("Inbox access denied by the store: {}", msg);
            ApiResponse::forbidden("PERMISSION_DENIED", "Permission denied")
        }

        InboxError::RepositoryError(msg) => {
            error!("Inbox repository error: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
