use actix_web::{post, web, HttpResponse, Responder};

use super::error::{inbox_error_response, InboxLabels, FEEDBACK, MESSAGES, QUESTIONS};
use crate::api::schemas::ErrorResponse;
use crate::inbox::application::domain::{
    ContactSubmission, FeedbackSubmission, InboxEntity, QuestionSubmission,
};
use crate::inbox::application::ports::incoming::use_cases::InboxUseCase;
use crate::shared::api::ApiResponse;
use crate::AppState;

async fn submit<T: InboxEntity>(
    use_case: &dyn InboxUseCase<T>,
    submission: T::Submission,
    labels: &InboxLabels,
) -> HttpResponse {
    match use_case.submit(submission).await {
        Ok(record) => ApiResponse::created(record),
        Err(e) => inbox_error_response(e, labels),
    }
}

/// Send a contact message
#[utoipa::path(
    post,
    path = "/api/public/contact",
    tag = "public",
    request_body = ContactSubmission,
    responses(
        (status = 201, description = "Message stored with status `new`"),
        (status = 400, description = "Invalid submission", body = ErrorResponse),
        (status = 503, description = "No profile exists yet", body = ErrorResponse),
    )
)]
#[post("/api/public/contact")]
pub async fn submit_contact_handler(
    req: web::Json<ContactSubmission>,
    data: web::Data<AppState>,
) -> impl Responder {
    submit(&*data.inbox.messages, req.into_inner(), &MESSAGES).await
}

/// Ask a question about a project
#[utoipa::path(
    post,
    path = "/api/public/questions",
    tag = "public",
    request_body = QuestionSubmission,
    responses(
        (status = 201, description = "Question stored with status `pending`"),
        (status = 400, description = "Invalid submission", body = ErrorResponse),
        (status = 503, description = "No profile exists yet", body = ErrorResponse),
    )
)]
#[post("/api/public/questions")]
pub async fn submit_question_handler(
    req: web::Json<QuestionSubmission>,
    data: web::Data<AppState>,
) -> impl Responder {
    submit(&*data.inbox.questions, req.into_inner(), &QUESTIONS).await
}

/// Rate a project
#[utoipa::path(
    post,
    path = "/api/public/feedback",
    tag = "public",
    request_body = FeedbackSubmission,
    responses(
        (status = 201, description = "Feedback stored with status `pending`"),
        (status = 400, description = "Invalid submission", body = ErrorResponse),
        (status = 503, description = "No profile exists yet", body = ErrorResponse),
    )
)]
#[post("/api/public/feedback")]
pub async fn submit_feedback_handler(
    req: web::Json<FeedbackSubmission>,
    data: web::Data<AppState>,
) -> impl Responder {
    submit(&*data.inbox.feedback, req.into_inner(), &FEEDBACK).await
}
