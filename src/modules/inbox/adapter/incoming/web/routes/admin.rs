use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::error::{inbox_error_response, InboxLabels, FEEDBACK, MESSAGES, QUESTIONS};
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::auth::application::domain::entities::UserId;
use crate::inbox::application::domain::{
    FeedbackStatus, InboxEntity, MessageStatus, QuestionStatus,
};
use crate::inbox::application::ports::incoming::use_cases::InboxUseCase;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
#[serde(bound = "S: Deserialize<'de>")]
pub struct StatusQuery<S> {
    #[serde(default)]
    pub status: Option<S>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct MessageStatusRequest {
    pub status: MessageStatus,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct QuestionStatusRequest {
    pub status: QuestionStatus,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct FeedbackStatusRequest {
    pub status: FeedbackStatus,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AnswerRequest {
    #[schema(example = "It runs on Postgres with a JSONB document table.")]
    pub answer: String,
}

//
// ──────────────────────────────────────────────────────────
// Shared handling
// ──────────────────────────────────────────────────────────
//

async fn list<T: InboxEntity>(
    use_case: &dyn InboxUseCase<T>,
    owner: UserId,
    status: Option<T::Status>,
    labels: &InboxLabels,
) -> HttpResponse {
    match use_case.get_all(owner, status).await {
        Ok(records) => ApiResponse::success(records),
        Err(e) => inbox_error_response(e, labels),
    }
}

async fn set_status<T: InboxEntity>(
    use_case: &dyn InboxUseCase<T>,
    id: Uuid,
    status: T::Status,
    labels: &InboxLabels,
) -> HttpResponse {
    match use_case.set_status(id, status).await {
        Ok(record) => ApiResponse::success(record),
        Err(e) => inbox_error_response(e, labels),
    }
}

async fn remove<T: InboxEntity>(
    use_case: &dyn InboxUseCase<T>,
    id: Uuid,
    labels: &InboxLabels,
) -> HttpResponse {
    match use_case.delete(id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => inbox_error_response(e, labels),
    }
}

//
// ──────────────────────────────────────────────────────────
// Contact messages
// ──────────────────────────────────────────────────────────
//

/// List contact messages, newest first
#[utoipa::path(
    get,
    path = "/api/admin/messages",
    tag = "inbox",
    params(("status" = Option<MessageStatus>, Query, description = "Only messages in this status")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Messages"),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
    )
)]
#[get("/api/admin/messages")]
pub async fn list_messages_handler(
    admin: AdminUser,
    query: web::Query<StatusQuery<MessageStatus>>,
    data: web::Data<AppState>,
) -> impl Responder {
    list(&*data.inbox.messages, admin.user_id, query.into_inner().status, &MESSAGES).await
}

/// Open a message, marking it read when it is new
#[utoipa::path(
    post,
    path = "/api/admin/messages/{id}/open",
    tag = "inbox",
    params(("id" = Uuid, Path, description = "Message id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The message"),
        (status = 404, description = "Message not found", body = ErrorResponse),
    )
)]
#[post("/api/admin/messages/{id}/open")]
pub async fn open_message_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.inbox.messages.open(path.into_inner()).await {
        Ok(record) => ApiResponse::success(record),
        Err(e) => inbox_error_response(e, &MESSAGES),
    }
}

#[utoipa::path(
    put,
    path = "/api/admin/messages/{id}/status",
    tag = "inbox",
    params(("id" = Uuid, Path, description = "Message id")),
    request_body = MessageStatusRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Updated message"),
        (status = 404, description = "Message not found", body = ErrorResponse),
        (status = 409, description = "Status change not allowed", body = ErrorResponse),
    )
)]
#[put("/api/admin/messages/{id}/status")]
pub async fn update_message_status_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<MessageStatusRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    set_status(&*data.inbox.messages, path.into_inner(), req.status, &MESSAGES).await
}

#[utoipa::path(
    delete,
    path = "/api/admin/messages/{id}",
    tag = "inbox",
    params(("id" = Uuid, Path, description = "Message id")),
    security(("bearer_auth" = [])),
    responses((status = 204, description = "Deleted, or already absent"))
)]
#[delete("/api/admin/messages/{id}")]
pub async fn delete_message_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    remove(&*data.inbox.messages, path.into_inner(), &MESSAGES).await
}

//
// ──────────────────────────────────────────────────────────
// Project questions
// ──────────────────────────────────────────────────────────
//

/// List project questions, newest first
#[utoipa::path(
    get,
    path = "/api/admin/questions",
    tag = "inbox",
    params(("status" = Option<QuestionStatus>, Query, description = "Only questions in this status")),
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Questions"))
)]
#[get("/api/admin/questions")]
pub async fn list_questions_handler(
    admin: AdminUser,
    query: web::Query<StatusQuery<QuestionStatus>>,
    data: web::Data<AppState>,
) -> impl Responder {
    list(&*data.inbox.questions, admin.user_id, query.into_inner().status, &QUESTIONS).await
}

/// Answer a project question
#[utoipa::path(
    put,
    path = "/api/admin/questions/{id}/answer",
    tag = "inbox",
    params(("id" = Uuid, Path, description = "Question id")),
    request_body = AnswerRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Answered question"),
        (status = 400, description = "Empty answer", body = ErrorResponse),
        (status = 404, description = "Question not found", body = ErrorResponse),
    )
)]
#[put("/api/admin/questions/{id}/answer")]
pub async fn answer_question_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<AnswerRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .inbox
        .answer_question
        .answer(path.into_inner(), req.into_inner().answer)
        .await
    {
        Ok(record) => ApiResponse::success(record),
        Err(e) => inbox_error_response(e, &QUESTIONS),
    }
}

#[utoipa::path(
    put,
    path = "/api/admin/questions/{id}/status",
    tag = "inbox",
    params(("id" = Uuid, Path, description = "Question id")),
    request_body = QuestionStatusRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Updated question"),
        (status = 409, description = "Status change not allowed", body = ErrorResponse),
    )
)]
#[put("/api/admin/questions/{id}/status")]
pub async fn update_question_status_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<QuestionStatusRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    set_status(&*data.inbox.questions, path.into_inner(), req.status, &QUESTIONS).await
}

#[utoipa::path(
    delete,
    path = "/api/admin/questions/{id}",
    tag = "inbox",
    params(("id" = Uuid, Path, description = "Question id")),
    security(("bearer_auth" = [])),
    responses((status = 204, description = "Deleted, or already absent"))
)]
#[delete("/api/admin/questions/{id}")]
pub async fn delete_question_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    remove(&*data.inbox.questions, path.into_inner(), &QUESTIONS).await
}

//
// ──────────────────────────────────────────────────────────
// Project feedback
// ──────────────────────────────────────────────────────────
//

/// List project feedback, newest first
#[utoipa::path(
    get,
    path = "/api/admin/feedback",
    tag = "inbox",
    params(("status" = Option<FeedbackStatus>, Query, description = "Only feedback in this status")),
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Feedback"))
)]
#[get("/api/admin/feedback")]
pub async fn list_feedback_handler(
    admin: AdminUser,
    query: web::Query<StatusQuery<FeedbackStatus>>,
    data: web::Data<AppState>,
) -> impl Responder {
    list(&*data.inbox.feedback, admin.user_id, query.into_inner().status, &FEEDBACK).await
}

#[utoipa::path(
    put,
    path = "/api/admin/feedback/{id}/status",
    tag = "inbox",
    params(("id" = Uuid, Path, description = "Feedback id")),
    request_body = FeedbackStatusRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Updated feedback"),
        (status = 409, description = "Status change not allowed", body = ErrorResponse),
    )
)]
#[put("/api/admin/feedback/{id}/status")]
pub async fn update_feedback_status_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<FeedbackStatusRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    set_status(&*data.inbox.feedback, path.into_inner(), req.status, &FEEDBACK).await
}

#[utoipa::path(
    delete,
    path = "/api/admin/feedback/{id}",
    tag = "inbox",
    params(("id" = Uuid, Path, description = "Feedback id")),
    security(("bearer_auth" = [])),
    responses((status = 204, description = "Deleted, or already absent"))
)]
#[delete("/api/admin/feedback/{id}")]
pub async fn delete_feedback_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    remove(&*data.inbox.feedback, path.into_inner(), &FEEDBACK).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::bearer;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    async fn submit_message(builder: &TestAppStateBuilder) -> Uuid {
        builder
            .inbox()
            .messages
            .submit(crate::inbox::application::domain::ContactSubmission {
                name: "Jane".into(),
                email: "jane@example.com".into(),
                subject: None,
                message: "Hello".into(),
            })
            .await
            .unwrap()
            .id
    }

    #[actix_web::test]
    async fn admin_opens_then_archives_then_restores_message() {
        let builder = TestAppStateBuilder::default().with_admin().await;
        let token = builder.admin_token();
        let id = submit_message(&builder).await;

        let app = test::init_service(
            App::new()
                .app_data(builder.build())
                .service(open_message_handler)
                .service(update_message_status_handler)
                .service(list_messages_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/admin/messages/{id}/open"))
            .insert_header(bearer(&token))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["status"], "read");

        for (status, expected) in [("archived", StatusCode::OK), ("new", StatusCode::OK)] {
            let req = test::TestRequest::put()
                .uri(&format!("/api/admin/messages/{id}/status"))
                .insert_header(bearer(&token))
                .set_json(json!({ "status": status }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), expected);
        }

        let req = test::TestRequest::get()
            .uri("/api/admin/messages?status=new")
            .insert_header(bearer(&token))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn read_message_cannot_go_back_to_new() {
        let builder = TestAppStateBuilder::default().with_admin().await;
        let token = builder.admin_token();
        let id = submit_message(&builder).await;
        builder.inbox().messages.open(id).await.unwrap();

        let app = test::init_service(
            App::new()
                .app_data(builder.build())
                .service(update_message_status_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/admin/messages/{id}/status"))
            .insert_header(bearer(&token))
            .set_json(json!({ "status": "new" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_STATUS_TRANSITION");
    }

    #[actix_web::test]
    async fn inbox_requires_a_signed_in_admin() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(list_feedback_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/feedback")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn answering_missing_question_is_not_found() {
        let builder = TestAppStateBuilder::default().with_admin().await;
        let token = builder.admin_token();
        let app = test::init_service(
            App::new()
                .app_data(builder.build())
                .service(answer_question_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/admin/questions/{}/answer", Uuid::new_v4()))
            .insert_header(bearer(&token))
            .set_json(json!({ "answer": "Yes" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "QUESTION_NOT_FOUND");
    }

    #[actix_web::test]
    async fn deleting_missing_feedback_is_no_content() {
        let builder = TestAppStateBuilder::default().with_admin().await;
        let token = builder.admin_token();
        let app = test::init_service(
            App::new()
                .app_data(builder.build())
                .service(delete_feedback_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/admin/feedback/{}", Uuid::new_v4()))
            .insert_header(bearer(&token))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }
}
