use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::evaluate_guard;
use crate::auth::adapter::incoming::web::extractors::BearerToken;
use crate::auth::application::services::GuardStateView;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Access guard state for the caller
///
/// Never rejects: a missing or unknown token reports `unauthorized`.
#[utoipa::path(
    get,
    path = "/api/admin/session",
    tag = "auth",
    responses(
        (status = 200, description = "Guard state", body = inline(SuccessResponse<GuardStateView>)),
        (status = 500, description = "Identity lookup failed", body = ErrorResponse),
    )
)]
#[get("/api/admin/session")]
pub async fn get_session_handler(
    token: Option<BearerToken>,
    data: web::Data<AppState>,
) -> impl Responder {
    let token = token.map(|t| t.0);

    match evaluate_guard(&data, token.as_deref()).await {
        Ok(state) => ApiResponse::success(GuardStateView::from(&state)),
        Err(response) => response,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::bearer;
    use actix_web::{test, App};
    use serde_json::Value;

    async fn session_for(builder: TestAppStateBuilder, token: Option<String>) -> Value {
        let app = test::init_service(
            App::new()
                .app_data(builder.build())
                .service(get_session_handler),
        )
        .await;

        let mut req = test::TestRequest::get().uri("/api/admin/session");
        if let Some(token) = token {
            req = req.insert_header(bearer(&token));
        }
        test::call_and_read_body_json(&app, req.to_request()).await
    }

    #[actix_web::test]
    async fn anonymous_caller_is_unauthorized() {
        let body = session_for(TestAppStateBuilder::default(), None).await;

        assert_eq!(body["data"]["state"], "unauthorized");
        assert_eq!(body["data"]["reason"], "not signed in");
    }

    #[actix_web::test]
    async fn admin_is_authorized() {
        let builder = TestAppStateBuilder::default().with_admin_only().await;
        let token = builder.admin_token();
        let admin_id = builder.admin_id();

        let body = session_for(builder, Some(token)).await;

        assert_eq!(body["data"]["state"], "authorized");
        assert_eq!(body["data"]["user_id"], admin_id.to_string());
    }

    #[actix_web::test]
    async fn plain_user_lacks_admin_role() {
        let builder = TestAppStateBuilder::default();
        let token = builder.user_token();

        let body = session_for(builder, Some(token)).await;

        assert_eq!(body["data"]["state"], "unauthorized");
        assert_eq!(body["data"]["reason"], "missing admin role");
    }
}
