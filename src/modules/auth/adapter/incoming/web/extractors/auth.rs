use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};
use tracing::error;

use crate::auth::application::domain::{DenyReason, UserId};
use crate::auth::application::services::{AccessGuard, GuardState};
use crate::shared::api::ApiResponse;
use crate::AppState;

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Raw bearer token from the `Authorization` header.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

impl FromRequest for BearerToken {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            extract_token_from_header(req)
                .map(BearerToken)
                .ok_or_else(|| {
                    create_api_error(ApiResponse::unauthorized(
                        "UNAUTHENTICATED",
                        "Missing or invalid authorization header",
                    ))
                }),
        )
    }
}

/// Runs the access guard for the caller holding `token`.
pub(crate) async fn evaluate_guard(
    state: &AppState,
    token: Option<&str>,
) -> Result<GuardState, HttpResponse> {
    let identity = match token {
        Some(token) => state
            .auth
            .identity
            .current_identity(token)
            .await
            .map_err(|e| {
                error!(error = %e, "Identity lookup failed");
                ApiResponse::internal_error()
            })?,
        None => None,
    };

    let mut guard = AccessGuard::new(state.auth.policy.clone());
    Ok(guard
        .on_identity_changed(identity.map(|i| i.user_id))
        .await
        .clone())
}

/// A caller that passed the admin perimeter.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub user_id: UserId,
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let token = extract_token_from_header(req);

        Box::pin(async move {
            let state = state.ok_or_else(|| create_api_error(ApiResponse::internal_error()))?;

            match evaluate_guard(&state, token.as_deref())
                .await
                .map_err(create_api_error)?
            {
                GuardState::Authorized(user_id) => Ok(AdminUser { user_id }),
                GuardState::Loading | GuardState::Unauthorized(DenyReason::NotSignedIn) => {
                    Err(create_api_error(ApiResponse::unauthorized(
                        "UNAUTHENTICATED",
                        "Sign in required",
                    )))
                }
                GuardState::Unauthorized(_) => Err(create_api_error(ApiResponse::forbidden(
                    "ADMIN_REQUIRED",
                    "Admin access required",
                ))),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::bearer;
    use actix_web::{get, http::StatusCode, test, App, Responder};
    use serde_json::Value;

    #[get("/probe")]
    async fn probe(admin: AdminUser) -> impl Responder {
        ApiResponse::success(admin.user_id)
    }

    #[actix_web::test]
    async fn missing_header_is_unauthenticated() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(probe),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/probe").to_request())
            .await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "UNAUTHENTICATED");
    }

    #[actix_web::test]
    async fn unknown_token_is_unauthenticated() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(probe),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/probe")
            .insert_header(bearer("forged"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn admin_passes_with_own_id() {
        let builder = TestAppStateBuilder::default().with_admin_only().await;
        let token = builder.admin_token();
        let admin_id = builder.admin_id();
        let app = test::init_service(App::new().app_data(builder.build()).service(probe)).await;

        let req = test::TestRequest::get()
            .uri("/probe")
            .insert_header(bearer(&token))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"], admin_id.to_string());
    }

    #[actix_web::test]
    async fn signed_in_user_without_role_is_forbidden() {
        let builder = TestAppStateBuilder::default();
        let token = builder.user_token();
        let app = test::init_service(App::new().app_data(builder.build()).service(probe)).await;

        let req = test::TestRequest::get()
            .uri("/probe")
            .insert_header(bearer(&token))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "ADMIN_REQUIRED");
    }

    #[actix_web::test]
    async fn bearer_prefix_is_required() {
        let req = test::TestRequest::default()
            .insert_header(("Authorization", "Token abc"))
            .to_http_request();
        assert!(extract_token_from_header(&req).is_none());

        let req = test::TestRequest::default()
            .insert_header(("Authorization", "Bearer abc"))
            .to_http_request();
        assert_eq!(extract_token_from_header(&req).as_deref(), Some("abc"));
    }
}
