use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::content::application::ports::incoming::use_cases::DashboardStats;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Record counts for the admin landing page
#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    tag = "content",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Counts", body = inline(SuccessResponse<DashboardStats>)),
        (status = 500, description = "A read failed", body = ErrorResponse),
    )
)]
#[get("/api/admin/dashboard")]
pub async fn get_dashboard_handler(admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.dashboard.stats(admin.user_id).await {
        Ok(stats) => ApiResponse::success(stats),
        Err(e) => {
            error!("Dashboard failed for {}: {}", admin.user_id, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::bearer;
    use crate::tests::support::fixtures;
    use crate::content::application::ports::incoming::use_cases::{
        DashboardError, DashboardUseCase,
    };
    use crate::auth::application::domain::UserId;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    struct BrokenDashboard;

    #[async_trait]
    impl DashboardUseCase for BrokenDashboard {
        async fn stats(&self, _owner: UserId) -> Result<DashboardStats, DashboardError> {
            Err(DashboardError::LoadFailed("connection reset".into()))
        }
    }

    #[actix_web::test]
    async fn dashboard_reports_owner_counts() {
        let builder = TestAppStateBuilder::default().with_admin().await;
        let token = builder.admin_token();
        builder
            .content()
            .projects
            .create(builder.admin_id(), fixtures::project("CMS", 0))
            .await
            .unwrap();

        let app = test::init_service(
            App::new()
                .app_data(builder.build())
                .service(get_dashboard_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/dashboard")
            .insert_header(bearer(&token))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["projects"], 1);
        assert_eq!(body["data"]["new_messages"], 0);
    }

    #[actix_web::test]
    async fn failed_read_is_internal_error() {
        let builder = TestAppStateBuilder::default()
            .with_admin()
            .await
            .with_dashboard(BrokenDashboard);
        let token = builder.admin_token();
        let app = test::init_service(
            App::new()
                .app_data(builder.build())
                .service(get_dashboard_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/dashboard")
            .insert_header(bearer(&token))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
