use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;

use crate::shared::backend::BackendClient;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    database: &'static str,
    redis: &'static str,
}

fn probe_status(ok: bool) -> &'static str {
    if ok {
        "ok"
    } else {
        "unhealthy"
    }
}

/// Liveness probe. No I/O.
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// Readiness probe over the database and Redis pools.
#[get("/ready")]
pub async fn readiness(backend: web::Data<BackendClient>) -> impl Responder {
    let (database_ok, redis_ok) = tokio::join!(backend.database_ready(), backend.redis_ready());

    let body = ReadinessResponse {
        status: probe_status(database_ok && redis_ok),
        database: probe_status(database_ok),
        redis: probe_status(redis_ok),
    };

    if database_ok && redis_ok {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use deadpool_redis::{Config, Runtime};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use serde_json::Value;
    use std::sync::Arc;

    fn backend_with_healthy_database() -> BackendClient {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let redis = Config::from_url("redis://127.0.0.1:1")
            .create_pool(Some(Runtime::Tokio1))
            .unwrap();

        BackendClient::from_parts(Arc::new(db), Arc::new(redis))
    }

    #[actix_web::test]
    async fn liveness_is_always_ok() {
        let app = test::init_service(App::new().service(health)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ok");
    }

    #[actix_web::test]
    async fn unreachable_redis_makes_service_unavailable() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(backend_with_healthy_database()))
                .service(readiness),
        )
        .await;

        let req = test::TestRequest::get().uri("/ready").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["database"], "ok");
        assert_eq!(body["redis"], "unhealthy");
        assert_eq!(body["status"], "unhealthy");
    }
}
