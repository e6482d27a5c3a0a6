use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::content::application::domain::ExperienceFilter;
use crate::portfolio::application::ports::incoming::use_cases::PortfolioError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn respond<T: Serialize>(result: Result<T, PortfolioError>) -> HttpResponse {
    match result {
        Ok(data) => ApiResponse::success(data),
        Err(e) => {
            error!("Public read failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// Every public section at once
#[utoipa::path(
    get,
    path = "/api/public/portfolio",
    tag = "public",
    responses(
        (status = 200, description = "Profile and all sorted sections"),
        (status = 500, description = "Read failed", body = ErrorResponse),
    )
)]
#[get("/api/public/portfolio")]
pub async fn get_portfolio_handler(data: web::Data<AppState>) -> impl Responder {
    respond(data.portfolio.snapshot().await)
}

#[utoipa::path(
    get,
    path = "/api/public/profile",
    tag = "public",
    responses((status = 200, description = "The profile, or null before the first save"))
)]
#[get("/api/public/profile")]
pub async fn get_public_profile_handler(data: web::Data<AppState>) -> impl Responder {
    respond(data.portfolio.profile().await)
}

/// Projects by ascending display order
#[utoipa::path(
    get,
    path = "/api/public/projects",
    tag = "public",
    responses((status = 200, description = "Projects"))
)]
#[get("/api/public/projects")]
pub async fn get_public_projects_handler(data: web::Data<AppState>) -> impl Responder {
    respond(data.portfolio.projects().await)
}

#[utoipa::path(
    get,
    path = "/api/public/education",
    tag = "public",
    responses((status = 200, description = "Education entries"))
)]
#[get("/api/public/education")]
pub async fn get_public_education_handler(data: web::Data<AppState>) -> impl Responder {
    respond(data.portfolio.education().await)
}

#[utoipa::path(
    get,
    path = "/api/public/skills",
    tag = "public",
    responses((status = 200, description = "Skills"))
)]
#[get("/api/public/skills")]
pub async fn get_public_skills_handler(data: web::Data<AppState>) -> impl Responder {
    respond(data.portfolio.skills().await)
}

#[utoipa::path(
    get,
    path = "/api/public/experiences",
    tag = "public",
    params(("type" = Option<String>, Query, description = "`work` or `leadership`")),
    responses(
        (status = 200, description = "Experiences"),
        (status = 400, description = "Unknown type", body = ErrorResponse),
    )
)]
#[get("/api/public/experiences")]
pub async fn get_public_experiences_handler(
    query: web::Query<ExperienceFilter>,
    data: web::Data<AppState>,
) -> impl Responder {
    respond(data.portfolio.experiences(query.into_inner().kind).await)
}

/// Achievements, newest first
#[utoipa::path(
    get,
    path = "/api/public/achievements",
    tag = "public",
    responses((status = 200, description = "Achievements"))
)]
#[get("/api/public/achievements")]
pub async fn get_public_achievements_handler(data: web::Data<AppState>) -> impl Responder {
    respond(data.portfolio.achievements().await)
}
