use actix_web::{web, HttpResponse};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use super::error::content_error_response;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::content::application::domain::{Achievement, Education, Experience, Project, Skill};
use crate::content::application::ports::incoming::use_cases::CollectionUseCase;
use crate::document::application::domain::record::CollectionEntity;
use crate::portfolio::application::domain::Section;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// A content collection served under `/api/admin/{SEGMENT}`.
pub trait AdminCollection: CollectionEntity {
    const SEGMENT: &'static str;
    const NOT_FOUND_CODE: &'static str;
    const NOT_FOUND_MESSAGE: &'static str;
    /// Public section whose cache a write invalidates.
    const SECTION: Section;

    fn use_case(state: &AppState) -> &Arc<dyn CollectionUseCase<Self>>;
}

impl AdminCollection for Project {
    const SEGMENT: &'static str = "projects";
    const NOT_FOUND_CODE: &'static str = "PROJECT_NOT_FOUND";
    const NOT_FOUND_MESSAGE: &'static str = "Project not found";
    const SECTION: Section = Section::Projects;

    fn use_case(state: &AppState) -> &Arc<dyn CollectionUseCase<Self>> {
        &state.content.projects
    }
}

impl AdminCollection for Education {
    const SEGMENT: &'static str = "education";
    const NOT_FOUND_CODE: &'static str = "EDUCATION_NOT_FOUND";
    const NOT_FOUND_MESSAGE: &'static str = "Education entry not found";
    const SECTION: Section = Section::Education;

    fn use_case(state: &AppState) -> &Arc<dyn CollectionUseCase<Self>> {
        &state.content.education
    }
}

impl AdminCollection for Experience {
    const SEGMENT: &'static str = "experiences";
    const NOT_FOUND_CODE: &'static str = "EXPERIENCE_NOT_FOUND";
    const NOT_FOUND_MESSAGE: &'static str = "Experience not found";
    const SECTION: Section = Section::Experiences;

    fn use_case(state: &AppState) -> &Arc<dyn CollectionUseCase<Self>> {
        &state.content.experiences
    }
}

impl AdminCollection for Skill {
    const SEGMENT: &'static str = "skills";
    const NOT_FOUND_CODE: &'static str = "SKILL_NOT_FOUND";
    const NOT_FOUND_MESSAGE: &'static str = "Skill not found";
    const SECTION: Section = Section::Skills;

    fn use_case(state: &AppState) -> &Arc<dyn CollectionUseCase<Self>> {
        &state.content.skills
    }
}

impl AdminCollection for Achievement {
    const SEGMENT: &'static str = "achievements";
    const NOT_FOUND_CODE: &'static str = "ACHIEVEMENT_NOT_FOUND";
    const NOT_FOUND_MESSAGE: &'static str = "Achievement not found";
    const SECTION: Section = Section::Achievements;

    fn use_case(state: &AppState) -> &Arc<dyn CollectionUseCase<Self>> {
        &state.content.achievements
    }
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

async fn list_records<T: AdminCollection>(
    admin: AdminUser,
    query: web::Query<T::Filter>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match T::use_case(&data)
        .get_all(admin.user_id, query.into_inner())
        .await
    {
        Ok(records) => ApiResponse::success(records),
        Err(e) => content_error_response(e, T::NOT_FOUND_CODE, T::NOT_FOUND_MESSAGE),
    }
}

async fn create_record<T: AdminCollection>(
    admin: AdminUser,
    req: web::Json<T>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match T::use_case(&data)
        .create(admin.user_id, req.into_inner())
        .await
    {
        Ok(record) => {
            data.portfolio.invalidate(T::SECTION);
            ApiResponse::created(record)
        }
        Err(e) => content_error_response(e, T::NOT_FOUND_CODE, T::NOT_FOUND_MESSAGE),
    }
}

async fn get_record<T: AdminCollection>(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match T::use_case(&data).get_by_id(path.into_inner()).await {
        Ok(record) => ApiResponse::success(record),
        Err(e) => content_error_response(e, T::NOT_FOUND_CODE, T::NOT_FOUND_MESSAGE),
    }
}

async fn update_record<T: AdminCollection>(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<T::Patch>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match T::use_case(&data)
        .update(path.into_inner(), req.into_inner())
        .await
    {
        Ok(record) => {
            data.portfolio.invalidate(T::SECTION);
            ApiResponse::success(record)
        }
        Err(e) => content_error_response(e, T::NOT_FOUND_CODE, T::NOT_FOUND_MESSAGE),
    }
}

async fn delete_record<T: AdminCollection>(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let id = path.into_inner();

    match T::use_case(&data).delete(id).await {
        Ok(()) => {
            info!(collection = T::COLLECTION, id = %id, by = %admin.user_id, "Admin delete");
            data.portfolio.invalidate(T::SECTION);
            ApiResponse::no_content()
        }
        Err(e) => content_error_response(e, T::NOT_FOUND_CODE, T::NOT_FOUND_MESSAGE),
    }
}

//
// ──────────────────────────────────────────────────────────
// Registration
// ──────────────────────────────────────────────────────────
//

fn configure_collection<T: AdminCollection>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(format!("/api/admin/{}", T::SEGMENT))
            .route(web::get().to(list_records::<T>))
            .route(web::post().to(create_record::<T>)),
    )
    .service(
        web::resource(format!("/api/admin/{}/{{id}}", T::SEGMENT))
            .route(web::get().to(get_record::<T>))
            .route(web::patch().to(update_record::<T>))
            .route(web::delete().to(delete_record::<T>)),
    );
}

pub fn configure_collections(cfg: &mut web::ServiceConfig) {
    configure_collection::<Project>(cfg);
    configure_collection::<Education>(cfg);
    configure_collection::<Experience>(cfg);
    configure_collection::<Skill>(cfg);
    configure_collection::<Achievement>(cfg);
}
