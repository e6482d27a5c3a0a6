use actix_web::{http::header::CONTENT_TYPE, post, web, HttpRequest, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::content::adapter::incoming::web::routes::content_error_response;
use crate::content::application::domain::{AchievementPatch, ProfilePatch, ProjectPatch};
use crate::document::application::domain::patch::PatchField;
use crate::media::application::domain::{MediaFile, MediaKind, UploadTarget};
use crate::media::application::ports::incoming::UploadError;
use crate::portfolio::application::domain::Section;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Largest request body the upload route buffers.
pub const MAX_UPLOAD_BODY_BYTES: usize = 64 * 1024 * 1024;

#[derive(Debug, Deserialize, IntoParams)]
pub struct UploadMediaQuery {
    /// Original file name, without directories
    pub file_name: String,
    /// Project or achievement that should show the upload
    pub record_id: Option<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UploadMediaResponse {
    pub url: String,
    pub kind: MediaKind,
    pub size_bytes: u64,
    /// Record whose URL field now points at the upload
    pub attached_to: Option<Uuid>,
}

// ──────────────────────────────────────────────────────────
// Error mapping
// ──────────────────────────────────────────────────────────

fn upload_error_response(e: UploadError) -> HttpResponse {
    match e {
        UploadError::UnsupportedMediaType(_) => {
            ApiResponse::bad_request("UNSUPPORTED_MEDIA_TYPE", &e.to_string())
        }
        UploadError::FileTooLarge { .. } => {
            ApiResponse::payload_too_large("FILE_TOO_LARGE", &e.to_string())
        }
        UploadError::EmptyFile => ApiResponse::bad_request("EMPTY_FILE", &e.to_string()),
        UploadError::InvalidFileName => {
            ApiResponse::bad_request("INVALID_FILE_NAME", &e.to_string())
        }
        UploadError::UploadFailed(msg) => ApiResponse::bad_gateway("UPLOAD_FAILED", &msg),
    }
}

/// Points the owning record at `url`. Avatars always attach to the profile,
/// other targets only when a record id was given.
async fn attach(
    data: &AppState,
    admin: &AdminUser,
    target: UploadTarget,
    record_id: Option<Uuid>,
    url: &str,
) -> Result<Option<Uuid>, HttpResponse> {
    match (target, record_id) {
        (UploadTarget::Avatar, _) => {
            let profile = data
                .content
                .profile
                .upsert(admin.user_id, ProfilePatch::avatar(url))
                .await
                .map_err(|e| content_error_response(e, "PROFILE_NOT_FOUND", "Profile not found"))?;
            data.portfolio.invalidate(Section::Profile);
            Ok(Some(profile.id))
        }

        (UploadTarget::Project, Some(id)) => {
            let patch = ProjectPatch {
                image_url: PatchField::Value(url.to_string()),
                ..Default::default()
            };
            data.content
                .projects
                .update(id, patch)
                .await
                .map_err(|e| content_error_response(e, "PROJECT_NOT_FOUND", "Project not found"))?;
            data.portfolio.invalidate(Section::Projects);
            Ok(Some(id))
        }

        (UploadTarget::Achievement, Some(id)) => {
            let patch = AchievementPatch {
                image_url: PatchField::Value(url.to_string()),
                ..Default::default()
            };
            data.content
                .achievements
                .update(id, patch)
                .await
                .map_err(|e| {
                    content_error_response(e, "ACHIEVEMENT_NOT_FOUND", "Achievement not found")
                })?;
            data.portfolio.invalidate(Section::Achievements);
            Ok(Some(id))
        }

        (_, None) => Ok(None),
    }
}

/// Upload an image or video
///
/// The request body is the raw file and `Content-Type` its MIME type.
/// Avatars: images up to 5 MiB. Projects: images up to 10 MiB or videos up
/// to 50 MiB. Achievements: images up to 10 MiB.
#[utoipa::path(
    post,
    path = "/api/admin/media/{target}",
    tag = "media",
    security(("bearer_auth" = [])),
    params(
        ("target" = UploadTarget, Path, description = "avatar, project or achievement"),
        UploadMediaQuery
    ),
    request_body(content = Vec<u8>, content_type = "application/octet-stream"),
    responses(
        (status = 201, description = "Uploaded", body = inline(SuccessResponse<UploadMediaResponse>)),
        (status = 400, description = "Empty file, bad name or unsupported type", body = ErrorResponse),
        (status = 404, description = "Unknown target or record", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 502, description = "Media host rejected the upload", body = ErrorResponse),
    )
)]
#[post("/api/admin/media/{target}")]
pub async fn upload_media_handler(
    admin: AdminUser,
    target: web::Path<String>,
    query: web::Query<UploadMediaQuery>,
    req: HttpRequest,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    let target = match target.parse::<UploadTarget>() {
        Ok(target) => target,
        Err(e) => return ApiResponse::not_found("UNKNOWN_MEDIA_TARGET", &e.to_string()),
    };
    let query = query.into_inner();

    let content_type = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    let file = MediaFile {
        file_name: query.file_name,
        content_type,
        bytes: body.to_vec(),
    };

    let uploaded = match data.media.upload(target, file).await {
        Ok(uploaded) => uploaded,
        Err(e) => return upload_error_response(e),
    };

    match attach(&data, &admin, target, query.record_id, &uploaded.url).await {
        Ok(attached_to) => ApiResponse::created(UploadMediaResponse {
            url: uploaded.url,
            kind: uploaded.kind,
            size_bytes: uploaded.size_bytes,
            attached_to,
        }),
        Err(response) => response,
    }
}
