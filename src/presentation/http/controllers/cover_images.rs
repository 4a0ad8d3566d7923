// src/presentation/http/controllers/cover_images.rs
use crate::application::{
    commands::cover_images::{
        DeleteCoverImageCommand, SaveCoverImageCommand, UploadTemporaryFileCommand,
    },
    dto::{CoverImageFormViewDto, JsonMessage, TemporaryFileDto},
    queries::cover_images::CoverImageFormViewQuery,
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{CsrfHeader, Scoped};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Multipart, Path, Query},
};
use serde::Deserialize;

/// Multipart field carrying the file.
pub const UPLOAD_FIELD: &str = "uploadedFile";

#[derive(Debug, Deserialize)]
pub struct SubmissionPath {
    pub id: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct LocaleParams {
    #[serde(default)]
    pub locale: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SaveCoverImageRequest {
    #[serde(default)]
    pub temporary_file_id: Option<i64>,
    #[serde(default)]
    pub image_alt_text: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DeleteCoverImageParams {
    #[serde(default, rename = "coverImage")]
    pub cover_image: Option<String>,
}

pub async fn upload_temporary_file(
    Extension(state): Extension<HttpState>,
    Scoped(scope): Scoped,
    csrf: CsrfHeader,
    mut multipart: Multipart,
) -> HttpResult<Json<TemporaryFileDto>> {
    csrf.verify(&state, &scope)?;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| HttpError::bad_request(err.body_text()))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or("upload").to_string();
        let declared_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|err| HttpError::bad_request(err.body_text()))?;

        return state
            .services
            .cover_image_commands
            .upload_temporary_file(
                &scope,
                UploadTemporaryFileCommand {
                    file_name,
                    declared_type,
                    bytes,
                },
            )
            .await
            .into_http()
            .map(Json);
    }
    Err(HttpError::bad_request(format!(
        "multipart field '{UPLOAD_FIELD}' missing"
    )))
}

pub async fn cover_image_view(
    Extension(state): Extension<HttpState>,
    Scoped(scope): Scoped,
    Path(path): Path<SubmissionPath>,
    Query(params): Query<LocaleParams>,
) -> HttpResult<Json<CoverImageFormViewDto>> {
    state
        .services
        .cover_image_queries
        .form_view(
            &scope,
            CoverImageFormViewQuery {
                submission_id: path.id,
                locale: params.locale,
            },
        )
        .await
        .into_http()
        .map(Json)
}

pub async fn save_cover_image(
    Extension(state): Extension<HttpState>,
    Scoped(scope): Scoped,
    Path(path): Path<SubmissionPath>,
    csrf: CsrfHeader,
    Json(payload): Json<SaveCoverImageRequest>,
) -> HttpResult<Json<JsonMessage>> {
    csrf.verify(&state, &scope)?;
    state
        .services
        .cover_image_commands
        .save(
            &scope,
            SaveCoverImageCommand {
                submission_id: path.id,
                locale: payload.locale,
                temporary_file_id: payload.temporary_file_id,
                image_alt_text: payload.image_alt_text,
            },
        )
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_cover_image(
    Extension(state): Extension<HttpState>,
    Scoped(scope): Scoped,
    Path(path): Path<SubmissionPath>,
    Query(params): Query<DeleteCoverImageParams>,
    csrf: CsrfHeader,
) -> HttpResult<Json<JsonMessage>> {
    csrf.verify(&state, &scope)?;
    state
        .services
        .cover_image_commands
        .delete(
            &scope,
            DeleteCoverImageCommand {
                submission_id: Some(path.id),
                cover_image: params.cover_image,
            },
        )
        .await
        .into_http()
        .map(Json)
}
