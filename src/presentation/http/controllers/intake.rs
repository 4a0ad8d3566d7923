// src/presentation/http/controllers/intake.rs
use crate::application::{
    commands::intake::{
        AuthorInput, CancelIntakeCommand, FormEnvelope, InitializeIntakeCommand, MetadataInput,
        SubmitIntakeCommand,
    },
    dto::{IntakeFormDataDto, IntakeFormViewDto, SubmissionDto},
    queries::intake::IntakeFormViewQuery,
};
use crate::domain::submission::WorkType;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{CsrfHeader, Scoped};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::Method, http::StatusCode};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct InitializeDraftRequest {
    #[serde(default)]
    pub submission_id: Option<i64>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub series_id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct DraftResponse {
    pub form: IntakeFormDataDto,
    pub view: IntakeFormViewDto,
}

#[derive(Debug, Deserialize)]
pub struct AuthorRequest {
    pub given_name: String,
    #[serde(default)]
    pub family_name: Option<String>,
    #[serde(default)]
    pub user_group_id: Option<i64>,
    #[serde(default = "default_true")]
    pub include_in_browse: bool,
}

fn default_true() -> bool {
    true
}

/// `submissionStatus` value asking for immediate publication.
pub const PUBLISH_NOW: i16 = 1;

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub submission_id: i64,
    pub locale: String,
    #[serde(default)]
    pub series_id: Option<i64>,
    #[serde(default)]
    pub date_published: Option<NaiveDate>,
    #[serde(default)]
    pub license_url: Option<String>,
    #[serde(default)]
    pub copyright_holder_type: Option<String>,
    #[serde(default)]
    pub copyright_holder: Option<String>,
    #[serde(default)]
    pub copyright_year: Option<i32>,
    #[serde(default)]
    pub categories: Vec<i64>,
    #[serde(default)]
    pub work_type: Option<WorkType>,
    /// [`PUBLISH_NOW`] publishes right away.
    #[serde(default)]
    pub submission_status: Option<i16>,
    #[serde(default)]
    pub assign_publication_doi: bool,
    #[serde(default)]
    pub assign_chapter_doi: bool,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default, rename = "abstract")]
    pub abstract_text: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub authors: Option<Vec<AuthorRequest>>,
}

#[derive(Debug, Deserialize)]
pub struct CancelRequest {
    pub submission_id: i64,
}

pub async fn initialize_draft(
    Extension(state): Extension<HttpState>,
    Scoped(scope): Scoped,
    csrf: CsrfHeader,
    Json(payload): Json<InitializeDraftRequest>,
) -> HttpResult<Json<DraftResponse>> {
    csrf.verify(&state, &scope)?;
    let locale = payload.locale.clone();
    let form = state
        .services
        .intake_commands
        .initialize(
            &scope,
            InitializeIntakeCommand {
                submission_id: payload.submission_id,
                locale: payload.locale,
                series_id: payload.series_id,
            },
        )
        .await
        .into_http()?;

    let view = state
        .services
        .intake_queries
        .form_view(
            &scope,
            IntakeFormViewQuery {
                submission_id: form.submission_id,
                locale,
            },
        )
        .await
        .into_http()?;

    Ok(Json(DraftResponse { form, view }))
}

pub async fn submit(
    Extension(state): Extension<HttpState>,
    Scoped(scope): Scoped,
    method: Method,
    CsrfHeader(csrf_token): CsrfHeader,
    Json(payload): Json<SubmitRequest>,
) -> HttpResult<Json<SubmissionDto>> {
    let command = SubmitIntakeCommand {
        submission_id: payload.submission_id,
        locale: payload.locale,
        series_id: payload.series_id,
        date_published: payload.date_published,
        license_url: payload.license_url,
        copyright_holder_type: payload.copyright_holder_type,
        copyright_holder: payload.copyright_holder,
        copyright_year: payload.copyright_year,
        categories: payload.categories,
        work_type: payload.work_type,
        publish_now: payload.submission_status == Some(PUBLISH_NOW),
        assign_publication_doi: payload.assign_publication_doi,
        assign_chapter_doi: payload.assign_chapter_doi,
        metadata: MetadataInput {
            title: payload.title,
            subtitle: payload.subtitle,
            abstract_text: payload.abstract_text,
            keywords: payload.keywords,
            authors: payload.authors.map(|authors| {
                authors
                    .into_iter()
                    .map(|a| AuthorInput {
                        given_name: a.given_name,
                        family_name: a.family_name,
                        user_group_id: a.user_group_id,
                        include_in_browse: a.include_in_browse,
                    })
                    .collect()
            }),
        },
        form: FormEnvelope {
            is_post: method == Method::POST,
            csrf_token,
        },
    };

    state
        .services
        .intake_commands
        .submit(&scope, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn cancel(
    Extension(state): Extension<HttpState>,
    Scoped(scope): Scoped,
    csrf: CsrfHeader,
    Json(payload): Json<CancelRequest>,
) -> HttpResult<StatusCode> {
    csrf.verify(&state, &scope)?;
    state
        .services
        .intake_commands
        .cancel(
            &scope,
            CancelIntakeCommand {
                submission_id: payload.submission_id,
            },
        )
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Serialize)]
pub struct CsrfTokenResponse {
    pub token: String,
}

pub async fn csrf_token(
    Extension(state): Extension<HttpState>,
    Scoped(scope): Scoped,
) -> Json<CsrfTokenResponse> {
    Json(CsrfTokenResponse {
        token: state.services.csrf_tokens().issue(scope.user.id),
    })
}
