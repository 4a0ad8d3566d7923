// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{cover_images, intake};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    extract::DefaultBodyLimit,
    http::Method,
    routing::{get, post},
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

const PRESS_ROOT: &str = "/api/v1/presses/{press}";

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    let origins: Vec<_> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    // multipart framing adds a little on top of the file itself
    let upload_limit = state.max_upload_bytes.saturating_add(64 * 1024);

    let press_routes = Router::new()
        .route("/quick-submit/drafts", post(intake::initialize_draft))
        .route("/quick-submit/submit", post(intake::submit))
        .route("/quick-submit/cancel", post(intake::cancel))
        .route(
            "/quick-submit/temporary-files",
            post(cover_images::upload_temporary_file).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route(
            "/submissions/{id}/cover-image",
            get(cover_images::cover_image_view)
                .post(cover_images::save_cover_image)
                .delete(cover_images::delete_cover_image),
        )
        .route("/csrf-token", get(intake::csrf_token));

    Router::new()
        .route("/health", get(health))
        .nest(PRESS_ROOT, press_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
