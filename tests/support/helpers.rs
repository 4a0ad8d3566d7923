// tests/support/helpers.rs
use std::path::PathBuf;
use std::sync::Arc;

use super::builders::seeded_store;
use super::mocks::{self, InMemoryStore, RecordingSearchIndex};
use axum::body::{self, Body};
use axum::http::{HeaderValue, Request, StatusCode, header};
use quick_submit::application::{
    ports::search::SubmissionSearchIndex,
    scope::RequestScope,
    services::{Adapters, ApplicationServices, Repositories},
};
use quick_submit::domain::ids::{PressId, SubmissionId, UserId};
use quick_submit::infrastructure::storage::{LocalPublicFileStore, LocalTemporaryFileStore};
use quick_submit::presentation::http::{
    extractors::CSRF_HEADER, routes::build_router, state::HttpState,
};
use serde_json::Value;
use tempfile::TempDir;

pub const PUBLIC_URL: &str = "/public";
pub const MAX_UPLOAD_BYTES: usize = 256 * 1024;

/// シード済みストア・一時ディレクトリ・サービス一式
pub struct TestApp {
    pub store: Arc<InMemoryStore>,
    pub search: Arc<RecordingSearchIndex>,
    pub services: Arc<ApplicationServices>,
    pub public_dir: TempDir,
    pub temporary_dir: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        Self::build(None)
    }

    /// 検索インデックスだけ差し替える
    pub fn with_search_index(search_index: Arc<dyn SubmissionSearchIndex>) -> Self {
        Self::build(Some(search_index))
    }

    fn build(search_override: Option<Arc<dyn SubmissionSearchIndex>>) -> Self {
        let store = Arc::new(seeded_store());
        let search = Arc::new(RecordingSearchIndex::default());
        let public_dir = TempDir::new().expect("public tempdir");
        let temporary_dir = TempDir::new().expect("temporary tempdir");

        let repos = Repositories {
            presses: store.clone(),
            submissions: store.clone(),
            publications: store.clone(),
            chapters: store.clone(),
            series: store.clone(),
            categories: store.clone(),
            user_groups: store.clone(),
            stage_assignments: store.clone(),
            temporary_files: store.clone(),
            doi_settings: store.clone(),
        };
        let adapters = Adapters {
            token_manager: Arc::new(mocks::DummyTokenManager),
            csrf_tokens: Arc::new(mocks::StaticCsrfTokens),
            public_files: Arc::new(LocalPublicFileStore::new(public_dir.path(), PUBLIC_URL)),
            temporary_store: Arc::new(LocalTemporaryFileStore::new(temporary_dir.path())),
            search_index: search_override
                .unwrap_or_else(|| search.clone() as Arc<dyn SubmissionSearchIndex>),
            clock: Arc::new(mocks::FixedClock),
        };

        Self {
            services: Arc::new(ApplicationServices::new(repos, adapters)),
            store,
            search,
            public_dir,
            temporary_dir,
        }
    }

    /// プレスとユーザーを束縛したリクエストスコープ
    pub fn scope(&self, press_id: PressId, user_id: UserId) -> RequestScope {
        let press = self
            .store
            .state()
            .presses
            .get(&press_id)
            .cloned()
            .expect("seeded press");
        let user = mocks::security::user(user_id.0, "tester", mocks::fixed_now());
        RequestScope::new(press, user)
    }

    pub fn router(&self) -> axum::Router {
        let state = HttpState {
            services: self.services.clone(),
            max_upload_bytes: MAX_UPLOAD_BYTES,
        };
        build_router(state, &[])
    }

    pub fn public_file(&self, press_id: PressId, file_name: &str) -> PathBuf {
        self.public_dir
            .path()
            .join("presses")
            .join(press_id.to_string())
            .join(file_name)
    }

    pub fn current_cover_exists(&self, id: SubmissionId) -> bool {
        self.store
            .current_publication(id)
            .is_some_and(|publication| publication.has_cover_image())
    }

    pub fn temporary_file_count(&self) -> usize {
        std::fs::read_dir(self.temporary_dir.path())
            .map(|entries| entries.count())
            .unwrap_or(0)
    }
}

/// Bearer トークン付きの JSON リクエスト
pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn empty_request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

/// 受理される CSRF トークンをヘッダーに付ける
pub fn with_csrf(mut req: Request<Body>) -> Request<Body> {
    req.headers_mut().insert(
        CSRF_HEADER,
        HeaderValue::from_static(mocks::TEST_CSRF_TOKEN),
    );
    req
}

pub async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected valid json body")
}

/// エラーレスポンスのステータスと error フィールドを検証し、本文を返す
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> Value {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let json = body_json(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in error body");
    json
}
