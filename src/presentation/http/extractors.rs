// src/presentation/http/extractors.rs
use crate::{
    application::{
        dto::AuthenticatedUser, error::ApplicationError, scope::RequestScope,
        validation::FormErrors,
    },
    presentation::http::state::HttpState,
};
use axum::{
    Extension,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};
use std::collections::HashMap;

use super::error::HttpError;

pub const CSRF_HEADER: &str = "x-csrf-token";

/// Authenticated user plus the press named by the `{press}` path segment.
#[derive(Debug, Clone)]
pub struct Scoped(pub RequestScope);

/// Value of the anti-forgery header, if sent.
#[derive(Debug, Clone)]
pub struct CsrfHeader(pub Option<String>);

async fn app_state<S: Send + Sync>(parts: &mut Parts, state: &S) -> Result<HttpState, HttpError> {
    let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
        .await
        .map_err(|_| {
            HttpError::from_error(ApplicationError::Infrastructure(
                "application state missing".into(),
            ))
        })?;
    Ok(app_state)
}

async fn authenticate(parts: &Parts, app_state: &HttpState) -> Result<AuthenticatedUser, HttpError> {
    let header = parts
        .headers
        .typed_get::<Authorization<Bearer>>()
        .ok_or_else(|| {
            HttpError::from_error(ApplicationError::Unauthorized(
                "missing Authorization header".into(),
            ))
        })?;

    app_state
        .services
        .token_manager()
        .authenticate(header.token())
        .await
        .map_err(HttpError::from_error)
}

impl<S: Send + Sync> FromRequestParts<S> for Scoped {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = app_state(parts, state).await?;
        let user = authenticate(parts, &app_state).await?;

        let Path(params) = Path::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|err| HttpError::bad_request(err.body_text()))?;
        let press_path = params
            .get("press")
            .ok_or_else(|| HttpError::bad_request("missing press in path"))?;

        let press = app_state
            .services
            .press_repo()
            .find_by_path(press_path)
            .await
            .map_err(|err| HttpError::from_error(err.into()))?
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::not_found(format!(
                    "press '{press_path}' not found"
                )))
            })?;

        Ok(Self(RequestScope::new(press, user)))
    }
}

impl CsrfHeader {
    /// Rejects the request with a form error unless the header verifies for
    /// the acting user.
    pub fn verify(&self, state: &HttpState, scope: &RequestScope) -> Result<(), HttpError> {
        let valid = self
            .0
            .as_deref()
            .is_some_and(|token| state.services.csrf_tokens().verify(scope.user.id, token));
        if valid {
            Ok(())
        } else {
            Err(HttpError::from_error(ApplicationError::InvalidForm(
                FormErrors::single("form", "form.csrfInvalid"),
            )))
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for CsrfHeader {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(CSRF_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        Ok(Self(token))
    }
}
