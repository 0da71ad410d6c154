//! Content negotiation and link-base extractors for Axum handlers.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};

use crate::errors::AppError;
use crate::AppState;

pub const JSON_MEDIA_TYPE: &str = "application/json";
pub const FORM_MEDIA_TYPE: &str = "application/x-www-form-urlencoded";

pub const JSON_ONLY_MESSAGE: &str =
    "Not Acceptable: This endpoint only supports application/json";
pub const JSON_OR_FORM_MESSAGE: &str =
    "Not Acceptable: This endpoint only supports application/json or application/x-www-form-urlencoded";

/// Marker proving the client accepts a JSON response.
///
/// Rejects with `406 Not Acceptable` when the `Accept` header is missing or
/// does not mention `application/json`.
#[derive(Debug, Clone, Copy)]
pub struct AcceptsJson;

impl<S> FromRequestParts<S> for AcceptsJson
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if accepts_json(&parts.headers) {
            Ok(AcceptsJson)
        } else {
            Err(AppError::NotAcceptable(JSON_ONLY_MESSAGE.to_string()))
        }
    }
}

/// Absolute URL prefix for hypermedia links, e.g. `http://localhost:8000`.
///
/// Uses `PUBLIC_BASE_URL` when configured, otherwise the request's `Host`.
#[derive(Debug, Clone)]
pub struct BaseUrl(pub String);

impl FromRequestParts<AppState> for BaseUrl {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(BaseUrl(resolve_base_url(
            state.config.public_base_url.as_deref(),
            &parts.headers,
        )))
    }
}

pub fn accepts_json(headers: &HeaderMap) -> bool {
    header_contains(headers, header::ACCEPT, JSON_MEDIA_TYPE)
}

pub fn header_contains(headers: &HeaderMap, name: header::HeaderName, needle: &str) -> bool {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains(needle))
}

pub fn resolve_base_url(configured: Option<&str>, headers: &HeaderMap) -> String {
    if let Some(url) = configured {
        return url.to_string();
    }
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");
    format!("http://{host}")
}
