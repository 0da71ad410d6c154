//! Validated request body accepting JSON or URL-encoded forms.

use axum::{
    extract::{FromRequest, Request},
    http::header,
    Form, Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::AppError;
use crate::middleware::negotiation::{
    header_contains, FORM_MEDIA_TYPE, JSON_MEDIA_TYPE, JSON_OR_FORM_MESSAGE,
};

/// Works like `axum::Json<T>`, but also takes form bodies and runs
/// `validator::Validate::validate()` on the decoded value.
///
/// Any other `Content-Type` is rejected with `406 Not Acceptable`.
#[derive(Debug, Clone)]
pub struct ValidatedBody<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedBody<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = header_contains(req.headers(), header::CONTENT_TYPE, JSON_MEDIA_TYPE);
        let is_form = header_contains(req.headers(), header::CONTENT_TYPE, FORM_MEDIA_TYPE);

        let value = if is_json {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::Validation(format!("Invalid JSON: {e}")))?;
            value
        } else if is_form {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::Validation(format!("Invalid form body: {e}")))?;
            value
        } else {
            return Err(AppError::NotAcceptable(JSON_OR_FORM_MESSAGE.to_string()));
        };

        value
            .validate()
            .map_err(|errors| AppError::from_validation(&errors))?;

        Ok(ValidatedBody(value))
    }
}
