//! Lenient offset/limit extractor for collection endpoints.

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};

use crate::errors::AppError;
use crate::models::pagination::PageWindow;

/// Reads `start` and `limit` from the query string.
///
/// Unlike `Query<T>`, repeated keys and junk values never reject the
/// request: the first value of each key is parsed leniently and anything
/// unusable disables paging.
impl<S> FromRequestParts<S> for PageWindow
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map_err(|e| AppError::Validation(format!("Invalid query string: {e}")))?;

        Ok(PageWindow::from_query_pairs(
            pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        ))
    }
}
