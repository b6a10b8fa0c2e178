//! Custom Axum extractors
//!
//! Rejections are turned into [`ApiError`] so that bad input still gets the
//! standard JSON error body instead of axum's plain-text one.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// JSON body; any rejection becomes a 400.
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(%rejection, "rejected request body");
            ApiError::BadRequest
        })?;

        Ok(Self(value))
    }
}

/// Integer category id from the path; anything else is a 404, as if the
/// route had not matched.
pub struct CategoryId(pub i32);

impl<S> FromRequestParts<S> for CategoryId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound)?;

        let id = raw.parse::<i32>().map_err(|_| ApiError::NotFound)?;
        Ok(Self(id))
    }
}
