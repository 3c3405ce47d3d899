//! Body and path extractors that answer malformed input with the standard
//! error body instead of axum's plain-text rejection.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use mentorhub_core::error::CoreError;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// Like [`Json`], but a missing, malformed or mistyped body becomes
/// [`AppError::BadRequest`] (400).
///
/// ```ignore
/// async fn create(ApiJson(input): ApiJson<CreateThing>) -> AppResult<Json<Thing>> { ... }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// [`ApiJson`] followed by `validator` checks. Failed checks become
/// [`CoreError::Validation`] (400 `VALIDATION_ERROR`).
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let ApiJson(value) = ApiJson::<T>::from_request(req, state).await?;
        value
            .validate()
            .map_err(|errors| CoreError::Validation(errors.to_string()))?;
        Ok(Self(value))
    }
}

/// Like [`Path`], but an unparsable segment (`/student/abc`) becomes
/// [`AppError::BadRequest`] (400).
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}
