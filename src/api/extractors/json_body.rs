//! JSON body extractor with the application's error envelope.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// JSON extractor whose rejections render as [`AppError::BadRequest`].
///
/// Unknown keys, wrong types and malformed JSON all end up as a 400 with
/// the usual `{"error": {...}}` body instead of axum's plain-text rejection.
///
/// # Example
///
/// ```rust,ignore
/// async fn create(JsonBody(fields): JsonBody<EmployeeFields>) { /* ... */ }
/// ```
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        Ok(JsonBody(value))
    }
}
