//! Custom Axum extractors

use crate::errors::Error;
use axum::Json;
use axum::extract::{FromRequestParts, Path, rejection::JsonRejection};
use axum::http::request::Parts;

/// Numeric row id taken from the path; anything else is reported as invalid data.
pub struct RowId(pub i64);

impl<S> FromRequestParts<S> for RowId
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<i64> = Path::from_request_parts(parts, state)
            .await
            .map_err(|rejection| Error::invalid_data(rejection.body_text()))?;
        Ok(Self(id))
    }
}

/// Unreadable bodies reach the service as absent data.
pub fn payload<T>(body: Result<Json<T>, JsonRejection>) -> Option<T> {
    match body {
        Ok(Json(value)) => Some(value),
        Err(rejection) => {
            tracing::debug!("Rejected request body: {}", rejection);
            None
        }
    }
}
