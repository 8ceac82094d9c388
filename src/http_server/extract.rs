//! # Request Extractors
//!
//! Path ids and JSON object bodies, rejected with [`ApiError`] so that
//! malformed requests still get a JSON answer.

use axum::async_trait;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde_json::{Map, Value};

use super::errors::{ApiError, ApiResult};

/// Integer id from a `/:id` path segment.
///
/// A segment that is not an integer matches no entity, so it is a 404.
#[derive(Debug, Clone, Copy)]
pub struct EntityId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::not_found("Not found"))?;
        Ok(Self(id))
    }
}

/// A JSON request body that must be an object
#[derive(Debug, Clone)]
pub struct JsonObject(pub Map<String, Value>);

#[async_trait]
impl<S> FromRequest<S> for JsonObject
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))?;

        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(ApiError::InvalidBody(
                "Request body must be a JSON object".to_string(),
            )),
        }
    }
}

impl JsonObject {
    /// Reject with `MissingFields` unless every named field is present
    pub fn require(&self, fields: &[&str]) -> ApiResult<()> {
        if fields.iter().all(|field| self.0.contains_key(*field)) {
            Ok(())
        } else {
            Err(ApiError::MissingFields)
        }
    }

    /// A string field, `None` when absent
    pub fn text(&self, field: &str) -> ApiResult<Option<String>> {
        match self.0.get(field) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => Err(ApiError::InvalidField(field.to_string())),
        }
    }

    /// A string field that has to be there
    pub fn required_text(&self, field: &str) -> ApiResult<String> {
        self.text(field)?.ok_or(ApiError::MissingFields)
    }
}
