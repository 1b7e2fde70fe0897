//! Request body extraction for the write endpoints.
//!
//! A missing body, a non-JSON content type, or a JSON value that is not an
//! object all read as an empty payload, so the handler's field validation
//! reports every required field. Only syntactically broken JSON is refused
//! before validation.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::ApiError;

/// Deserialized request payload, always built from a JSON object.
#[derive(Debug)]
pub struct JsonPayload<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonPayload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(is_json_content_type);

        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!("Failed to read request body: {}", rejection);
            ApiError::bad_request("Invalid request body")
        })?;

        let value = if json && !bytes.iter().all(u8::is_ascii_whitespace) {
            serde_json::from_slice(&bytes).map_err(|e| {
                tracing::debug!("Rejected request body: {}", e);
                ApiError::bad_request("Invalid request body")
            })?
        } else {
            Value::Object(Map::new())
        };

        let object = match value {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        serde_json::from_value(Value::Object(object))
            .map(JsonPayload)
            .map_err(|e| {
                tracing::debug!("Rejected request payload: {}", e);
                ApiError::bad_request("Invalid request body")
            })
    }
}

/// `application/json` or any `application/*+json` type, parameters ignored
fn is_json_content_type(raw: &str) -> bool {
    let essence = raw.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
