use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use crate::app::AppState;
use crate::error::{ApiError, ApiResult, Resource, StoreResultExt};

/// DELETE /contacts/:id - responds with `{}`
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let removed = state
        .contacts
        .delete_by_id(&id)
        .await
        .for_resource(Resource::Contact)?;

    match removed {
        Some(record) => {
            tracing::info!("Deleted contact {}", record.id);
            Ok(Json(json!({})))
        }
        None => Err(ApiError::not_found("Contact is not found")),
    }
}
