use axum::{
    extract::{Path, State},
    Json,
};

use super::ContactPayload;
use crate::handlers::payload::JsonPayload;
use crate::app::AppState;
use crate::database::models::ContactRecord;
use crate::error::{ApiError, ApiResult, Resource, StoreResultExt};

/// PUT /contacts/:id - overwrite all seven editable fields
///
/// Mobile uniqueness is not pre-checked against other contacts here; a
/// collision is only caught by the store's unique constraint.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonPayload(payload): JsonPayload<ContactPayload>,
) -> ApiResult<Json<ContactRecord>> {
    let contact = payload.into_contact()?;

    let existing = state
        .contacts
        .find_by_id(&id)
        .await
        .for_resource(Resource::Contact)?;
    if existing.is_none() {
        return Err(ApiError::conflict("Contact is not exists"));
    }

    // The record can vanish between the lookup and the write
    let record = state
        .contacts
        .update_by_id(&id, contact)
        .await
        .for_resource(Resource::Contact)?
        .ok_or_else(|| ApiError::conflict("Contact is not exists"))?;

    tracing::info!("Updated contact {}", record.id);
    Ok(Json(record))
}
