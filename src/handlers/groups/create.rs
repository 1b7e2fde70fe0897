use axum::{extract::State, Json};

use super::GroupPayload;
use crate::handlers::payload::JsonPayload;
use crate::app::AppState;
use crate::database::models::{GroupField, GroupRecord};
use crate::error::{ApiError, ApiResult, Resource, StoreResultExt};

/// POST /groups/ - create a group with a unique name
pub async fn create(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload<GroupPayload>,
) -> ApiResult<Json<GroupRecord>> {
    let group = payload.into_group()?;

    let existing = state
        .groups
        .find_one(GroupField::Name, &group.name)
        .await
        .for_resource(Resource::Group)?;
    if existing.is_some() {
        return Err(ApiError::conflict("Group is already exists"));
    }

    let record = state
        .groups
        .insert(group)
        .await
        .for_resource(Resource::Group)?;

    tracing::info!("Created group {} ({})", record.doc.name, record.id);
    Ok(Json(record))
}
