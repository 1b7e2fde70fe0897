use axum::{
    extract::{Path, State},
    Json,
};

use crate::app::AppState;
use crate::database::models::GroupRecord;
use crate::error::{ApiError, ApiResult, Resource, StoreResultExt};

/// GET /groups/:id
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<GroupRecord>> {
    state
        .groups
        .find_by_id(&id)
        .await
        .for_resource(Resource::Group)?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Group is not found"))
}
