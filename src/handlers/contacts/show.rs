use axum::{
    extract::{Path, State},
    Json,
};

use crate::app::AppState;
use crate::database::models::ContactRecord;
use crate::error::{ApiError, ApiResult, Resource, StoreResultExt};

/// GET /contacts/:id
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ContactRecord>> {
    state
        .contacts
        .find_by_id(&id)
        .await
        .for_resource(Resource::Contact)?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Contact is not found"))
}
