use axum::{extract::State, Json};

use crate::app::AppState;
use crate::database::models::GroupRecord;
use crate::error::{ApiResult, Resource, StoreResultExt};

/// GET /groups/
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<GroupRecord>>> {
    let groups = state
        .groups
        .find_all()
        .await
        .for_resource(Resource::Group)?;
    Ok(Json(groups))
}
