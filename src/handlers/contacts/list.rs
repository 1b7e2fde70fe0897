use axum::{extract::State, Json};

use crate::app::AppState;
use crate::database::models::ContactRecord;
use crate::error::{ApiResult, Resource, StoreResultExt};

/// GET /contacts/ - every contact in insertion order
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<ContactRecord>>> {
    let contacts = state
        .contacts
        .find_all()
        .await
        .for_resource(Resource::Contact)?;
    Ok(Json(contacts))
}
