use axum::{extract::State, Json};

use super::ContactPayload;
use crate::handlers::payload::JsonPayload;
use crate::app::AppState;
use crate::database::models::{ContactField, ContactRecord};
use crate::error::{ApiError, ApiResult, Resource, StoreResultExt};

/// POST /contacts/ - create a contact with a unique mobile
pub async fn create(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload<ContactPayload>,
) -> ApiResult<Json<ContactRecord>> {
    let contact = payload.into_contact()?;

    // Best-effort pre-check; the store's unique constraint has the final word
    let existing = state
        .contacts
        .find_one(ContactField::Mobile, &contact.mobile)
        .await
        .for_resource(Resource::Contact)?;
    if existing.is_some() {
        return Err(ApiError::conflict("Contact is already exists"));
    }

    let record = state
        .contacts
        .insert(contact)
        .await
        .for_resource(Resource::Contact)?;

    tracing::info!("Created contact {}", record.id);
    Ok(Json(record))
}
