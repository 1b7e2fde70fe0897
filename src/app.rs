use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::database::models::{Contact, Group};
use crate::database::{MemoryRepository, Repository};
use crate::handlers;

/// Shared per-process state: one repository per collection.
#[derive(Clone)]
pub struct AppState {
    pub contacts: Arc<dyn Repository<Contact>>,
    pub groups: Arc<dyn Repository<Group>>,
}

impl AppState {
    pub fn new<C, G>(contacts: C, groups: G) -> Self
    where
        C: Repository<Contact> + 'static,
        G: Repository<Group> + 'static,
    {
        Self {
            contacts: Arc::new(contacts),
            groups: Arc::new(groups),
        }
    }

    /// State backed by empty in-process collections
    pub fn in_memory() -> Self {
        Self::new(MemoryRepository::new(), MemoryRepository::new())
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root::root))
        .route("/health", get(handlers::root::health))
        .merge(contact_routes())
        .merge(group_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn contact_routes() -> Router<AppState> {
    use handlers::contacts;

    Router::new()
        .route("/contacts", get(contacts::list).post(contacts::create))
        .route("/contacts/", get(contacts::list).post(contacts::create))
        .route(
            "/contacts/:id",
            get(contacts::show)
                .put(contacts::update)
                .delete(contacts::delete),
        )
}

fn group_routes() -> Router<AppState> {
    use handlers::groups;

    // Groups are never updated or deleted
    Router::new()
        .route("/groups", get(groups::list).post(groups::create))
        .route("/groups/", get(groups::list).post(groups::create))
        .route("/groups/:id", get(groups::show))
}
