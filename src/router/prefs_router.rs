use axum::{Router, routing::get};
use crate::handler::prefs_handler::{get_pref_handler, set_pref_handler, remove_pref_handler};
use std::sync::Arc;
use crate::util::cookies::PreferenceStore;

pub fn prefs_router(store: Arc<PreferenceStore>) -> Router {
    Router::new()
        .route(
            "/api/prefs/{key}",
            get(get_pref_handler)
                .put(set_pref_handler)
                .delete(remove_pref_handler),
        )
        .with_state(store)
}
