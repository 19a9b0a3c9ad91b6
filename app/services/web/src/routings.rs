use crate::handlers::{customer::*, reservation::*};
use app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

pub fn router(state: Arc<AppState>) -> Router {
    let asset_path = state.config.asset_path.clone();
    let asset_service = ServeDir::new(&asset_path);

    Router::new()
        .route("/", get(get_customers))
        .route("/add", get(get_new_customer).post(post_new_customer))
        .route("/add/", get(get_new_customer).post(post_new_customer))
        .route("/customers", post(post_search_customer))
        .route("/customers/", post(post_search_customer))
        // each path is served with and without the trailing slash
        .route("/{id}", get(get_customer))
        .route("/{id}/", get(get_customer))
        .route("/{id}/edit", get(get_edit_customer).post(post_edit_customer))
        .route("/{id}/edit/", get(get_edit_customer).post(post_edit_customer))
        .route("/{id}/add-reservation", post(post_new_reservation))
        .route("/{id}/add-reservation/", post(post_new_reservation))
        .route(
            "/{id}/edit-reservation/{res_id}",
            get(get_edit_reservation).post(post_edit_reservation),
        )
        .route(
            "/{id}/edit-reservation/{res_id}/",
            get(get_edit_reservation).post(post_edit_reservation),
        )
        .nest_service("/assets", asset_service)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
