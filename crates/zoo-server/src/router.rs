use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handler::{self, AppState};

/// Build the axum router with all Anekazoo endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handler::health_handler))
        .route("/info", get(handler::info_handler))
        .route(
            "/animals",
            get(handler::list_animals).post(handler::create_animal),
        )
        .route(
            "/animals/:id",
            get(handler::get_animal)
                .put(handler::update_animal)
                .delete(handler::delete_animal),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
