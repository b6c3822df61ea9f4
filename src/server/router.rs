use super::handlers;
use super::AppState;
use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

pub fn init(state: AppState) -> Router {
    let page = Router::new()
        .route("/", get(handlers::index))
        .route("/items", post(handlers::add_item_form))
        .route("/items/{id}/adjust", post(handlers::adjust_item_form))
        .route("/items/{id}/remove", post(handlers::remove_item_form));

    let api = Router::new()
        .route("/items", get(handlers::list_items).post(handlers::create_item))
        .route("/items/{id}/adjust", post(handlers::adjust_item))
        .route("/items/{id}", delete(handlers::delete_item))
        .route("/classify", get(handlers::classify));

    Router::new()
        .merge(page)
        .nest("/api", api)
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
