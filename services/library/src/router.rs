use axum::{Router, routing::get};

use ink_core::health::healthz;
use ink_core::middleware::with_observability;

use crate::handlers::{
    book::{create_book, delete_book, get_book, list_books, update_book},
    health::readyz,
    tag::{create_tag, list_tags},
    template::list_templates,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Books
        .route("/books", get(list_books).post(create_book))
        .route(
            "/books/{id}",
            get(get_book).put(update_book).delete(delete_book),
        )
        // Tags
        .route("/tags", get(list_tags).post(create_tag))
        // Templates
        .route("/templates", get(list_templates))
        .with_state(state);

    with_observability(router)
}
