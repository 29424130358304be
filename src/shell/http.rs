use axum::{Router, routing::get};

use crate::modules::books::adapters::inbound::http as books_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/books", get(books_http::list).post(books_http::create))
        .route(
            "/books/{book_id}",
            get(books_http::get)
                .patch(books_http::update)
                .delete(books_http::delete),
        )
        .route("/service", get(books_http::service_type))
        .with_state(state)
}
