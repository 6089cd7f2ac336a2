//! API route configuration.

use crate::api::handlers::{
    create_url_handler, delete_url_handler, get_url_by_code_handler, get_url_handler,
    list_urls_handler, update_url_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// URL management routes, nested under `/api`.
///
/// # Endpoints
///
/// - `GET    /urls`                        - List all short URLs
/// - `POST   /urls`                        - Create a short URL
/// - `GET    /urls/{id}`                   - Get a short URL by id
/// - `PUT    /urls/{id}`                   - Replace the long URL
/// - `DELETE /urls/{id}`                   - Delete a short URL
/// - `GET    /urls/shortcode/{short_code}` - Get a short URL by code
pub fn url_routes() -> Router<AppState> {
    Router::new()
        .route("/urls", get(list_urls_handler).post(create_url_handler))
        .route(
            "/urls/{id}",
            get(get_url_handler)
                .put(update_url_handler)
                .delete(delete_url_handler),
        )
        .route("/urls/shortcode/{short_code}", get(get_url_by_code_handler))
}
