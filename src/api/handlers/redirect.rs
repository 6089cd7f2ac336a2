//! Handler for short URL redirect.

use axum::{
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::api::extract::ApiPath;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{short_code}`
///
/// Every successful resolution increments the record's click counter before
/// the client is answered with `302 Found` and a `Location` header.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    ApiPath(short_code): ApiPath<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let long_url = state.url_service.resolve_for_redirect(&short_code).await?;

    debug!(%short_code, %long_url, "Redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, long_url)]))
}
