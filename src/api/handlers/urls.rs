//! Handlers for URL management endpoints (create, list, read, update, delete).

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::url::{UrlRequest, UrlResponse};
use crate::api::extract::{ApiPath, ValidatedJson};
use crate::domain::entities::UrlRecord;
use crate::error::AppError;
use crate::state::AppState;

fn to_response(state: &AppState, record: UrlRecord) -> UrlResponse {
    let short_url = state.url_service.build_short_url(&record.short_code);
    UrlResponse::from_record(record, short_url)
}

/// Creates a new short URL.
///
/// # Endpoint
///
/// `POST /api/urls`
///
/// # Request Body
///
/// ```json
/// { "long_url": "https://www.example.com/" }
/// ```
///
/// # Errors
///
/// Returns 422 Unprocessable Entity if the body is not valid JSON or
/// `long_url` is not a valid absolute URL.
/// Returns 503 Service Unavailable if no free short code could be found.
pub async fn create_url_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UrlRequest>,
) -> Result<(StatusCode, Json<UrlResponse>), AppError> {
    let record = state.url_service.create_url(payload.long_url).await?;

    Ok((StatusCode::CREATED, Json(to_response(&state, record))))
}

/// Lists every stored short URL.
///
/// # Endpoint
///
/// `GET /api/urls`
pub async fn list_urls_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UrlResponse>>, AppError> {
    let records = state.url_service.list_urls().await?;

    Ok(Json(
        records
            .into_iter()
            .map(|record| to_response(&state, record))
            .collect(),
    ))
}

/// Retrieves a short URL by its database id.
///
/// # Endpoint
///
/// `GET /api/urls/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no record has this id.
/// Returns 422 Unprocessable Entity if `id` is not an integer.
pub async fn get_url_handler(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<UrlResponse>, AppError> {
    let record = state.url_service.get_by_id(id).await?;
    Ok(Json(to_response(&state, record)))
}

/// Retrieves a short URL by its short code. Does not count as a click.
///
/// # Endpoint
///
/// `GET /api/urls/shortcode/{short_code}`
///
/// # Errors
///
/// Returns 404 Not Found if no record has this code.
pub async fn get_url_by_code_handler(
    ApiPath(short_code): ApiPath<String>,
    State(state): State<AppState>,
) -> Result<Json<UrlResponse>, AppError> {
    let record = state.url_service.get_by_code(&short_code).await?;
    Ok(Json(to_response(&state, record)))
}

/// Replaces the long URL of an existing short URL.
///
/// # Endpoint
///
/// `PUT /api/urls/{id}`
///
/// The short code, id, creation time and click count are left unchanged.
///
/// # Errors
///
/// Returns 404 Not Found if no record has this id.
/// Returns 422 Unprocessable Entity if `long_url` is invalid.
pub async fn update_url_handler(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UrlRequest>,
) -> Result<Json<UrlResponse>, AppError> {
    let record = state
        .url_service
        .update_long_url(id, payload.long_url)
        .await?;

    Ok(Json(to_response(&state, record)))
}

/// Deletes a short URL.
///
/// # Endpoint
///
/// `DELETE /api/urls/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no record has this id.
pub async fn delete_url_handler(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.url_service.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
