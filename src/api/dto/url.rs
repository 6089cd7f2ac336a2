//! DTOs for the URL management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::UrlRecord;

/// Request body for creating or updating a short URL.
#[derive(Debug, Deserialize, Validate)]
pub struct UrlRequest {
    /// The original URL (must be a valid absolute URL).
    #[validate(url(message = "Invalid URL format"))]
    pub long_url: String,
}

/// A stored URL record together with its full short URL.
#[derive(Debug, Serialize)]
pub struct UrlResponse {
    pub id: i64,
    pub short_code: String,
    pub long_url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
}

impl UrlResponse {
    pub fn from_record(record: UrlRecord, short_url: String) -> Self {
        Self {
            id: record.id,
            short_code: record.short_code,
            long_url: record.long_url,
            short_url,
            created_at: record.created_at,
            click_count: record.click_count,
        }
    }
}
