//! URL record entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// Maximum length of a short code, matching the `urls.short_code` column.
pub const MAX_SHORT_CODE_LENGTH: usize = 10;

/// A stored short code to long URL mapping with its metadata.
///
/// `id`, `short_code` and `created_at` never change after creation. Only
/// `long_url` (via update) and `click_count` (via redirect resolution) are
/// mutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: i64,
    pub short_code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(
        id: i64,
        short_code: String,
        long_url: String,
        created_at: DateTime<Utc>,
        click_count: i64,
    ) -> Self {
        Self {
            id,
            short_code,
            long_url,
            created_at,
            click_count,
        }
    }
}

/// Input data for inserting a new record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlRecord {
    pub short_code: String,
    pub long_url: String,
}

impl NewUrlRecord {
    pub fn new(short_code: impl Into<String>, long_url: impl Into<String>) -> Self {
        Self {
            short_code: short_code.into(),
            long_url: long_url.into(),
        }
    }
}
