//! Repository trait for URL record data access.

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the durable short code to long URL mapping.
///
/// Every implementation must enforce short code uniqueness itself, so that two
/// concurrent `create` calls carrying the same code produce exactly one record
/// and one [`AppError::DuplicateCode`].
///
/// Lookups return `Ok(None)` / `Ok(false)` for missing keys. Translating those
/// into [`AppError::NotFound`] is left to the service layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new record with `click_count = 0` and `created_at = now`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateCode`] if the short code is already taken.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError>;

    /// Returns every record, ordered by id.
    async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<UrlRecord>, AppError>;

    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Checks whether a short code is already in use.
    ///
    /// Used by the code generator before attempting an insert.
    async fn exists_by_code(&self, short_code: &str) -> Result<bool, AppError>;

    /// Replaces `long_url` of the record, leaving every other field untouched.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(record))` with the updated record
    /// - `Ok(None)` if no record has this id
    async fn update_long_url(
        &self,
        id: i64,
        long_url: &str,
    ) -> Result<Option<UrlRecord>, AppError>;

    /// Deletes a record. Returns `Ok(false)` if no record has this id.
    ///
    /// Deleted ids are never handed out again.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Increments `click_count` for the code and returns its long URL.
    ///
    /// Returns `Ok(None)` if the code is unknown.
    async fn record_hit(&self, short_code: &str) -> Result<Option<String>, AppError>;

    /// Checks that the backing store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
