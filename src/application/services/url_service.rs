//! Short URL creation, lookup and redirect resolution service.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::{CodeGenerator, is_valid_code};
use crate::utils::url_validator::validate_long_url;

/// Service composing the code generator with the URL record store.
///
/// Creation draws random codes until one is free, then inserts. If the insert
/// still loses a race to a concurrent create, a fresh code is drawn. Both kinds
/// of retry share one attempt budget ([`CodeGenerator::max_attempts`]).
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
    generator: CodeGenerator,
    base_url: String,
}

impl UrlService {
    /// Creates a new URL service.
    ///
    /// `base_url` is the public prefix of short URLs, e.g. `http://localhost:8000`.
    pub fn new(
        repository: Arc<dyn UrlRepository>,
        generator: CodeGenerator,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            repository,
            generator,
            base_url: base_url.into(),
        }
    }

    /// Creates a new record for `long_url` under a freshly generated code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is empty or not an absolute
    /// http(s) URL.
    /// Returns [`AppError::CodeSpaceExhausted`] if no free code was found
    /// within the attempt budget.
    pub async fn create_url(&self, long_url: String) -> Result<UrlRecord, AppError> {
        validate_long_url(&long_url)?;

        let mut attempts = 0;
        loop {
            let short_code = self.next_free_code(&mut attempts).await?;

            match self
                .repository
                .create(NewUrlRecord::new(short_code.clone(), long_url.clone()))
                .await
            {
                Ok(record) => {
                    info!(id = record.id, short_code = %record.short_code, "Short URL created");
                    return Ok(record);
                }
                Err(AppError::DuplicateCode { .. }) => {
                    warn!(%short_code, attempts, "Short code taken during insert, retrying");
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Draws codes until one is not in the store, counting every draw against
    /// the shared `attempts` budget.
    async fn next_free_code(&self, attempts: &mut usize) -> Result<String, AppError> {
        let max_attempts = self.generator.max_attempts();

        while *attempts < max_attempts {
            *attempts += 1;
            let code = self.generator.generate_code();

            if !self.repository.exists_by_code(&code).await? {
                return Ok(code);
            }

            debug!(%code, attempt = *attempts, "Short code collision");
        }

        warn!(max_attempts, "Short code space exhausted");
        Err(AppError::code_space_exhausted(max_attempts))
    }

    /// Returns every stored record, ordered by id.
    pub async fn list_urls(&self) -> Result<Vec<UrlRecord>, AppError> {
        self.repository.list_all().await
    }

    /// Retrieves a record by its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this id.
    pub async fn get_by_id(&self, id: i64) -> Result<UrlRecord, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| id_not_found(id))
    }

    /// Retrieves a record by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this code. Codes no
    /// generator could produce are rejected without a store lookup.
    pub async fn get_by_code(&self, short_code: &str) -> Result<UrlRecord, AppError> {
        if !is_valid_code(short_code) {
            return Err(code_not_found(short_code));
        }

        self.repository
            .find_by_code(short_code)
            .await?
            .ok_or_else(|| code_not_found(short_code))
    }

    /// Replaces the long URL of a record. The short code is never regenerated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an invalid URL and
    /// [`AppError::NotFound`] if no record has this id.
    pub async fn update_long_url(&self, id: i64, long_url: String) -> Result<UrlRecord, AppError> {
        validate_long_url(&long_url)?;

        let record = self
            .repository
            .update_long_url(id, &long_url)
            .await?
            .ok_or_else(|| id_not_found(id))?;

        info!(id, short_code = %record.short_code, "Long URL updated");
        Ok(record)
    }

    /// Deletes a record by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this id.
    pub async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(id_not_found(id));
        }

        info!(id, "Short URL deleted");
        Ok(())
    }

    /// Resolves a short code for redirection and counts the hit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this code.
    pub async fn resolve_for_redirect(&self, short_code: &str) -> Result<String, AppError> {
        if !is_valid_code(short_code) {
            return Err(code_not_found(short_code));
        }

        self.repository
            .record_hit(short_code)
            .await?
            .ok_or_else(|| code_not_found(short_code))
    }

    /// Builds the user-facing short URL for a code.
    pub fn build_short_url(&self, short_code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), short_code)
    }

    /// Checks that the backing store is reachable.
    pub async fn check_storage(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}

fn id_not_found(id: i64) -> AppError {
    AppError::not_found(format!("URL with ID '{}' not found.", id), json!({ "id": id }))
}

fn code_not_found(short_code: &str) -> AppError {
    AppError::not_found(
        format!("URL with short code '{}' not found.", short_code),
        json!({ "short_code": short_code }),
    )
}
