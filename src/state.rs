//! Shared application state injected into request handlers.

use std::sync::Arc;

use crate::application::services::UrlService;
use crate::domain::repositories::UrlRepository;
use crate::utils::code_generator::CodeGenerator;

/// Application state shared by all handlers.
///
/// The storage backend is chosen once at startup and reached only through
/// [`UrlService`], so handlers never hold a storage handle themselves.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService>,
}

impl AppState {
    pub fn new(
        repository: Arc<dyn UrlRepository>,
        generator: CodeGenerator,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            url_service: Arc::new(UrlService::new(repository, generator, base_url)),
        }
    }
}
