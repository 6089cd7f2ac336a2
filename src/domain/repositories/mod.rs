//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and are
//! implemented by concrete stores in the infrastructure layer.
//!
//! # Available Repositories
//!
//! - [`UrlRepository`] - URL record CRUD, code lookups and redirect hits
//!
//! # Implementations
//!
//! - `crate::infrastructure::persistence::PgUrlRepository` - PostgreSQL
//! - `crate::infrastructure::persistence::InMemoryUrlRepository` - process-local
//! - Mock implementations are auto-generated via `mockall` for testing

pub mod url_repository;

pub use url_repository::UrlRepository;

#[cfg(test)]
pub use url_repository::MockUrlRepository;
