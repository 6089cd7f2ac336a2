//! Repository implementations.
//!
//! # Repositories
//!
//! - [`PgUrlRepository`] - PostgreSQL storage, uniqueness enforced by the
//!   `urls_short_code_key` constraint
//! - [`InMemoryUrlRepository`] - process-local storage for development and
//!   tests, uniqueness enforced under a single write lock

pub mod memory_url_repository;
pub mod pg_url_repository;

pub use memory_url_repository::InMemoryUrlRepository;
pub use pg_url_repository::PgUrlRepository;
