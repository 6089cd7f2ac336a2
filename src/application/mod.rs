//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::url_service::UrlService`] - Short code allocation, URL record
//!   CRUD and redirect resolution

pub mod services;
