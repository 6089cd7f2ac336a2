//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`UrlRecord`] - A stored mapping from short code to long URL
//!
//! Creation input is modelled separately as [`NewUrlRecord`], since `id`,
//! `created_at` and `click_count` are assigned by the store.

pub mod url_record;

pub use url_record::{NewUrlRecord, UrlRecord};
