//! HTTP middleware for request processing.
//!
//! Provides request tracing and per-request timeouts.

pub mod timeout;
pub mod tracing;
