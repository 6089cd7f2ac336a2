//! Short code generation.
//!
//! Codes are drawn uniformly from the 62-symbol alphabet `[A-Za-z0-9]`. With
//! the default length of 6 there are 62^6 (about 5.6 * 10^10) possible codes,
//! so a collision on any single attempt stays negligible until the store holds
//! a large fraction of that space. The attempt bound turns sustained collisions
//! into [`crate::error::AppError::CodeSpaceExhausted`] instead of an unbounded
//! loop.

use rand::Rng;
use rand::distr::Alphanumeric;

use crate::domain::entities::url_record::MAX_SHORT_CODE_LENGTH;

/// Default number of characters in a generated code.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Default number of candidates tried before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Random short code generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeGenerator {
    length: usize,
    max_attempts: usize,
}

impl CodeGenerator {
    /// Creates a generator, clamping `length` to `1..=10` and `max_attempts`
    /// to at least one.
    pub fn new(length: usize, max_attempts: usize) -> Self {
        Self {
            length: length.clamp(1, MAX_SHORT_CODE_LENGTH),
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Produces one candidate code. Uniqueness is checked by the caller.
    pub fn generate_code(&self) -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(self.length)
            .map(char::from)
            .collect()
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH, DEFAULT_MAX_ATTEMPTS)
    }
}

/// Returns true if `code` could have been produced by a generator.
pub fn is_valid_code(code: &str) -> bool {
    !code.is_empty()
        && code.len() <= MAX_SHORT_CODE_LENGTH
        && code.bytes().all(|b| b.is_ascii_alphanumeric())
}
