use thiserror::Error;

/// Errors raised by the key-must-exist access paths (`at`, `at_mut`).
///
/// Lookups that tolerate absence (`find`, `get`) return `None` instead, and
/// `insert`/`remove` never fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("KEY_NOT_FOUND")]
    KeyNotFound,
}
