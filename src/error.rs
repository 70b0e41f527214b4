//! Error types for the cache
//!
//! Provides unified error handling using thiserror. The boolean operations on
//! [`CacheStore`](crate::cache::CacheStore) collapse these into `false`; the
//! `try_*` variants hand them back to callers that want the reason.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Store already holds `limit` entries and the key is new
    #[error("Cache full: limit of {limit} entries reached")]
    CacheFull { limit: usize },

    /// Key is empty or longer than the allowed bound
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Value is the absent marker
    #[error("Invalid value for key: {0}")]
    InvalidValue(String),

    /// `add` refused to overwrite an existing entry
    #[error("Key already exists: {0}")]
    KeyExists(String),

    /// Key not found in cache
    #[error("Key not found: {0}")]
    NotFound(String),
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CacheError::CacheFull { limit: 2 }.to_string(),
            "Cache full: limit of 2 entries reached"
        );
        assert_eq!(
            CacheError::KeyExists("a".to_string()).to_string(),
            "Key already exists: a"
        );
        assert_eq!(
            CacheError::NotFound("b".to_string()).to_string(),
            "Key not found: b"
        );
    }
}
