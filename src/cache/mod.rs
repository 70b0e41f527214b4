//! Cache Module
//!
//! Provides a bounded in-memory key-value cache with timestamped entries.

mod entry;
pub mod helpers;
mod shared;
mod store;


// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use shared::SharedCache;
pub use store::CacheStore;

// == Public Constants ==
/// Maximum allowed key length in characters
pub const MAX_KEY_LENGTH: usize = 255;
