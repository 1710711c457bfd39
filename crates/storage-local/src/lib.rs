//! JSON-file storage implementation for Heritage Hub.
//!
//! Implements the `KeyValueStore` port from `heritage-core` over a single
//! JSON object file, the durable analog of a browser-local storage
//! substrate. Single-key writes are atomic (temp file + rename); there is
//! no cross-key transaction support.

mod errors;
mod local_store;

pub use errors::StorageError;
pub use local_store::LocalStore;

// Re-export trait from core for convenience
pub use heritage_core::store::KeyValueStore;
