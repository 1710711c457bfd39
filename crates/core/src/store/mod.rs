//! Key-value store port.
//!
//! The durable substrate is modeled as a string key-value port so services
//! can be tested without a real backing store. The `storage-local` crate
//! provides the durable implementation.

mod store_traits;

pub use store_traits::*;
