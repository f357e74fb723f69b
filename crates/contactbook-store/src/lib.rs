//! Contact book storage gateway
//!
//! Loads and saves the entire contact collection as one document.
//!
//! - [`ContactStore`]: the storage handle passed to the mutation engine
//! - [`JsonFileStore`]: one JSON array on disk, replaced atomically on save
//! - [`MemoryStore`]: in-memory double
//!
//! With the `mock` feature (or under `cfg(test)`) a `mockall`-generated
//! `MockContactStore` is also exported.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod error;
mod json;
mod memory;
mod store;

pub use error::StorageError;
pub use json::{JsonFileStore, DEFAULT_STORE_PATH};
pub use memory::MemoryStore;
pub use store::ContactStore;

#[cfg(any(test, feature = "mock"))]
pub use store::MockContactStore;
