//! Key-value store abstraction for puzzle and share persistence.
//!
//! The game's data model is a flat string-keyed JSON namespace
//! (`puzzle-<date>`, `share-<date>-<shareId>`). [`KeyValueStore`] captures
//! the get/put capability; [`FjallStore`] persists to disk, [`MemoryStore`]
//! keeps everything in process for tests and ephemeral runs.

mod error;
#[cfg(feature = "kv")]
mod fjall_store;
mod memory;
mod store;

pub use error::KvError;
#[cfg(feature = "kv")]
pub use fjall_store::FjallStore;
pub use memory::MemoryStore;
pub use store::KeyValueStore;
