//! Share records: the result a player publishes after finishing a puzzle.
//!
//! A share is looked up by `(date, share id)` and stored under the composite
//! key `share-<date>-<shareId>`. When no store is configured, lookups
//! degrade to synthetic fallback data so the share page stays usable in
//! development environments.

mod key;
mod record;
mod service;

pub use key::ShareKey;
pub use record::{NewShare, ShareRecord};
pub use service::{CreatedShare, ShareData, ShareError, ShareService};
