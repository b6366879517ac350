//! Composite storage key for share records.

use std::fmt;

/// Identifies a share: which daily puzzle, and which published attempt.
///
/// The storage key derivation is deterministic and collision-free: the same
/// `(date, share id)` pair always maps to `share-<date>-<shareId>`, and
/// distinct pairs map to distinct keys. Records already in the store depend
/// on this exact format.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShareKey {
    date: String,
    share_id: String,
}

impl ShareKey {
    /// Create a key for the given date and share id.
    pub fn new(date: impl Into<String>, share_id: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            share_id: share_id.into(),
        }
    }

    /// The string key this share is stored under.
    pub fn storage_key(&self) -> String {
        format!("share-{}-{}", self.date, self.share_id)
    }

    /// The puzzle date part of the key.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// The share id part of the key.
    pub fn share_id(&self) -> &str {
        &self.share_id
    }
}

impl fmt::Display for ShareKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "share-{}-{}", self.date, self.share_id)
    }
}
