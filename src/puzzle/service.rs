//! Puzzle lookup and admin write path.

use std::sync::Arc;

use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

use crate::kv::KeyValueStore;
use crate::logging::{error, info, warn};

/// Storage key for the puzzle published on `date`.
fn storage_key(date: &str) -> String {
    format!("puzzle-{}", date)
}

/// Failures surfaced by the puzzle operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleError {
    /// No puzzle is stored for the requested date.
    #[error("Puzzle not found")]
    NotFound,

    /// The store failed during lookup or write.
    #[error("Error loading puzzle")]
    Internal,

    /// Writing is impossible because no store is configured.
    #[error("Puzzle storage is not available")]
    Unavailable,
}

impl PuzzleError {
    /// HTTP-style status code for this failure.
    pub fn status(&self) -> u16 {
        match self {
            PuzzleError::NotFound => 404,
            PuzzleError::Internal => 500,
            PuzzleError::Unavailable => 503,
        }
    }
}

/// A successfully resolved puzzle.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PuzzleData {
    /// The puzzle exactly as persisted.
    Stored(Value),
    /// The built-in demo puzzle for storeless environments.
    Fallback(Value),
}

impl PuzzleData {
    /// Whether this is the built-in demo puzzle rather than a stored one.
    pub fn is_fallback(&self) -> bool {
        matches!(self, PuzzleData::Fallback(_))
    }
}

/// Resolves dates to daily puzzles.
#[derive(Clone)]
pub struct PuzzleService {
    store: Option<Arc<dyn KeyValueStore>>,
}

impl PuzzleService {
    /// Create a service over an optional store capability.
    pub fn new(store: Option<Arc<dyn KeyValueStore>>) -> Self {
        Self { store }
    }

    /// Look up the puzzle stored for `date`.
    ///
    /// Without a configured store this returns [`PuzzleData::Fallback`]
    /// for any date. Stored puzzles are returned unmodified.
    pub async fn get(&self, date: &str) -> Result<PuzzleData, PuzzleError> {
        let Some(store) = &self.store else {
            warn!(date = date, "no store configured, serving demo puzzle");
            return Ok(PuzzleData::Fallback(demo_puzzle(date)));
        };

        let key = storage_key(date);
        match store.get(&key).await {
            Ok(Some(value)) => Ok(PuzzleData::Stored(value)),
            Ok(None) => Err(PuzzleError::NotFound),
            Err(err) => {
                error!(key = key.as_str(), error = %err, "puzzle lookup failed");
                Err(PuzzleError::Internal)
            }
        }
    }

    /// Store the puzzle for `date`, replacing any previous one.
    pub async fn put(&self, date: &str, puzzle: &Value) -> Result<(), PuzzleError> {
        let Some(store) = &self.store else {
            warn!(date = date, "no store configured, rejecting puzzle write");
            return Err(PuzzleError::Unavailable);
        };

        let key = storage_key(date);
        match store.put(&key, puzzle).await {
            Ok(()) => {
                info!(key = key.as_str(), "puzzle stored");
                Ok(())
            }
            Err(err) => {
                error!(key = key.as_str(), error = %err, "puzzle write failed");
                Err(PuzzleError::Internal)
            }
        }
    }
}

/// Built-in puzzle served when no store is configured.
///
/// A five-letter word square; each across answer doubles as the matching
/// down answer.
fn demo_puzzle(date: &str) -> Value {
    json!({
        "date": date,
        "size": 5,
        "rows": ["HEART", "EMBER", "ABUSE", "RESIN", "TREND"],
        "clues": [
            "Pump in your chest",
            "Still-glowing coal",
            "Treat cruelly",
            "Sticky tree output",
            "General direction",
        ],
    })
}
